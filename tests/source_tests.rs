use healthlog::errors::AppError;
use healthlog::source::{CsvFileSource, GoogleSheetSource, RowSource, columns, read_rows};

mod common;
use common::{temp_out, write_csv};

#[test]
fn read_rows_maps_cells_by_header() {
    let text = "Timestamp,A) Report event (今),Comments\n\
                1/28/2021 2:06:51,飲み物,  2 beers  \n\
                1/28/2021 9:00:00,,\n";
    let rows = read_rows(text.as_bytes()).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].field(columns::NOW_EVENT), Some("飲み物"));
    assert_eq!(rows[0].field(columns::COMMENTS), Some("2 beers"));
    assert_eq!(rows[1].field(columns::NOW_EVENT), None);
    assert_eq!(rows[1].field(columns::RETRO_DATE), None);
}

#[test]
fn short_records_are_tolerated() {
    let text = "Timestamp,A) Report event (今),Comments\n1/28/2021 9:00:00,散歩\n";
    let rows = read_rows(text.as_bytes()).unwrap();
    assert_eq!(rows[0].field(columns::NOW_EVENT), Some("散歩"));
    assert_eq!(rows[0].field(columns::COMMENTS), None);
}

#[test]
fn csv_file_source_reads_export() {
    let path = write_csv(
        "source_csv",
        &[["1/4/2021 23:00:00", "睡眠", "Start", "", "", "", "", ""]],
    );
    let source = CsvFileSource::new(&path);

    let rows = source.fetch().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].field(columns::NOW_TRANSITION), Some("Start"));
    assert!(source.describe().contains(&path));
}

#[test]
fn missing_csv_file_is_an_io_error() {
    let path = temp_out("source_missing", "csv");
    let err = CsvFileSource::new(&path).fetch().unwrap_err();
    assert!(matches!(err, AppError::Io(_)));
}

#[test]
fn sheet_export_url() {
    let source = GoogleSheetSource::new("abc123");
    assert_eq!(
        source.export_url(),
        "https://docs.google.com/spreadsheets/d/abc123/export?format=csv"
    );
    assert_eq!(source.describe(), "Google Sheet abc123");
}
