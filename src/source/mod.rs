//! Tabular input collaborators. A source yields header→cell rows exactly as
//! exported from the tracking spreadsheet.

mod csv_file;
mod sheet;

pub use csv_file::CsvFileSource;
pub use sheet::GoogleSheetSource;

use crate::errors::AppResult;
use std::collections::HashMap;
use std::io::Read;

/// Spreadsheet column headers (data, kept verbatim).
pub mod columns {
    pub const TIMESTAMP: &str = "Timestamp";
    pub const NOW_EVENT: &str = "A) Report event (今)";
    pub const NOW_TRANSITION: &str = "Is now the stop or start time?";
    pub const RETRO_EVENT: &str = "B) Report event (別時)";
    pub const RETRO_TRANSITION: &str = "Retro: stop or start time?";
    pub const RETRO_TIME: &str = "Retro: Time";
    pub const RETRO_DATE: &str = "Retro: Date";
    pub const COMMENTS: &str = "Comments";

    pub const ALL: [&str; 8] = [
        TIMESTAMP,
        NOW_EVENT,
        NOW_TRANSITION,
        RETRO_EVENT,
        RETRO_TRANSITION,
        RETRO_TIME,
        RETRO_DATE,
        COMMENTS,
    ];
}

/// One spreadsheet row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetRow {
    cells: HashMap<String, String>,
}

impl SheetRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, column: &str, value: &str) -> Self {
        self.cells.insert(column.to_string(), value.to_string());
        self
    }

    /// Trimmed cell value; blank and missing cells are both `None`.
    pub fn field(&self, column: &str) -> Option<&str> {
        self.cells
            .get(column)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }
}

impl FromIterator<(String, String)> for SheetRow {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// Producer of sheet rows for one pipeline run.
pub trait RowSource {
    fn fetch(&self) -> AppResult<Vec<SheetRow>>;

    /// Short human-readable origin, used in logs and CLI output.
    fn describe(&self) -> String;
}

/// Parse CSV text (first line = headers) into rows. Input must be UTF-8.
pub fn read_rows<R: Read>(reader: R) -> AppResult<Vec<SheetRow>> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(
            headers
                .iter()
                .cloned()
                .zip(record.iter().map(str::to_string))
                .collect(),
        );
    }
    Ok(rows)
}
