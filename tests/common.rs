#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::TimeZone;
use chrono_tz::{America::New_York, Tz};
use healthlog::config::PipelineSettings;
use healthlog::core::backup::BackupLogic;
use healthlog::source::{SheetRow, columns};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub fn healthlog() -> Command {
    cargo_bin_cmd!("healthlog")
}

/// Create a unique test DB path inside the system temp dir and remove any
/// existing file (and stale backups) left by a previous run.
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_healthlog.sqlite", name));
    fs::remove_file(&path).ok();
    BackupLogic::delete_all(&path).ok();
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_healthlog_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn settings() -> PipelineSettings {
    PipelineSettings::default()
}

pub fn ny(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> chrono::DateTime<Tz> {
    New_York
        .with_ymd_and_hms(y, m, d, h, min, s)
        .single()
        .expect("unambiguous local time")
}

/// Sheet row reported in the "now" columns.
pub fn now_row(timestamp: &str, name: &str, transition: &str, comments: &str) -> SheetRow {
    SheetRow::new()
        .with(columns::TIMESTAMP, timestamp)
        .with(columns::NOW_EVENT, name)
        .with(columns::NOW_TRANSITION, transition)
        .with(columns::COMMENTS, comments)
}

/// Sheet row reported in the retrospective columns.
pub fn retro_row(timestamp: &str, name: &str, transition: &str, date: &str, time: &str) -> SheetRow {
    SheetRow::new()
        .with(columns::TIMESTAMP, timestamp)
        .with(columns::RETRO_EVENT, name)
        .with(columns::RETRO_TRANSITION, transition)
        .with(columns::RETRO_DATE, date)
        .with(columns::RETRO_TIME, time)
}

/// Write a CSV export with the sheet's header line. Each record lists the
/// cells in `columns::ALL` order.
pub fn write_csv(name: &str, records: &[[&str; 8]]) -> String {
    let path = temp_out(name, "csv");
    let mut wtr = csv::Writer::from_path(&path).expect("create csv");
    wtr.write_record(columns::ALL).expect("write header");
    for rec in records {
        wtr.write_record(rec).expect("write record");
    }
    wtr.flush().expect("flush csv");
    path
}

/// A small export: a sleep pair, two drink reports and a stray stop.
pub fn sample_csv(name: &str) -> String {
    write_csv(
        name,
        &[
            ["1/4/2021 23:00:00", "睡眠", "Start", "", "", "", "", ""],
            ["1/5/2021 7:00:00", "睡眠", "Stop", "", "", "", "", ""],
            ["1/5/2021 21:00:00", "飲み物", "", "", "", "", "", "2 beers"],
            ["1/6/2021 9:30:00", "", "", "飲み物", "", "10:00:00 PM", "1/5/2021", "1.5 wine"],
            ["1/7/2021 12:00:00", "散歩", "Stop", "", "", "", "", ""],
        ],
    )
}

pub fn backups_of(db_path: &str) -> Vec<PathBuf> {
    BackupLogic::list(Path::new(db_path)).expect("list backups")
}
