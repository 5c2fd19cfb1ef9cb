//! Unified application error type.
//! Every module (config, source, core, db, export, cli) returns AppError so
//! failures surface through one enumerable type.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Data source
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Fetch error: {0}")]
    Fetch(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Unknown timezone: {0}")]
    InvalidTimezone(String),

    #[error("Unknown weekday: {0}")]
    InvalidWeekday(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Update / export
    // ---------------------------
    #[error("Update failed: {source}")]
    UpdateFailed {
        #[source]
        source: Box<AppError>,
        restored: bool,
    },

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
