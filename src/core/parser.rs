//! Sheet rows → canonical events.
//!
//! Each row is either an "immediate" report (the event happened at the
//! submission timestamp) or a "retrospective" one (explicit, possibly partial,
//! back-dated date and time). Rows that cannot be classified or timestamped
//! are skipped; a bad row never aborts the batch.

use crate::config::PipelineSettings;
use crate::core::datetime::{Moment, parse_moment, parse_time_of_day};
use crate::models::{Event, ReportMode, Transition};
use crate::source::{SheetRow, columns};
use thiserror::Error;

/// Why a single row was dropped.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RowError {
    #[error("failed to parse timestamp '{0}'")]
    Timestamp(String),

    #[error("failed to parse retro datetime date='{date}', time='{time}'")]
    Retro { date: String, time: String },

    #[error("missing timestamp needed for retro fallback")]
    MissingFallback,
}

/// Parse every row; skipped rows are logged with their index and omitted.
pub fn parse_rows(rows: &[SheetRow], settings: &PipelineSettings) -> Vec<Event> {
    let mut events = Vec::with_capacity(rows.len());

    for (idx, row) in rows.iter().enumerate() {
        match parse_row(row, settings) {
            Ok(Some(ev)) => events.push(ev),
            Ok(None) => tracing::debug!(row = idx, "row carries no event"),
            Err(e) => tracing::warn!(row = idx, error = %e, "skipping row"),
        }
    }

    tracing::info!(events = events.len(), rows = rows.len(), "parsed sheet rows");
    events
}

/// Parse one row. `Ok(None)` means the row reports no event at all.
pub fn parse_row(row: &SheetRow, settings: &PipelineSettings) -> Result<Option<Event>, RowError> {
    let raw_timestamp = row.field(columns::TIMESTAMP);
    let reported = raw_timestamp.and_then(|t| parse_moment(t, None));

    let (mode, name, transition_col, occurred) =
        if let Some(name) = row.field(columns::NOW_EVENT) {
            let occurred = reported.ok_or_else(|| {
                RowError::Timestamp(raw_timestamp.unwrap_or_default().to_string())
            })?;
            (
                ReportMode::Immediate,
                name,
                columns::NOW_TRANSITION,
                occurred,
            )
        } else if let Some(name) = row.field(columns::RETRO_EVENT) {
            (
                ReportMode::Retrospective,
                name,
                columns::RETRO_TRANSITION,
                retro_moment(row, reported)?,
            )
        } else {
            return Ok(None);
        };

    let transition = row.field(transition_col).and_then(Transition::from_sheet);
    let tz = settings.timezone;

    let event = Event::new(mode, name, transition, occurred.localize(tz), settings.cutoff)
        .with_reported_at(reported.map(|m| m.localize(tz)))
        .with_comments(row.field(columns::COMMENTS));

    Ok(Some(event))
}

/// Retro date/time, falling back to the submission timestamp for whichever
/// part is blank.
fn retro_moment(row: &SheetRow, reported: Option<Moment>) -> Result<Moment, RowError> {
    let date = row.field(columns::RETRO_DATE);
    let time = row.field(columns::RETRO_TIME);

    let retro_err = || RowError::Retro {
        date: date.unwrap_or_default().to_string(),
        time: time.unwrap_or_default().to_string(),
    };

    match (date, time) {
        (Some(d), t) => parse_moment(d, t).ok_or_else(retro_err),
        (None, Some(t)) => {
            let base = reported.ok_or(RowError::MissingFallback)?;
            let time = parse_time_of_day(t).ok_or_else(retro_err)?;
            Ok(base.with_time(time))
        }
        (None, None) => reported.ok_or(RowError::MissingFallback),
    }
}
