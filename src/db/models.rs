//! Stored row shapes, as read back from SQLite.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawEventRow {
    pub id: i64,
    pub reported_at: Option<String>,
    pub report_mode: String,
    pub event_name: String,
    pub transition: Option<String>,
    pub occurred_at: String,
    pub effective_date: String,
    pub comments: Option<String>,
    pub is_valid: bool,
    pub validation_note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrinkEventRow {
    pub id: i64,
    pub raw_event_id: i64,
    pub effective_date: String,
    pub quantity: f64,
    pub comments: Option<String>,
}

/// Row counts of the data tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TableCounts {
    pub raw_events: i64,
    pub drink_events: i64,
    pub weekly_totals: i64,
}
