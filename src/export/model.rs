use crate::models::WeeklyBucket;
use serde::Serialize;

/// Flat row written by the exporters.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct WeeklyExport {
    pub week_start_date: String,
    pub week_end_date: String,
    pub total_quantity: f64,
    pub event_count: u32,
}

impl From<&WeeklyBucket> for WeeklyExport {
    fn from(b: &WeeklyBucket) -> Self {
        Self {
            week_start_date: b.week_start_date.format("%Y-%m-%d").to_string(),
            week_end_date: b.week_end_date.format("%Y-%m-%d").to_string(),
            total_quantity: b.total_quantity,
            event_count: b.event_count,
        }
    }
}
