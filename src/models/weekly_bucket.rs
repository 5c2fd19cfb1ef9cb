use chrono::{Duration, NaiveDate};
use serde::Serialize;

/// Totals for one calendar week.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeeklyBucket {
    pub week_start_date: NaiveDate,
    pub week_end_date: NaiveDate,
    pub total_quantity: f64,
    pub event_count: u32,
}

impl WeeklyBucket {
    pub fn new(week_start_date: NaiveDate, total_quantity: f64, event_count: u32) -> Self {
        Self {
            week_start_date,
            week_end_date: week_start_date + Duration::days(6),
            total_quantity,
            event_count,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.week_start_date <= date && date <= self.week_end_date
    }
}
