use chrono::NaiveDate;
use serde::Serialize;

/// Alcohol-consumption entry derived from an [`super::Event`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DrinkEvent {
    /// Row id of the originating raw event, known only after persisting.
    pub source_event_ref: Option<i64>,
    pub effective_date: NaiveDate,
    pub quantity: f64,
    pub comments: Option<String>,
}

impl DrinkEvent {
    pub fn new(effective_date: NaiveDate, quantity: f64, comments: Option<String>) -> Self {
        Self {
            source_event_ref: None,
            effective_date,
            quantity,
            comments,
        }
    }

    pub fn linked_to(mut self, raw_event_id: i64) -> Self {
        self.source_event_ref = Some(raw_event_id);
        self
    }
}
