//! The pure part of an update: parse → validate → extract → aggregate.

use crate::config::PipelineSettings;
use crate::core::{aggregator, extractor, parser, validator};
use crate::models::{DrinkEvent, ErrorRecord, Event, WeeklyBucket};
use crate::source::SheetRow;

#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub events: Vec<Event>,
    pub errors: Vec<ErrorRecord>,
    pub drinks: Vec<DrinkEvent>,
    pub weekly: Vec<WeeklyBucket>,
}

pub fn run_pipeline(rows: &[SheetRow], settings: &PipelineSettings) -> PipelineOutput {
    let parsed = parser::parse_rows(rows, settings);
    let (events, errors) = validator::validate(parsed);
    let drinks = extractor::extract(&events);
    let weekly = aggregator::aggregate(&drinks, settings.week_start);

    PipelineOutput {
        events,
        errors,
        drinks,
        weekly,
    }
}
