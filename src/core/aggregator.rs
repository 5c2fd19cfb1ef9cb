//! Weekly totals over effective dates.

use crate::models::{DrinkEvent, WeeklyBucket};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::BTreeMap;

/// Days since the most recent `week_start` (0..=6).
pub fn days_into_week(date: NaiveDate, week_start: Weekday) -> u32 {
    (date.weekday().num_days_from_monday() + 7 - week_start.num_days_from_monday()) % 7
}

pub fn week_start_of(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    date - Duration::days(i64::from(days_into_week(date, week_start)))
}

/// One bucket per week that has at least one drink, sorted by week start.
pub fn aggregate(drinks: &[DrinkEvent], week_start: Weekday) -> Vec<WeeklyBucket> {
    let mut weeks: BTreeMap<NaiveDate, (f64, u32)> = BTreeMap::new();

    for drink in drinks {
        let entry = weeks
            .entry(week_start_of(drink.effective_date, week_start))
            .or_insert((0.0, 0));
        entry.0 += drink.quantity;
        entry.1 += 1;
    }

    let buckets: Vec<WeeklyBucket> = weeks
        .into_iter()
        .map(|(start, (total, count))| WeeklyBucket::new(start, total, count))
        .collect();

    tracing::info!(
        drinks = drinks.len(),
        weeks = buckets.len(),
        "aggregated drinks by week"
    );
    buckets
}
