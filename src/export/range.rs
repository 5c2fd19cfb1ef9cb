//! `--range` expressions.
//!
//! - `YYYY`, `YYYY-MM`, `YYYY-MM-DD`
//! - two of the same shape joined by `:` (inclusive)
//! - `all` (no bounds)

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn parse_range_opt(range: Option<&str>) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    match range.map(str::trim) {
        None => Ok(None),
        Some(r) if r.is_empty() || r.eq_ignore_ascii_case("all") => Ok(None),
        Some(r) => parse_range(r).map(Some),
    }
}

pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let Some((start, end)) = r.split_once(':') else {
        return period_bounds(r.trim());
    };

    let (start, end) = (start.trim(), end.trim());
    if start.len() != end.len() {
        return Err(AppError::InvalidRange(format!(
            "start and end must have the same format: {r}"
        )));
    }

    let (from, _) = period_bounds(start)?;
    let (_, to) = period_bounds(end)?;
    if from > to {
        return Err(AppError::InvalidRange(format!("start is after end: {r}")));
    }
    Ok((from, to))
}

/// First and last day of a year, month or single day.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidRange(p.to_string());

    match p.len() {
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid())?;
            let first = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let last = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((first, last))
        }
        7 => {
            let first =
                NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((first, last_day_of_month(first).ok_or_else(invalid)?))
        }
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}

fn last_day_of_month(first: NaiveDate) -> Option<NaiveDate> {
    let (y, m) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)?.pred_opt()
}
