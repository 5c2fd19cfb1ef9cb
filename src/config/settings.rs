//! Validated pipeline parameters, built once from [`super::Config`] and passed
//! by value into every stage.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Weekday};
use chrono_tz::Tz;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineSettings {
    /// Wall-clock boundary; earlier times belong to the previous day.
    pub cutoff: NaiveTime,
    pub timezone: Tz,
    pub week_start: Weekday,
}

impl PipelineSettings {
    pub fn new(cutoff: NaiveTime, timezone: Tz, week_start: Weekday) -> Self {
        Self {
            cutoff,
            timezone,
            week_start,
        }
    }

    pub fn from_raw(cutoff: &str, timezone: &str, week_start: &str) -> AppResult<Self> {
        Ok(Self::new(
            parse_cutoff(cutoff)?,
            parse_timezone(timezone)?,
            parse_weekday(week_start)?,
        ))
    }
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self::new(
            NaiveTime::from_hms_opt(8, 0, 0).unwrap_or(NaiveTime::MIN),
            chrono_tz::America::New_York,
            Weekday::Mon,
        )
    }
}

/// Strict `HH:MM:SS`.
pub fn parse_cutoff(s: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M:%S")
        .map_err(|_| AppError::InvalidTime(format!("cutoff must be HH:MM:SS, got '{s}'")))
}

pub fn parse_timezone(s: &str) -> AppResult<Tz> {
    s.trim()
        .parse::<Tz>()
        .map_err(|_| AppError::InvalidTimezone(s.to_string()))
}

/// Accepts full or abbreviated English names, case-insensitive.
pub fn parse_weekday(s: &str) -> AppResult<Weekday> {
    s.trim()
        .parse::<Weekday>()
        .map_err(|_| AppError::InvalidWeekday(s.to_string()))
}
