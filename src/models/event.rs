use crate::core::datetime::effective_date_in_zone;
use chrono::{DateTime, NaiveDate, NaiveTime};
use chrono_tz::Tz;
use serde::Serialize;

/// Event label that marks an alcohol-consumption entry.
pub const DRINK_EVENT_NAME: &str = "飲み物";

/// Which of the two sheet forms produced the event.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportMode {
    Immediate,
    Retrospective,
}

impl ReportMode {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ReportMode::Immediate => "immediate",
            ReportMode::Retrospective => "retrospective",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "immediate" => Some(ReportMode::Immediate),
            "retrospective" => Some(ReportMode::Retrospective),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Transition {
    Start,
    Stop,
}

impl Transition {
    /// Sheet values are `Start` / `Stop`; anything else means "no transition".
    pub fn from_sheet(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "start" => Some(Transition::Start),
            "stop" => Some(Transition::Stop),
            _ => None,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            Transition::Start => "start",
            Transition::Stop => "stop",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "start" => Some(Transition::Start),
            "stop" => Some(Transition::Stop),
            _ => None,
        }
    }
}

/// Canonical event. Immutable once built: `effective_date` is derived from
/// `occurred_at` in the constructor, and validation yields a new value.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    reported_at: Option<DateTime<Tz>>,
    report_mode: ReportMode,
    name: String,
    transition: Option<Transition>,
    occurred_at: DateTime<Tz>,
    effective_date: NaiveDate,
    comments: Option<String>,
    is_valid: bool,
    validation_note: Option<String>,
}

impl Event {
    pub fn new(
        report_mode: ReportMode,
        name: impl Into<String>,
        transition: Option<Transition>,
        occurred_at: DateTime<Tz>,
        cutoff: NaiveTime,
    ) -> Self {
        Self {
            reported_at: None,
            report_mode,
            name: name.into(),
            transition,
            effective_date: effective_date_in_zone(&occurred_at, cutoff),
            occurred_at,
            comments: None,
            is_valid: true,
            validation_note: None,
        }
    }

    pub fn with_reported_at(mut self, reported_at: Option<DateTime<Tz>>) -> Self {
        self.reported_at = reported_at;
        self
    }

    /// Blank comments are stored as absent.
    pub fn with_comments(mut self, comments: Option<&str>) -> Self {
        self.comments = comments
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);
        self
    }

    /// Copy of this event flagged invalid with `note`.
    pub fn invalidated(&self, note: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            validation_note: Some(note.into()),
            ..self.clone()
        }
    }

    pub fn reported_at(&self) -> Option<&DateTime<Tz>> {
        self.reported_at.as_ref()
    }
    pub fn report_mode(&self) -> ReportMode {
        self.report_mode
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn transition(&self) -> Option<Transition> {
        self.transition
    }
    pub fn occurred_at(&self) -> &DateTime<Tz> {
        &self.occurred_at
    }
    pub fn effective_date(&self) -> NaiveDate {
        self.effective_date
    }
    pub fn comments(&self) -> Option<&str> {
        self.comments.as_deref()
    }
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }
    pub fn validation_note(&self) -> Option<&str> {
        self.validation_note.as_deref()
    }

    pub fn is_drink(&self) -> bool {
        self.name == DRINK_EVENT_NAME
    }

    pub fn effective_date_str(&self) -> String {
        self.effective_date.format("%Y-%m-%d").to_string()
    }
}
