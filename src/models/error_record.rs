use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    UnpairedStop,
    UnpairedStart,
    InvalidTimespan,
}

impl ValidationErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationErrorKind::UnpairedStop => "unpaired_stop",
            ValidationErrorKind::UnpairedStart => "unpaired_start",
            ValidationErrorKind::InvalidTimespan => "invalid_timespan",
        }
    }
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One pairing problem found by the validator.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ErrorRecord {
    /// Index of the offending event in the validated list.
    pub row_number: usize,
    pub error_type: ValidationErrorKind,
    pub error_message: String,
    /// RFC 3339 `occurred_at` of the offending event.
    pub timestamp: String,
}
