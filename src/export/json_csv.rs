use crate::errors::{AppError, AppResult};
use crate::export::WeeklyExport;
use std::fs;
use std::path::Path;

/// Pretty-printed JSON array.
pub(crate) fn write_json(weeks: &[WeeklyExport], path: &Path) -> AppResult<()> {
    let json_data = serde_json::to_string_pretty(weeks)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;
    fs::write(path, json_data)?;
    Ok(())
}

/// CSV with a header row taken from the field names.
pub(crate) fn write_csv(weeks: &[WeeklyExport], path: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for week in weeks {
        wtr.serialize(week)?;
    }
    wtr.flush()?;
    Ok(())
}
