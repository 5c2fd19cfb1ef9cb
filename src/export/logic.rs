use crate::core::status::StatusLogic;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{write_csv, write_json};
use crate::export::range::parse_range_opt;
use crate::export::{ExportFormat, WeeklyExport};
use crate::ui::messages::{info, success, warning};
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export weekly totals whose week start falls in `range` (see
    /// [`crate::export::range::parse_range`]; `None` or `all` = everything).
    ///
    /// Returns the number of weeks written. Nothing is written when no week
    /// matches.
    pub fn export(
        db_path: &Path,
        format: ExportFormat,
        file: &Path,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let bounds = parse_range_opt(range)?;
        ensure_writable(file, force)?;

        let weeks: Vec<WeeklyExport> = StatusLogic::weekly_totals(db_path, bounds)
            .iter()
            .map(WeeklyExport::from)
            .collect();

        if weeks.is_empty() {
            warning("No weekly totals found for the selected range.");
            return Ok(0);
        }

        info(format!("Exporting {} week(s) to {format}: {}", weeks.len(), file.display()));
        match format {
            ExportFormat::Csv => write_csv(&weeks, file)?,
            ExportFormat::Json => write_json(&weeks, file)?,
        }
        tracing::info!(%format, weeks = weeks.len(), file = %file.display(), "export written");

        success(format!("{format} export completed: {}", file.display()));
        Ok(weeks.len())
    }
}
