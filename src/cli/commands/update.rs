use crate::cli::parser::Commands;
use crate::config::{Config, PipelineSettings};
use crate::core::update::UpdateLogic;
use crate::errors::AppResult;
use crate::source::{CsvFileSource, GoogleSheetSource, RowSource};
use crate::ui::messages::{header, info, success, warning};

const MAX_ERRORS_SHOWN: usize = 10;

/// Handle the `update` command
pub fn handle(cmd: &Commands, cfg: &Config, settings: &PipelineSettings) -> AppResult<()> {
    let Commands::Update { csv } = cmd else {
        return Ok(());
    };

    let source: Box<dyn RowSource> = match csv {
        Some(path) => Box::new(CsvFileSource::new(path)),
        None => Box::new(GoogleSheetSource::new(cfg.sheet_id()?)),
    };

    info(format!("Updating from {}", source.describe()));

    let report = UpdateLogic::update(settings, &cfg.db_path(), source.as_ref())?;

    success(format!(
        "Database updated: {} rows, {} events, {} drinks, {} weeks",
        report.rows_fetched, report.raw_events, report.drink_events, report.weekly_totals
    ));

    if !report.errors.is_empty() {
        header(format!("{} validation error(s)", report.errors.len()));
        for err in report.errors.iter().take(MAX_ERRORS_SHOWN) {
            warning(format!(
                "Row {}: {} - {}",
                err.row_number, err.error_type, err.error_message
            ));
        }
        if report.errors.len() > MAX_ERRORS_SHOWN {
            println!("... and {} more errors", report.errors.len() - MAX_ERRORS_SHOWN);
        }
    }

    info(format!("Last updated: {}", report.last_updated));
    Ok(())
}
