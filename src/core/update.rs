//! Full-replace update of the store with backup/restore around it.
//!
//! 1. back up the existing store (if any)
//! 2. drop and recreate the schema
//! 3. fetch, run the pipeline and write everything in one transaction
//! 4. success: delete backups
//! 5. failure in 2-3: delete the half-built store, restore the backup (if
//!    any), delete backups, and report the failure
//!
//! Callers must not run two updates on the same store at once.

use crate::config::PipelineSettings;
use crate::core::backup::BackupLogic;
use crate::core::pipeline::{PipelineOutput, run_pipeline};
use crate::db::pool::DbPool;
use crate::db::{queries, schema};
use crate::errors::{AppError, AppResult};
use crate::models::{DrinkEvent, ErrorRecord};
use crate::source::RowSource;
use chrono::Local;
use rusqlite::Connection;
use std::fs;
use std::path::Path;

/// What a successful update wrote.
#[derive(Debug, Clone)]
pub struct UpdateReport {
    pub rows_fetched: usize,
    pub raw_events: usize,
    pub drink_events: usize,
    pub weekly_totals: usize,
    pub errors: Vec<ErrorRecord>,
    pub last_updated: String,
}

pub struct UpdateLogic;

impl UpdateLogic {
    pub fn update(
        settings: &PipelineSettings,
        db_path: &Path,
        source: &dyn RowSource,
    ) -> AppResult<UpdateReport> {
        tracing::info!(store = %db_path.display(), source = %source.describe(), "update started");

        let backup = BackupLogic::create(db_path)?;

        match rebuild_and_populate(settings, db_path, source) {
            Ok(report) => {
                if let Err(e) = BackupLogic::delete_all(db_path) {
                    tracing::warn!(error = %e, "update succeeded but backups were not removed");
                }
                tracing::info!(
                    raw = report.raw_events,
                    drinks = report.drink_events,
                    weeks = report.weekly_totals,
                    errors = report.errors.len(),
                    "update finished"
                );
                Ok(report)
            }
            Err(cause) => {
                tracing::error!(error = %cause, "update failed, recovering");
                let restored = recover(db_path, backup.as_deref());
                Err(AppError::UpdateFailed {
                    source: Box::new(cause),
                    restored,
                })
            }
        }
    }
}

fn rebuild_and_populate(
    settings: &PipelineSettings,
    db_path: &Path,
    source: &dyn RowSource,
) -> AppResult<UpdateReport> {
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut pool = DbPool::new(db_path)?;
    schema::drop_all_tables(&pool.conn)?;
    schema::create_schema(&pool.conn)?;

    let rows = source.fetch()?;
    let output = run_pipeline(&rows, settings);

    let last_updated = Local::now().to_rfc3339();
    persist(&mut pool.conn, &output, &last_updated)?;

    Ok(UpdateReport {
        rows_fetched: rows.len(),
        raw_events: output.events.len(),
        drink_events: output.drinks.len(),
        weekly_totals: output.weekly.len(),
        errors: output.errors,
        last_updated,
    })
}

/// Write one pipeline run atomically.
///
/// Raw events go in first-to-last. Right after a drink-labelled raw event is
/// inserted, the first still-unlinked drink event with the same effective
/// date is linked to it. With several drinks on one day this binds by
/// insertion order, which is an approximation.
fn persist(conn: &mut Connection, output: &PipelineOutput, last_updated: &str) -> AppResult<()> {
    let tx = conn.transaction()?;

    let mut pending: Vec<Option<&DrinkEvent>> = output.drinks.iter().map(Some).collect();

    for ev in &output.events {
        let raw_id = queries::insert_raw_event(&tx, ev)?;
        if !ev.is_drink() {
            continue;
        }

        let slot = pending
            .iter_mut()
            .find(|d| d.is_some_and(|d| d.effective_date == ev.effective_date()));
        match slot.and_then(Option::take) {
            Some(drink) => {
                queries::insert_drink_event(&tx, &drink.clone().linked_to(raw_id))?;
            }
            None => tracing::warn!(raw_id, "drink raw event has no pending drink to link"),
        }
    }

    for bucket in &output.weekly {
        queries::insert_weekly_bucket(&tx, bucket)?;
    }

    queries::set_metadata(&tx, queries::LAST_UPDATED, last_updated)?;

    tx.commit()?;
    Ok(())
}

/// Put the store back the way it was. Returns whether a backup was restored.
fn recover(db_path: &Path, backup: Option<&Path>) -> bool {
    if db_path.exists() {
        match fs::remove_file(db_path) {
            Ok(()) => tracing::info!("removed failed store"),
            Err(e) => tracing::error!(error = %e, "failed to remove failed store"),
        }
    }

    let mut restored = false;
    if let Some(backup) = backup {
        match BackupLogic::restore(db_path, backup) {
            Ok(()) => restored = true,
            Err(e) => tracing::error!(error = %e, "failed to restore store"),
        }
    }

    if let Err(e) = BackupLogic::delete_all(db_path) {
        tracing::error!(error = %e, "failed to delete backups after recovery");
    }
    restored
}
