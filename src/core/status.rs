//! Read side used by the presentation layer. Nothing here raises: an absent
//! or unreadable store reads as "no data".

use crate::db::models::TableCounts;
use crate::db::pool::DbPool;
use crate::db::{queries, schema};
use crate::errors::{AppError, AppResult};
use crate::models::WeeklyBucket;
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub enum StoreStatus {
    /// No store file.
    Missing,
    /// Schema may exist but no update has completed.
    NotPopulated,
    Ready {
        last_updated: String,
        counts: TableCounts,
        size_bytes: u64,
    },
}

impl StoreStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, StoreStatus::Ready { .. })
    }
}

pub struct StatusLogic;

impl StatusLogic {
    pub fn status(db_path: &Path) -> StoreStatus {
        if !db_path.exists() {
            return StoreStatus::Missing;
        }
        match read_status(db_path) {
            Ok(status) => status,
            Err(e) => {
                tracing::error!(error = %e, "cannot read store status");
                StoreStatus::NotPopulated
            }
        }
    }

    /// `last_updated` metadata, or `None` when the store is not ready.
    pub fn last_updated(db_path: &Path) -> Option<String> {
        match Self::status(db_path) {
            StoreStatus::Ready { last_updated, .. } => Some(last_updated),
            _ => None,
        }
    }

    pub fn is_initialized(db_path: &Path) -> bool {
        Self::status(db_path).is_ready()
    }

    /// Weekly totals, empty when the store is absent, unpopulated or unreadable.
    pub fn weekly_totals(
        db_path: &Path,
        bounds: Option<(NaiveDate, NaiveDate)>,
    ) -> Vec<WeeklyBucket> {
        if !Self::is_initialized(db_path) {
            return Vec::new();
        }
        let loaded = DbPool::open_existing(db_path)
            .map_err(AppError::from)
            .and_then(|pool| queries::load_weekly(&pool.conn, bounds));
        match loaded {
            Ok(weeks) => weeks,
            Err(e) => {
                tracing::error!(error = %e, "cannot query weekly totals");
                Vec::new()
            }
        }
    }
}

fn read_status(db_path: &Path) -> AppResult<StoreStatus> {
    let pool = DbPool::open_existing(db_path)?;

    if !schema::table_exists(&pool.conn, "db_metadata")? {
        return Ok(StoreStatus::NotPopulated);
    }
    let Some(last_updated) = queries::get_metadata(&pool.conn, queries::LAST_UPDATED)? else {
        return Ok(StoreStatus::NotPopulated);
    };

    Ok(StoreStatus::Ready {
        last_updated,
        counts: queries::count_rows(&pool.conn)?,
        size_bytes: fs::metadata(db_path)?.len(),
    })
}
