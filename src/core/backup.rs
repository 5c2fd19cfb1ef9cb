//! Transient store backups taken around an update.
//!
//! A backup is a sibling copy named `<store>.<YYYYmmdd_HHMMSS>.backup`.
//! Backups are a safety net for one update, never a retained history.

use crate::errors::AppResult;
use chrono::Local;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the store aside. `Ok(None)` when there is no store yet.
    pub fn create(db_path: &Path) -> AppResult<Option<PathBuf>> {
        if !db_path.exists() {
            tracing::warn!(path = %db_path.display(), "store does not exist, skipping backup");
            return Ok(None);
        }

        let stamp = Local::now().format("%Y%m%d_%H%M%S");
        let dest = sibling(db_path, &format!("{stamp}.backup"));

        fs::copy(db_path, &dest)?;
        tracing::info!(backup = %dest.display(), "store backed up");
        Ok(Some(dest))
    }

    /// Put `backup` back in place of the store.
    pub fn restore(db_path: &Path, backup: &Path) -> AppResult<()> {
        if !backup.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Backup file not found: {}", backup.display()),
            )
            .into());
        }

        fs::copy(backup, db_path)?;
        tracing::info!(backup = %backup.display(), "store restored");
        Ok(())
    }

    /// Every backup file belonging to `db_path`, sorted by name (= by time).
    pub fn list(db_path: &Path) -> AppResult<Vec<PathBuf>> {
        let Some(file_name) = db_path.file_name().map(|n| n.to_string_lossy().to_string()) else {
            return Ok(Vec::new());
        };
        let dir = match db_path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut found: Vec<PathBuf> = fs::read_dir(&dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|p| {
                p.file_name()
                    .map(|n| n.to_string_lossy())
                    .is_some_and(|n| is_backup_name(&n, &file_name))
            })
            .collect();
        found.sort();
        Ok(found)
    }

    /// Remove every backup of `db_path`; returns how many were deleted.
    pub fn delete_all(db_path: &Path) -> AppResult<usize> {
        let backups = Self::list(db_path)?;
        for b in &backups {
            fs::remove_file(b)?;
            tracing::debug!(backup = %b.display(), "removed backup");
        }
        if !backups.is_empty() {
            tracing::info!(count = backups.len(), "deleted backup file(s)");
        }
        Ok(backups.len())
    }
}

/// `<store>.<8 digits>_<6 digits>.backup`, so `health` never claims the
/// backups of `health.db`.
fn is_backup_name(candidate: &str, store: &str) -> bool {
    let Some(stamp) = candidate
        .strip_prefix(store)
        .and_then(|rest| rest.strip_prefix('.'))
        .and_then(|rest| rest.strip_suffix(".backup"))
    else {
        return false;
    };

    let bytes = stamp.as_bytes();
    bytes.len() == 15
        && bytes[8] == b'_'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 8 || b.is_ascii_digit())
}

fn sibling(db_path: &Path, suffix: &str) -> PathBuf {
    let mut name = db_path.as_os_str().to_os_string();
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}
