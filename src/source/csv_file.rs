use super::{RowSource, SheetRow, read_rows};
use crate::errors::AppResult;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Local CSV export of the sheet.
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl RowSource for CsvFileSource {
    fn fetch(&self) -> AppResult<Vec<SheetRow>> {
        let rows = read_rows(File::open(&self.path)?)?;
        tracing::info!(path = %self.path.display(), rows = rows.len(), "read CSV export");
        Ok(rows)
    }

    fn describe(&self) -> String {
        format!("CSV file {}", self.path.display())
    }
}
