use super::{RowSource, SheetRow, read_rows};
use crate::errors::{AppError, AppResult};
use std::thread;
use std::time::Duration;

/// Public Google Sheet fetched through its CSV export URL.
pub struct GoogleSheetSource {
    sheet_id: String,
    max_retries: u32,
    retry_delay: Duration,
    timeout: Duration,
}

impl GoogleSheetSource {
    pub fn new(sheet_id: impl Into<String>) -> Self {
        Self {
            sheet_id: sheet_id.into(),
            max_retries: 3,
            retry_delay: Duration::from_secs(2),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn export_url(&self) -> String {
        format!(
            "https://docs.google.com/spreadsheets/d/{}/export?format=csv",
            self.sheet_id
        )
    }

    fn fetch_once(&self, client: &reqwest::blocking::Client) -> AppResult<Vec<SheetRow>> {
        let response = client
            .get(self.export_url())
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| AppError::Fetch(e.to_string()))?;

        // Body is decoded as UTF-8 regardless of the advertised charset so
        // non-Latin event labels survive.
        let bytes = response
            .bytes()
            .map_err(|e| AppError::Fetch(e.to_string()))?;
        let text = String::from_utf8(bytes.to_vec())
            .map_err(|e| AppError::Fetch(format!("response is not UTF-8: {e}")))?;

        read_rows(text.as_bytes())
    }
}

impl RowSource for GoogleSheetSource {
    fn fetch(&self) -> AppResult<Vec<SheetRow>> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| AppError::Fetch(e.to_string()))?;

        let mut last_error = None;
        for attempt in 1..=self.max_retries {
            tracing::info!(attempt, max = self.max_retries, "fetching sheet");
            match self.fetch_once(&client) {
                Ok(rows) => {
                    tracing::info!(rows = rows.len(), "fetched sheet");
                    return Ok(rows);
                }
                Err(e) => {
                    tracing::warn!(attempt, error = %e, "sheet fetch failed");
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        thread::sleep(self.retry_delay);
                    }
                }
            }
        }

        tracing::error!(attempts = self.max_retries, "giving up on sheet fetch");
        Err(last_error.unwrap_or_else(|| AppError::Fetch("no fetch attempted".into())))
    }

    fn describe(&self) -> String {
        format!("Google Sheet {}", self.sheet_id)
    }
}
