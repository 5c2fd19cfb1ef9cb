use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod settings;

pub use settings::PipelineSettings;

/// On-disk configuration (YAML). Every field is a plain scalar; typed
/// validation happens in [`Config::pipeline_settings`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "sheet-id", alias = "sheet_id", default)]
    pub sheet_id: Option<String>,
    #[serde(rename = "next-day-cutoff-HH-mm-ss", default = "default_cutoff")]
    pub next_day_cutoff: String,
    #[serde(rename = "db-path", default = "default_db_path")]
    pub db_path: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(rename = "week-start-day", default = "default_week_start")]
    pub week_start_day: String,
}

fn default_cutoff() -> String {
    "08:00:00".to_string()
}
fn default_db_path() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_timezone() -> String {
    "America/New_York".to_string()
}
fn default_week_start() -> String {
    "Monday".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet_id: None,
            next_day_cutoff: default_cutoff(),
            db_path: default_db_path(),
            timezone: default_timezone(),
            week_start_day: default_week_start(),
        }
    }
}

impl Config {
    /// Per-user configuration directory (`~/.healthlog`).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".healthlog")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("health.db")
    }

    /// Load the configuration.
    ///
    /// An explicit `path` must exist. Without one, `./config.yaml` and then
    /// the per-user file are tried before falling back to defaults. A missing
    /// `sheet-id` is taken from `SHEET_ID` (after loading `env/.env`).
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let candidate = match path {
            Some(p) if !p.exists() => {
                return Err(AppError::Config(format!(
                    "configuration file not found: {}",
                    p.display()
                )));
            }
            Some(p) => Some(p.to_path_buf()),
            None => [PathBuf::from("config.yaml"), Self::config_file()]
                .into_iter()
                .find(|p| p.exists()),
        };

        let mut cfg = match candidate {
            Some(p) => {
                let content = fs::read_to_string(&p)?;
                let cfg: Config = serde_yaml::from_str(&content).map_err(|e| {
                    AppError::Config(format!("cannot parse {}: {e}", p.display()))
                })?;
                tracing::debug!(path = %p.display(), "configuration loaded");
                cfg
            }
            None => {
                tracing::debug!("no configuration file found, using defaults");
                Config::default()
            }
        };

        if cfg.sheet_id.as_deref().is_none_or(|s| s.trim().is_empty()) {
            let env_file = Path::new("env/.env");
            if env_file.exists() {
                dotenvy::from_path(env_file).ok();
            }
            cfg.sheet_id = env::var("SHEET_ID").ok().filter(|s| !s.trim().is_empty());
        }

        Ok(cfg)
    }

    /// Sheet identifier, required only when fetching from the remote sheet.
    pub fn sheet_id(&self) -> AppResult<&str> {
        self.sheet_id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                AppError::Config("SHEET_ID is required but not found in config or env/.env".into())
            })
    }

    pub fn db_path(&self) -> PathBuf {
        PathBuf::from(&self.db_path)
    }

    /// Typed, validated view of the pipeline scalars.
    pub fn pipeline_settings(&self) -> AppResult<PipelineSettings> {
        PipelineSettings::from_raw(&self.next_day_cutoff, &self.timezone, &self.week_start_day)
            .map_err(|e| AppError::Config(e.to_string()))
    }
}
