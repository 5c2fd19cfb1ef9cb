use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::schema;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use std::fs;
use std::io;

/// Handle the `init` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Init { force } = cmd else {
        return Ok(());
    };

    let db_path = cfg.db_path();

    if db_path.exists() && !*force {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!(
                "database already exists at {} (use --force to recreate it)",
                db_path.display()
            ),
        )));
    }

    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    info(format!("Database: {}", db_path.display()));

    let pool = DbPool::new(&db_path)?;
    if *force {
        schema::drop_all_tables(&pool.conn)?;
    }
    schema::create_schema(&pool.conn)?;

    success(format!("Database initialized at {}", db_path.display()));
    info("Run `healthlog update` to load data.");
    Ok(())
}
