use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension, Result};

/// Tables in drop order (children first).
const TABLES: [&str; 4] = ["weekly_totals", "drink_events", "raw_events", "db_metadata"];

/// Create every table and index if absent, and seed `last_updated = NULL`.
pub fn create_schema(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS raw_events (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            reported_at      TEXT,
            report_mode      TEXT NOT NULL CHECK(report_mode IN ('immediate','retrospective')),
            event_name       TEXT NOT NULL,
            transition       TEXT CHECK(transition IN ('start','stop')),
            occurred_at      TEXT NOT NULL,
            effective_date   TEXT NOT NULL,
            comments         TEXT,
            is_valid         INTEGER NOT NULL DEFAULT 1,
            validation_note  TEXT,
            created_at       TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        );

        CREATE TABLE IF NOT EXISTS drink_events (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            raw_event_id    INTEGER NOT NULL REFERENCES raw_events(id),
            effective_date  TEXT NOT NULL,
            quantity        REAL NOT NULL,
            comments        TEXT
        );

        CREATE TABLE IF NOT EXISTS weekly_totals (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            week_start_date  TEXT NOT NULL UNIQUE,
            week_end_date    TEXT NOT NULL,
            total_quantity   REAL NOT NULL,
            event_count      INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS db_metadata (
            key         TEXT PRIMARY KEY,
            value       TEXT,
            updated_at  TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        );

        CREATE INDEX IF NOT EXISTS idx_raw_events_date ON raw_events(effective_date);
        CREATE INDEX IF NOT EXISTS idx_drink_events_date ON drink_events(effective_date);
        CREATE INDEX IF NOT EXISTS idx_weekly_totals_start ON weekly_totals(week_start_date);

        INSERT OR IGNORE INTO db_metadata (key, value) VALUES ('last_updated', NULL);
        "#,
    )?;
    tracing::debug!("schema ensured");
    Ok(())
}

pub fn drop_all_tables(conn: &Connection) -> AppResult<()> {
    for table in TABLES {
        conn.execute_batch(&format!("DROP TABLE IF EXISTS {table};"))?;
    }
    tracing::debug!("dropped all tables");
    Ok(())
}

pub fn table_exists(conn: &Connection, table: &str) -> Result<bool> {
    let found: Option<String> = conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE type='table' AND name = ?1",
            [table],
            |row| row.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}
