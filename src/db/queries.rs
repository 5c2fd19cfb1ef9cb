use crate::db::models::{DrinkEventRow, RawEventRow, TableCounts};
use crate::errors::AppResult;
use crate::models::{DrinkEvent, Event, WeeklyBucket};
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub const LAST_UPDATED: &str = "last_updated";

/// Insert one validated event and return its row id.
pub fn insert_raw_event(conn: &Connection, ev: &Event) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO raw_events (reported_at, report_mode, event_name, transition,
                                 occurred_at, effective_date, comments, is_valid, validation_note)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            ev.reported_at().map(|t| t.to_rfc3339()),
            ev.report_mode().to_db_str(),
            ev.name(),
            ev.transition().map(|t| t.to_db_str()),
            ev.occurred_at().to_rfc3339(),
            ev.effective_date_str(),
            ev.comments(),
            ev.is_valid(),
            ev.validation_note(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Insert a drink event; it must already be linked to its raw event row.
pub fn insert_drink_event(conn: &Connection, drink: &DrinkEvent) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO drink_events (raw_event_id, effective_date, quantity, comments)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            drink.source_event_ref,
            drink.effective_date.format("%Y-%m-%d").to_string(),
            drink.quantity,
            drink.comments,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn insert_weekly_bucket(conn: &Connection, bucket: &WeeklyBucket) -> AppResult<()> {
    conn.execute(
        "INSERT INTO weekly_totals (week_start_date, week_end_date, total_quantity, event_count)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            bucket.week_start_date.format("%Y-%m-%d").to_string(),
            bucket.week_end_date.format("%Y-%m-%d").to_string(),
            bucket.total_quantity,
            bucket.event_count,
        ],
    )?;
    Ok(())
}

pub fn set_metadata(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO db_metadata (key, value, updated_at)
         VALUES (?1, ?2, CURRENT_TIMESTAMP)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = CURRENT_TIMESTAMP",
        params![key, value],
    )?;
    Ok(())
}

/// `None` when the key is absent or its value is NULL.
pub fn get_metadata(conn: &Connection, key: &str) -> AppResult<Option<String>> {
    let value: Option<Option<String>> = conn
        .query_row(
            "SELECT value FROM db_metadata WHERE key = ?1",
            [key],
            |row| row.get(0),
        )
        .optional()?;
    Ok(value.flatten())
}

pub fn count_rows(conn: &Connection) -> AppResult<TableCounts> {
    let count = |table: &str| -> Result<i64> {
        conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
            row.get(0)
        })
    };

    Ok(TableCounts {
        raw_events: count("raw_events")?,
        drink_events: count("drink_events")?,
        weekly_totals: count("weekly_totals")?,
    })
}

/// Weekly totals ordered by week start, optionally restricted to weeks whose
/// start falls inside `bounds` (inclusive).
pub fn load_weekly(
    conn: &Connection,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<WeeklyBucket>> {
    let (from, to) = match bounds {
        Some((a, b)) => (
            a.format("%Y-%m-%d").to_string(),
            b.format("%Y-%m-%d").to_string(),
        ),
        None => ("0000-01-01".to_string(), "9999-12-31".to_string()),
    };

    let mut stmt = conn.prepare(
        "SELECT week_start_date, week_end_date, total_quantity, event_count
         FROM weekly_totals
         WHERE week_start_date BETWEEN ?1 AND ?2
         ORDER BY week_start_date ASC",
    )?;

    let rows = stmt.query_map(params![from, to], map_weekly_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn map_weekly_row(row: &Row) -> Result<WeeklyBucket> {
    let start = date_column(row, 0)?;
    let end = date_column(row, 1)?;
    Ok(WeeklyBucket {
        week_start_date: start,
        week_end_date: end,
        total_quantity: row.get(2)?,
        event_count: row.get(3)?,
    })
}

fn date_column(row: &Row, idx: usize) -> Result<NaiveDate> {
    let raw: String = row.get(idx)?;
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

pub fn load_raw_events(conn: &Connection) -> AppResult<Vec<RawEventRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, reported_at, report_mode, event_name, transition, occurred_at,
                effective_date, comments, is_valid, validation_note
         FROM raw_events
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(RawEventRow {
            id: row.get("id")?,
            reported_at: row.get("reported_at")?,
            report_mode: row.get("report_mode")?,
            event_name: row.get("event_name")?,
            transition: row.get("transition")?,
            occurred_at: row.get("occurred_at")?,
            effective_date: row.get("effective_date")?,
            comments: row.get("comments")?,
            is_valid: row.get("is_valid")?,
            validation_note: row.get("validation_note")?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_drink_events(conn: &Connection) -> AppResult<Vec<DrinkEventRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, raw_event_id, effective_date, quantity, comments
         FROM drink_events
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(DrinkEventRow {
            id: row.get("id")?,
            raw_event_id: row.get("raw_event_id")?,
            effective_date: row.get("effective_date")?,
            quantity: row.get("quantity")?,
            comments: row.get("comments")?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
