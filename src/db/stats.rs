use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use chrono::NaiveDateTime;
use rusqlite::OptionalExtension;
use std::fs;

use crate::utils::time;

/// Count of departures with no recorded return.
pub fn count_active(pool: &mut DbPool) -> rusqlite::Result<i64> {
    pool.conn.query_row(
        "SELECT COUNT(*) FROM departures WHERE actual_return IS NULL",
        [],
        |row| row.get(0),
    )
}

/// Count of departures returned at or after `since`.
pub fn count_returned_since(pool: &mut DbPool, since: &NaiveDateTime) -> rusqlite::Result<i64> {
    pool.conn.query_row(
        "SELECT COUNT(*) FROM departures
         WHERE actual_return IS NOT NULL AND actual_return >= ?1",
        [time::fmt_dt(since)],
        |row| row.get(0),
    )
}

/// Count of departures that left at or after `since`.
pub fn count_departed_since(pool: &mut DbPool, since: &NaiveDateTime) -> rusqlite::Result<i64> {
    pool.conn.query_row(
        "SELECT COUNT(*) FROM departures WHERE departed_at >= ?1",
        [time::fmt_dt(since)],
        |row| row.get(0),
    )
}

/// Mean trip duration in hours across returned departures.
/// None when nothing has ever returned (reported as unavailable, never zero).
pub fn avg_duration_hours(pool: &mut DbPool) -> rusqlite::Result<Option<f64>> {
    pool.conn.query_row(
        "SELECT AVG((julianday(actual_return) - julianday(departed_at)) * 24.0)
         FROM departures
         WHERE actual_return IS NOT NULL",
        [],
        |row| row.get(0),
    )
}

/// Top destinations by visit count, descending.
/// Ties break on first-encountered order (lowest first departure id).
pub fn top_destinations(pool: &mut DbPool, limit: usize) -> rusqlite::Result<Vec<(String, i64)>> {
    let mut stmt = pool.conn.prepare(
        "SELECT destination, COUNT(*) AS visits
         FROM departures
         GROUP BY destination
         ORDER BY visits DESC, MIN(id) ASC
         LIMIT ?1",
    )?;

    let rows = stmt.query_map([limit as i64], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROW COUNTS
    //
    let personnel: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM personnel", [], |row| row.get(0))?;
    let departures: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM departures", [], |row| row.get(0))?;
    let extensions: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM extensions", [], |row| row.get(0))?;

    println!(
        "{}• Personnel:{} {}{}{}",
        CYAN, RESET, GREEN, personnel, RESET
    );
    println!(
        "{}• Departures:{} {}{}{}",
        CYAN, RESET, GREEN, departures, RESET
    );
    println!(
        "{}• Extensions:{} {}{}{}",
        CYAN, RESET, GREEN, extensions, RESET
    );

    //
    // 3) DATE RANGE
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT departed_at FROM departures ORDER BY departed_at ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT departed_at FROM departures ORDER BY departed_at DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Departure range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}
