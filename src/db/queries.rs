use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::departure::Departure;
use crate::models::extension::Extension;
use crate::models::person::Person;
use crate::utils::time;
use chrono::NaiveDateTime;
use rusqlite::params;
use rusqlite::{Connection, OptionalExtension, Result, Row};

fn parse_dt_column(value: String) -> Result<NaiveDateTime> {
    time::parse_dt(&value).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDateTime(value)),
        )
    })
}

/// Empty strings in optional contact columns are treated as absent.
fn opt_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub fn map_person(row: &Row) -> Result<Person> {
    Ok(Person {
        id: row.get("id")?,
        name: row.get("name")?,
        phone: opt_text(row.get("phone")?),
        supervisor: opt_text(row.get("supervisor")?),
        supervisor_phone: opt_text(row.get("supervisor_phone")?),
        company: opt_text(row.get("company")?),
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

pub fn map_departure(row: &Row) -> Result<Departure> {
    let departed_at = parse_dt_column(row.get::<_, String>("departed_at")?)?;
    let expected_return = parse_dt_column(row.get::<_, String>("expected_return")?)?;

    let actual_return = match row.get::<_, Option<String>>("actual_return")? {
        Some(s) => Some(parse_dt_column(s)?),
        None => None,
    };

    Ok(Departure {
        id: row.get("id")?,
        person_name: row.get("person_name")?,
        destination: row.get("destination")?,
        departed_at,
        expected_return,
        actual_return,
        phone: opt_text(row.get("phone")?),
        supervisor: opt_text(row.get("supervisor")?),
        company: opt_text(row.get("company")?),
        extensions_count: row.get("extensions_count")?,
    })
}

pub fn map_extension(row: &Row) -> Result<Extension> {
    Ok(Extension {
        id: row.get("id")?,
        departure_id: row.get("departure_id")?,
        hours: row.get("hours")?,
        extended_at: parse_dt_column(row.get::<_, String>("extended_at")?)?,
    })
}

// ---------------------------------------------------------------------------
// Personnel
// ---------------------------------------------------------------------------

pub fn list_personnel(pool: &mut DbPool) -> AppResult<Vec<Person>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM personnel ORDER BY name ASC")?;

    let rows = stmt.query_map([], map_person)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_person(conn: &Connection, name: &str) -> AppResult<Option<Person>> {
    let mut stmt = conn.prepare("SELECT * FROM personnel WHERE name = ?1")?;
    let person = stmt.query_row([name], map_person).optional()?;
    Ok(person)
}

/// Insert or overwrite a manifest record (last write wins).
///
/// Every optional field is replaced: upserting with a blank phone clears a
/// previously recorded phone. `created_at` survives, `updated_at` is bumped.
pub fn upsert_person(
    conn: &Connection,
    name: &str,
    phone: Option<&str>,
    supervisor: Option<&str>,
    supervisor_phone: Option<&str>,
    company: Option<&str>,
) -> AppResult<()> {
    let now = time::fmt_dt(&time::now());

    conn.execute(
        "INSERT INTO personnel (name, phone, supervisor, supervisor_phone, company, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)
         ON CONFLICT(name) DO UPDATE SET
             phone            = excluded.phone,
             supervisor       = excluded.supervisor,
             supervisor_phone = excluded.supervisor_phone,
             company          = excluded.company,
             updated_at       = excluded.updated_at",
        params![name, phone, supervisor, supervisor_phone, company, now],
    )?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Departures
// ---------------------------------------------------------------------------

pub fn insert_departure(conn: &Connection, dep: &Departure) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO departures
             (person_name, destination, departed_at, expected_return, actual_return,
              phone, supervisor, company, extensions_count)
         VALUES (?1, ?2, ?3, ?4, NULL, ?5, ?6, ?7, 0)",
        params![
            dep.person_name,
            dep.destination,
            time::fmt_dt(&dep.departed_at),
            time::fmt_dt(&dep.expected_return),
            dep.phone,
            dep.supervisor,
            dep.company,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_departure(conn: &Connection, id: i64) -> AppResult<Option<Departure>> {
    let mut stmt = conn.prepare("SELECT * FROM departures WHERE id = ?1")?;
    let dep = stmt.query_row([id], map_departure).optional()?;
    Ok(dep)
}

/// All departures with no recorded return, soonest expected return first.
pub fn load_active_departures(pool: &mut DbPool) -> AppResult<Vec<Departure>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM departures
         WHERE actual_return IS NULL
         ORDER BY expected_return ASC",
    )?;

    let rows = stmt.query_map([], map_departure)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Record a return. Guarded on "still active" so a second call is a no-op:
/// returns the number of rows updated (0 when already returned).
pub fn mark_returned(conn: &Connection, id: i64, returned_at: &NaiveDateTime) -> AppResult<usize> {
    let updated = conn.execute(
        "UPDATE departures
         SET actual_return = ?1
         WHERE id = ?2 AND actual_return IS NULL",
        params![time::fmt_dt(returned_at), id],
    )?;
    Ok(updated)
}

/// Append an extension and push the expected return forward.
///
/// The extension insert and the departure update must stay consistent
/// (sum of extension hours ⇔ total forward shift), so both run in one
/// transaction.
pub fn apply_extension(conn: &mut Connection, id: i64, hours: i64) -> AppResult<()> {
    let tx = conn.transaction()?;

    tx.execute(
        "INSERT INTO extensions (departure_id, hours, extended_at)
         VALUES (?1, ?2, ?3)",
        params![id, hours, time::fmt_dt(&time::now())],
    )?;

    tx.execute(
        "UPDATE departures
         SET expected_return = datetime(expected_return, '+' || ?1 || ' hours'),
             extensions_count = extensions_count + 1
         WHERE id = ?2",
        params![hours, id],
    )?;

    tx.commit()?;
    Ok(())
}

/// Extension history for one departure, oldest first.
pub fn load_extensions(pool: &mut DbPool, departure_id: i64) -> AppResult<Vec<Extension>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM extensions
         WHERE departure_id = ?1
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([departure_id], map_extension)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_log(pool: &mut DbPool) -> Result<Vec<(String, String)>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT date, message FROM log ORDER BY date DESC")?;

    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    Ok(out)
}
