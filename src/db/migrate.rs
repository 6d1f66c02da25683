use crate::ui::messages::success;
use rusqlite::{Connection, Error, OptionalExtension, Result, params};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if a table has a given column.
fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `personnel` table (manifest, keyed by unique name).
fn create_personnel_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS personnel (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            name             TEXT UNIQUE NOT NULL,
            phone            TEXT,
            supervisor       TEXT,
            supervisor_phone TEXT,
            company          TEXT,
            created_at       TEXT NOT NULL,
            updated_at       TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_personnel_name ON personnel(name);
        "#,
    )?;
    Ok(())
}

/// Create the `departures` table with the modern schema (including `company`).
fn create_departures_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS departures (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            person_name      TEXT NOT NULL,
            destination      TEXT NOT NULL,
            departed_at      TEXT NOT NULL,
            expected_return  TEXT NOT NULL,
            actual_return    TEXT,
            phone            TEXT,
            supervisor       TEXT,
            company          TEXT,
            extensions_count INTEGER NOT NULL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_departures_active ON departures(actual_return);
        CREATE INDEX IF NOT EXISTS idx_departures_expected ON departures(expected_return);
        "#,
    )?;
    Ok(())
}

/// Create the `extensions` table (append-only audit trail).
fn create_extensions_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS extensions (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            departure_id INTEGER NOT NULL,
            hours        INTEGER NOT NULL,
            extended_at  TEXT NOT NULL,
            FOREIGN KEY (departure_id) REFERENCES departures (id)
        );

        CREATE INDEX IF NOT EXISTS idx_extensions_departure ON extensions(departure_id);
        "#,
    )?;
    Ok(())
}

/// Migrate a pre-0.3 `departures` table to include the `company` snapshot.
fn migrate_add_company_to_departures(conn: &Connection) -> Result<(), Error> {
    let version = "20250704_0001_add_company_to_departures";

    // 1) Check if already applied
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    // 2) Run the migration only if the column is actually missing
    if !has_column(conn, "departures", "company")? {
        conn.execute("ALTER TABLE departures ADD COLUMN company TEXT;", [])
            .map_err(|e| {
                Error::SqliteFailure(
                    rusqlite::ffi::Error::new(1),
                    Some(format!("Failed to add 'company' column: {}", e)),
                )
            })?;

        success(format!(
            "Migration applied: {} → added 'company' to departures table",
            version
        ));
    }

    // 3) Mark as applied
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, 'migration_applied', ?2, 'Added company snapshot to departures')",
        params![crate::utils::time::log_timestamp(), version],
    )?;

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked from db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Core tables
    let departures_existed = table_exists(conn, "departures")?;

    create_personnel_table(conn)?;
    create_departures_table(conn)?;
    create_extensions_table(conn)?;

    if !departures_existed {
        success("Created camplog tables (modern schema).");
    }

    // 3) Versioned upgrades
    migrate_add_company_to_departures(conn)?;

    Ok(())
}
