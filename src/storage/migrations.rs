//! Database migrations for repflow.
//!
//! Each migration upgrades the schema by one version. Migrations are run
//! automatically when the database is opened.

use rusqlite::Connection;

use crate::error::RepflowError;

/// Current schema version.
const CURRENT_VERSION: i32 = 1;

/// Get the current schema version from the database.
///
/// Returns 0 if no version has been set (new database).
pub fn get_version(conn: &Connection) -> Result<i32, RepflowError> {
    let version: i32 = conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| RepflowError::Storage(format!("Failed to get schema version: {e}")))?;

    Ok(version)
}

/// Set the schema version in the database.
fn set_version(conn: &Connection, version: i32) -> Result<(), RepflowError> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
        .map_err(|e| RepflowError::Storage(format!("Failed to set schema version: {e}")))
}

/// Run all pending migrations.
pub fn run(conn: &Connection) -> Result<(), RepflowError> {
    let current = get_version(conn)?;

    if current >= CURRENT_VERSION {
        return Ok(());
    }

    for version in (current + 1)..=CURRENT_VERSION {
        run_migration(conn, version)?;
        set_version(conn, version)?;
    }

    Ok(())
}

/// Run a specific migration.
fn run_migration(conn: &Connection, version: i32) -> Result<(), RepflowError> {
    match version {
        1 => migrate_v1(conn),
        _ => Err(RepflowError::Storage(format!(
            "Unknown migration version: {version}"
        ))),
    }
}

/// Migration v1: Initial schema.
///
/// Creates tables for:
/// - `plan_exercises`: the saved exercise plan, one row per exercise
/// - `plan_meta`: plan metadata (last-saved timestamp)
fn migrate_v1(conn: &Connection) -> Result<(), RepflowError> {
    conn.execute_batch(
        r"
        -- Saved exercise plan
        CREATE TABLE IF NOT EXISTS plan_exercises (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            position INTEGER NOT NULL,
            section TEXT NOT NULL,
            name TEXT NOT NULL,
            reps INTEGER,
            sets INTEGER,
            time_minutes INTEGER
        );

        CREATE INDEX IF NOT EXISTS idx_plan_exercises_position
        ON plan_exercises(position);

        -- Plan metadata (key/value)
        CREATE TABLE IF NOT EXISTS plan_meta (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        ",
    )
    .map_err(|e| RepflowError::Storage(format!("Migration v1 failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_from_scratch() {
        let conn = Connection::open_in_memory().unwrap();
        assert_eq!(get_version(&conn).unwrap(), 0);

        run(&conn).unwrap();
        assert_eq!(get_version(&conn).unwrap(), CURRENT_VERSION);

        // Idempotent on a second run
        run(&conn).unwrap();
        assert_eq!(get_version(&conn).unwrap(), CURRENT_VERSION);
    }

    #[test]
    fn test_v1_tables_exist() {
        let conn = Connection::open_in_memory().unwrap();
        run(&conn).unwrap();

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master
                 WHERE type = 'table' AND name IN ('plan_exercises', 'plan_meta')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 2);
    }
}
