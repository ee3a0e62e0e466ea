//! `SQLite` database connection and operations.
//!
//! The database is stored at `~/.repflow/repflow.db` and holds the saved
//! exercise plan.

use rusqlite::Connection;

use crate::config::Paths;
use crate::error::RepflowError;

use super::migrations;

/// Database connection wrapper.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at the default location.
    ///
    /// Creates the database file and runs migrations if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open() -> Result<Self, RepflowError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        Self::open_at(&paths.database)
    }

    /// Open the database at a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_at(path: &std::path::Path) -> Result<Self, RepflowError> {
        let conn = Connection::open(path).map_err(|e| {
            RepflowError::Storage(format!("Failed to open database {}: {e}", path.display()))
        })?;

        let db = Self { conn };
        db.migrate()?;

        Ok(db)
    }

    /// Open an in-memory database (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_in_memory() -> Result<Self, RepflowError> {
        let conn = Connection::open_in_memory().map_err(|e| {
            RepflowError::Storage(format!("Failed to open in-memory database: {e}"))
        })?;

        let db = Self { conn };
        db.migrate()?;

        Ok(db)
    }

    /// Run database migrations.
    fn migrate(&self) -> Result<(), RepflowError> {
        migrations::run(&self.conn)
    }

    /// Get the current schema version.
    ///
    /// # Errors
    ///
    /// Returns an error if the version cannot be read.
    pub fn schema_version(&self) -> Result<i32, RepflowError> {
        migrations::get_version(&self.conn)
    }

    /// Get a reference to the underlying connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_in_memory() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.schema_version().unwrap() > 0);
    }

    #[test]
    fn test_open_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");

        let db = Database::open_at(&db_path).unwrap();
        assert!(db.schema_version().unwrap() > 0);
        assert!(db_path.exists());
    }

    #[test]
    fn test_reopen_database() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");

        {
            let db = Database::open_at(&db_path).unwrap();
            assert!(db.schema_version().unwrap() > 0);
        }

        // Reopen - should not run migrations again
        {
            let db = Database::open_at(&db_path).unwrap();
            assert!(db.schema_version().unwrap() > 0);
        }
    }
}
