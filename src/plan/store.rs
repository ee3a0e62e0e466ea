//! Exercise plan persistence.
//!
//! Persists the confirmed plan to the local database after every
//! successful workout start.

use chrono::{DateTime, Local, Utc};
use rusqlite::{params, Row};

use super::{ExerciseSpec, Section};
use crate::error::RepflowError;
use crate::storage::Database;

/// A plan loaded from storage, with the time it was saved.
#[derive(Debug, Clone)]
pub struct SavedPlan {
    /// The saved exercises, in plan order.
    pub exercises: Vec<ExerciseSpec>,
    /// When the plan was last saved.
    pub saved_at: Option<DateTime<Utc>>,
}

impl SavedPlan {
    /// Get the saved-at time in the local timezone.
    #[must_use]
    pub fn saved_at_local(&self) -> Option<DateTime<Local>> {
        self.saved_at.map(|t| t.with_timezone(&Local))
    }
}

/// Storage for the exercise plan.
pub struct PlanStore {
    db: Database,
}

impl PlanStore {
    /// Create a new plan store against the default database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn new() -> Result<Self, RepflowError> {
        let db = Database::open()?;
        Ok(Self { db })
    }

    /// Create a store with an existing database connection.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// Replace the saved plan with the given exercises.
    ///
    /// # Errors
    ///
    /// Returns an error if any statement fails.
    pub fn save(&self, exercises: &[ExerciseSpec]) -> Result<(), RepflowError> {
        let conn = self.db.connection();

        conn.execute("DELETE FROM plan_exercises", [])
            .map_err(|e| RepflowError::Storage(format!("Failed to clear plan: {e}")))?;

        let mut stmt = conn
            .prepare(
                r"INSERT INTO plan_exercises (position, section, name, reps, sets, time_minutes)
                  VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )
            .map_err(|e| RepflowError::Storage(format!("Failed to prepare insert: {e}")))?;

        for (position, spec) in exercises.iter().enumerate() {
            stmt.execute(params![
                position as i64,
                spec.section.as_str(),
                spec.name,
                spec.reps,
                spec.sets,
                spec.time_minutes,
            ])
            .map_err(|e| RepflowError::Storage(format!("Failed to insert exercise: {e}")))?;
        }

        conn.execute(
            "INSERT OR REPLACE INTO plan_meta (key, value) VALUES ('saved_at', ?1)",
            params![Utc::now().to_rfc3339()],
        )
        .map_err(|e| RepflowError::Storage(format!("Failed to record save time: {e}")))?;

        Ok(())
    }

    /// Load the saved plan, if any.
    ///
    /// Returns `None` when no plan has ever been saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded.
    pub fn load(&self) -> Result<Option<SavedPlan>, RepflowError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT section, name, reps, sets, time_minutes
                  FROM plan_exercises ORDER BY position",
            )
            .map_err(|e| RepflowError::Storage(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([], row_to_spec)
            .map_err(|e| RepflowError::Storage(format!("Failed to query plan: {e}")))?;

        let mut exercises = Vec::new();
        for row in rows {
            let (spec, section_raw) =
                row.map_err(|e| RepflowError::Storage(format!("Failed to read row: {e}")))?;
            let Some(spec) = spec else {
                return Err(RepflowError::Storage(format!(
                    "Unknown section in saved plan: {section_raw}"
                )));
            };
            exercises.push(spec);
        }

        if exercises.is_empty() {
            return Ok(None);
        }

        let saved_at = self.saved_at()?;
        Ok(Some(SavedPlan {
            exercises,
            saved_at,
        }))
    }

    /// Discard the saved plan.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn clear(&self) -> Result<(), RepflowError> {
        let conn = self.db.connection();

        conn.execute("DELETE FROM plan_exercises", [])
            .map_err(|e| RepflowError::Storage(format!("Failed to clear plan: {e}")))?;
        conn.execute("DELETE FROM plan_meta WHERE key = 'saved_at'", [])
            .map_err(|e| RepflowError::Storage(format!("Failed to clear plan metadata: {e}")))?;

        Ok(())
    }

    /// Read the last-saved timestamp, if recorded.
    fn saved_at(&self) -> Result<Option<DateTime<Utc>>, RepflowError> {
        use rusqlite::OptionalExtension;

        let conn = self.db.connection();
        let raw: Option<String> = conn
            .query_row(
                "SELECT value FROM plan_meta WHERE key = 'saved_at'",
                [],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| RepflowError::Storage(format!("Failed to read save time: {e}")))?;

        Ok(raw
            .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
            .map(|t| t.with_timezone(&Utc)))
    }
}

/// Convert a database row to an exercise spec.
///
/// Returns the raw section string alongside so the caller can report
/// unknown sections without a rusqlite error conversion dance.
fn row_to_spec(row: &Row<'_>) -> rusqlite::Result<(Option<ExerciseSpec>, String)> {
    let section_raw: String = row.get(0)?;
    let name: String = row.get(1)?;
    let reps: Option<u32> = row.get(2)?;
    let sets: Option<u32> = row.get(3)?;
    let time_minutes: Option<u32> = row.get(4)?;

    let spec = Section::parse(&section_raw).map(|section| ExerciseSpec {
        name,
        reps,
        sets,
        time_minutes,
        section,
    });

    Ok((spec, section_raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::default_plan;

    fn memory_store() -> PlanStore {
        PlanStore::with_database(Database::open_in_memory().unwrap())
    }

    #[test]
    fn test_load_empty() {
        let store = memory_store();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let store = memory_store();
        let plan = default_plan();

        store.save(&plan).unwrap();

        let saved = store.load().unwrap().unwrap();
        assert_eq!(saved.exercises, plan);
        assert!(saved.saved_at.is_some());
    }

    #[test]
    fn test_save_replaces_previous_plan() {
        let store = memory_store();
        store.save(&default_plan()).unwrap();

        let shorter = vec![ExerciseSpec {
            name: "Pushup".to_string(),
            reps: Some(10),
            sets: Some(2),
            time_minutes: None,
            section: Section::Push,
        }];
        store.save(&shorter).unwrap();

        let saved = store.load().unwrap().unwrap();
        assert_eq!(saved.exercises, shorter);
    }

    #[test]
    fn test_clear() {
        let store = memory_store();
        store.save(&default_plan()).unwrap();
        store.clear().unwrap();

        assert!(store.load().unwrap().is_none());
    }
}
