use std::path::Path;
use std::sync::{Mutex, PoisonError};

use log::info;
use rusqlite::{Connection, params};

use robur_domain::{
    BodyPart, Category, Difficulty, Exercise, Goal, Minutes, Name, StorageError, catalog,
};

/// Single-table catalog persistence. All enumerated attributes are stored as
/// their canonical lowercase tokens.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(box_err)?;
            }
        }
        let conn = Connection::open(path).map_err(box_err)?;
        Self::init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(box_err)?;
        Self::init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn init_schema(conn: &Connection) -> Result<(), StorageError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS exercises (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL UNIQUE,
                body_part TEXT NOT NULL,
                category TEXT NOT NULL,
                difficulty TEXT NOT NULL,
                duration_minutes INTEGER NOT NULL,
                equipment TEXT,
                target_goal TEXT NOT NULL
            )",
            [],
        )
        .map_err(box_err)?;
        Ok(())
    }

    /// Inserts the built-in catalog if the table is empty. Returns the
    /// number of inserted records, zero if data was already present.
    pub fn seed_if_empty(&self) -> Result<usize, StorageError> {
        let conn = self.conn.lock().unwrap_or_else(PoisonError::into_inner);
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM exercises", [], |row| row.get(0))
            .map_err(box_err)?;
        if count > 0 {
            return Ok(0);
        }

        let exercises = catalog::exercises();
        for exercise in &exercises {
            conn.execute(
                "INSERT INTO exercises \
                 (id, name, body_part, category, difficulty, duration_minutes, equipment, target_goal) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    *exercise.id,
                    exercise.name.as_str(),
                    exercise.body_part.token(),
                    exercise.category.token(),
                    exercise.difficulty.token(),
                    u32::from(exercise.duration),
                    exercise.equipment,
                    exercise.goal.token(),
                ],
            )
            .map_err(box_err)?;
        }
        info!("seeded exercise catalog with {} records", exercises.len());
        Ok(exercises.len())
    }

    /// Reads the full catalog in identifier order.
    pub fn load(&self) -> Result<Vec<Exercise>, StorageError> {
        struct Row {
            id: u32,
            name: String,
            body_part: String,
            category: String,
            difficulty: String,
            duration_minutes: u32,
            equipment: Option<String>,
            target_goal: String,
        }

        let conn = self.conn.lock().unwrap_or_else(PoisonError::into_inner);
        let mut stmt = conn
            .prepare(
                "SELECT id, name, body_part, category, difficulty, duration_minutes, \
                 equipment, target_goal FROM exercises ORDER BY id",
            )
            .map_err(box_err)?;
        let rows = stmt
            .query_map([], |row| {
                Ok(Row {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    body_part: row.get(2)?,
                    category: row.get(3)?,
                    difficulty: row.get(4)?,
                    duration_minutes: row.get(5)?,
                    equipment: row.get(6)?,
                    target_goal: row.get(7)?,
                })
            })
            .map_err(box_err)?
            .collect::<Result<Vec<Row>, _>>()
            .map_err(box_err)?;

        rows.into_iter()
            .map(|row| {
                Ok(Exercise {
                    id: row.id.into(),
                    name: Name::new(&row.name).map_err(box_err)?,
                    body_part: BodyPart::try_from(row.body_part.as_str()).map_err(box_err)?,
                    category: Category::try_from(row.category.as_str()).map_err(box_err)?,
                    difficulty: Difficulty::try_from(row.difficulty.as_str()).map_err(box_err)?,
                    duration: Minutes::new(row.duration_minutes).map_err(box_err)?,
                    equipment: row.equipment,
                    goal: Goal::try_from(row.target_goal.as_str()).map_err(box_err)?,
                })
            })
            .collect()
    }
}

fn box_err<E: std::error::Error + Send + Sync + 'static>(err: E) -> StorageError {
    StorageError::Other(Box::new(err))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_seed_and_load_round_trip() {
        let store = SqliteStore::open_in_memory().unwrap();

        assert_eq!(store.load().unwrap(), vec![]);
        assert_eq!(store.seed_if_empty().unwrap(), catalog::exercises().len());
        assert_eq!(store.load().unwrap(), catalog::exercises());
    }

    #[test]
    fn test_seed_is_idempotent() {
        let store = SqliteStore::open_in_memory().unwrap();

        assert!(store.seed_if_empty().unwrap() > 0);
        assert_eq!(store.seed_if_empty().unwrap(), 0);
        assert_eq!(store.load().unwrap().len(), catalog::exercises().len());
    }

    #[test]
    fn test_open_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("robur.db");

        {
            let store = SqliteStore::open(&path).unwrap();
            store.seed_if_empty().unwrap();
        }

        let reopened = SqliteStore::open(&path).unwrap();
        assert_eq!(reopened.seed_if_empty().unwrap(), 0);
        assert_eq!(reopened.load().unwrap(), catalog::exercises());
    }
}
