//! SQLite-backed search history store.

use std::path::Path;
use std::sync::Mutex;

use chrono::Utc;
use rusqlite::{params, Connection};

use super::{HistoryError, HistoryStore};

/// SQLite-backed history store.
pub struct SqliteHistoryStore {
    conn: Mutex<Connection>,
    cap: usize,
}

impl SqliteHistoryStore {
    /// Create a new store, creating the database file and table if needed.
    pub fn new(path: &Path, cap: usize) -> Result<Self, HistoryError> {
        let conn = Connection::open(path).map_err(|e| HistoryError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
            cap,
        })
    }

    /// Create an in-memory store (useful for testing).
    pub fn in_memory(cap: usize) -> Result<Self, HistoryError> {
        let conn =
            Connection::open_in_memory().map_err(|e| HistoryError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
            cap,
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<(), HistoryError> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS searches (
                term TEXT PRIMARY KEY,
                searched_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_searches_searched_at ON searches(searched_at);
            "#,
        )
        .map_err(|e| HistoryError::Database(e.to_string()))?;

        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>, HistoryError> {
        self.conn
            .lock()
            .map_err(|_| HistoryError::Database("connection lock poisoned".to_string()))
    }
}

impl HistoryStore for SqliteHistoryStore {
    fn add(&self, term: &str) -> Result<(), HistoryError> {
        if term.is_empty() {
            return Ok(());
        }

        let conn = self.lock()?;
        conn.execute(
            r#"
            INSERT INTO searches (term, searched_at) VALUES (?1, ?2)
            ON CONFLICT(term) DO UPDATE SET searched_at = excluded.searched_at
            "#,
            params![term, Utc::now().to_rfc3339()],
        )
        .map_err(|e| HistoryError::Database(e.to_string()))?;

        // Enforce the cap, dropping the oldest entries. rowid breaks ties
        // between equal timestamps.
        conn.execute(
            r#"
            DELETE FROM searches WHERE term NOT IN (
                SELECT term FROM searches
                ORDER BY searched_at DESC, rowid DESC
                LIMIT ?1
            )
            "#,
            params![self.cap as i64],
        )
        .map_err(|e| HistoryError::Database(e.to_string()))?;

        Ok(())
    }

    fn recent(&self, limit: usize) -> Result<Vec<String>, HistoryError> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare(
                "SELECT term FROM searches ORDER BY searched_at DESC, rowid DESC LIMIT ?1",
            )
            .map_err(|e| HistoryError::Database(e.to_string()))?;

        let rows = stmt
            .query_map(params![limit as i64], |row| row.get::<_, String>(0))
            .map_err(|e| HistoryError::Database(e.to_string()))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| HistoryError::Database(e.to_string()))
    }

    fn clear(&self) -> Result<(), HistoryError> {
        let conn = self.lock()?;
        conn.execute("DELETE FROM searches", [])
            .map_err(|e| HistoryError::Database(e.to_string()))?;
        Ok(())
    }
}
