use std::path::Path;
use std::sync::Mutex;

use log::debug;
use rusqlite::{params, Connection, OptionalExtension};

use takatrack_core::store::KvStoreTrait;
use takatrack_core::Result;

use crate::errors::StorageError;

/// Key-value store backed by a single SQLite table.
///
/// The goal repository rewrites whole documents, so one `TEXT` value per
/// key is all the schema there is. Access is serialized through a mutex;
/// the write volume here is one row per user action.
pub struct SqliteKvStore {
    conn: Mutex<Connection>,
}

impl SqliteKvStore {
    /// Opens (or creates) the database file and ensures the schema exists.
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let conn = Connection::open(db_path.as_ref())
            .map_err(|e| StorageError::ConnectionFailed(e.to_string()))?;
        debug!("[SqliteKv] Opened store at {:?}", db_path.as_ref());
        Self::from_connection(conn)
    }

    /// In-memory store, handy for tests and ephemeral sessions.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::ConnectionFailed(e.to_string()))?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv_store (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )
        .map_err(|e| StorageError::MigrationFailed(e.to_string()))?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

impl KvStoreTrait for SqliteKvStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn.lock().unwrap();
        let value = conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(StorageError::from)?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT OR REPLACE INTO kv_store (key, value) VALUES (?1, ?2)",
            params![key, value],
        )
        .map_err(StorageError::from)?;
        Ok(())
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key_returns_none() {
        let store = SqliteKvStore::open_in_memory().unwrap();
        assert_eq!(store.get("absent").unwrap(), None);
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let store = SqliteKvStore::open_in_memory().unwrap();
        store.set("savingsGoals", r#"{"version":1,"goals":[]}"#).unwrap();
        assert_eq!(
            store.get("savingsGoals").unwrap().as_deref(),
            Some(r#"{"version":1,"goals":[]}"#)
        );
    }

    #[test]
    fn test_set_replaces_previous_value() {
        let store = SqliteKvStore::open_in_memory().unwrap();
        store.set("k", "first").unwrap();
        store.set("k", "second").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("takatrack.db");

        {
            let store = SqliteKvStore::new(&path).unwrap();
            store.set("k", "persisted").unwrap();
        }

        let reopened = SqliteKvStore::new(&path).unwrap();
        assert_eq!(reopened.get("k").unwrap().as_deref(), Some("persisted"));
    }
}
