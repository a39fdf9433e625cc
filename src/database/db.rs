//! SQLite-backed key-value store
//!
//! A single `preferences` table holds every slot, keyed by namespace and key.

use super::KeyValueStore;
use crate::error::Result;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) the database file and its table
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Opening database at {}", path.display());
        let conn = Connection::open(path)?;
        Self::init(conn)
    }

    /// Opens a private database that disappears with the connection
    pub fn open_in_memory() -> Result<Self> {
        log::debug!("Opening in-memory database");
        let conn = Connection::open_in_memory()?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS preferences (
                namespace TEXT NOT NULL,
                key TEXT NOT NULL,
                value TEXT NOT NULL,
                PRIMARY KEY (namespace, key)
            )",
            (),
        )?;

        Ok(Self { conn })
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, namespace: &str, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM preferences WHERE namespace = ?1 AND key = ?2",
                params![namespace, key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn put(&mut self, namespace: &str, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO preferences (namespace, key, value) VALUES (?1, ?2, ?3)
             ON CONFLICT(namespace, key) DO UPDATE SET value = excluded.value",
            params![namespace, key, value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_none() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.get("FlashcardApp", "flashcards").unwrap(), None);
    }

    #[test]
    fn test_put_then_get() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.put("FlashcardApp", "flashcards", "[]").unwrap();
        assert_eq!(
            store.get("FlashcardApp", "flashcards").unwrap().as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn test_put_replaces_value() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.put("ns", "k", "old").unwrap();
        store.put("ns", "k", "new").unwrap();
        assert_eq!(store.get("ns", "k").unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn test_namespaces_are_isolated() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.put("one", "k", "1").unwrap();
        store.put("two", "k", "2").unwrap();

        assert_eq!(store.get("one", "k").unwrap().as_deref(), Some("1"));
        assert_eq!(store.get("two", "k").unwrap().as_deref(), Some("2"));
        assert_eq!(store.get("three", "k").unwrap(), None);
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.sqlite3");

        {
            let mut store = SqliteStore::open(&path).unwrap();
            store.put("FlashcardApp", "flashcards", "saved").unwrap();
        }

        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(
            store.get("FlashcardApp", "flashcards").unwrap().as_deref(),
            Some("saved")
        );
    }
}
