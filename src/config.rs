//! Runtime settings, read from the environment.

use crate::database::SqliteStore;
use crate::error::Result;
use std::path::PathBuf;

pub const DB_PATH_VAR: &str = "FLASHCARDS_DB";
pub const DEFAULT_DB_PATH: &str = "db.sqlite3";
/// Value of `FLASHCARDS_DB` that keeps everything in memory.
pub const IN_MEMORY: &str = ":memory:";

#[derive(Clone, Debug, PartialEq)]
pub enum StorageLocation {
    File(PathBuf),
    InMemory,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub storage: StorageLocation,
    pub window_size: [f32; 2],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageLocation::File(PathBuf::from(DEFAULT_DB_PATH)),
            window_size: [400.0, 500.0],
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source. Blank values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(value) = lookup(DB_PATH_VAR) {
            let trimmed = value.trim();
            if trimmed == IN_MEMORY {
                config.storage = StorageLocation::InMemory;
            } else if !trimmed.is_empty() {
                config.storage = StorageLocation::File(PathBuf::from(value));
            }
        }

        config
    }

    pub fn open_store(&self) -> Result<SqliteStore> {
        match &self.storage {
            StorageLocation::File(path) => SqliteStore::open(path),
            StorageLocation::InMemory => {
                log::warn!("Using in-memory storage, cards will not be kept");
                SqliteStore::open_in_memory()
            }
        }
    }
}
