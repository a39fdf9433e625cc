//! Key-value storage backends.
//!
//! The deck is kept as one text value in a namespaced slot, so any store that
//! can read and write a string under `(namespace, key)` can back the app.

pub mod db;
pub mod memory;

pub use db::SqliteStore;
pub use memory::MemoryStore;

use crate::error::Result;

pub trait KeyValueStore {
    /// Returns the stored value, or `None` if the slot was never written.
    fn get(&self, namespace: &str, key: &str) -> Result<Option<String>>;

    /// Writes `value`, replacing whatever the slot held before.
    fn put(&mut self, namespace: &str, key: &str, value: &str) -> Result<()>;
}
