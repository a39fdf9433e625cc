use super::KeyValueStore;
use crate::error::Result;
use std::collections::HashMap;

/// Store that lives only as long as the process.
///
/// The binary always uses [`SqliteStore`](super::SqliteStore); this one backs
/// the unit tests of the session, persistence and UI layers.
#[derive(Default)]
pub struct MemoryStore {
    slots: HashMap<(String, String), String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, namespace: &str, key: &str) -> Result<Option<String>> {
        Ok(self
            .slots
            .get(&(namespace.to_string(), key.to_string()))
            .cloned())
    }

    fn put(&mut self, namespace: &str, key: &str, value: &str) -> Result<()> {
        self.slots
            .insert((namespace.to_string(), key.to_string()), value.to_string());
        Ok(())
    }
}
