//! In-memory key-value store

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::KvStore;
use crate::error::GardenResult;

/// Process-local store. Clones share the same map, so a clone handed to a
/// second [`crate::ThemeStore`] sees everything the first one persisted.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Drop a key (used to simulate a cleared browser store)
    pub fn remove(&self, key: &str) -> Option<String> {
        self.entries.write().remove(key)
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> GardenResult<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> GardenResult<()> {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
