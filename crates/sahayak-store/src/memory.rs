//! In-memory implementation of `KeyValueStore`.
//!
//! `InMemoryStore` keeps entries in a `BTreeMap` behind an `Arc<Mutex<_>>`.
//! Clones share the same map, so a screen and a background task can hold the
//! store at the same time. Nothing survives process exit.

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard},
};

use tracing::debug;

use sahayak_contracts::error::{SahayakError, SahayakResult};
use sahayak_core::traits::KeyValueStore;

#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    pub(crate) entries: Arc<Mutex<BTreeMap<String, String>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> SahayakResult<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> SahayakResult<bool> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> SahayakResult<MutexGuard<'_, BTreeMap<String, String>>> {
        self.entries.lock().map_err(|e| SahayakError::StorageFailure {
            reason: format!("key-value store lock poisoned: {}", e),
        })
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> SahayakResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn put(&self, key: &str, value: String) -> SahayakResult<()> {
        let mut entries = self.lock()?;
        debug!(key, bytes = value.len(), "store put");
        entries.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&self, key: &str) -> SahayakResult<bool> {
        let removed = self.lock()?.remove(key).is_some();
        debug!(key, removed, "store delete");
        Ok(removed)
    }
}
