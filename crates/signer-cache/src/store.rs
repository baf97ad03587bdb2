//! The in-memory store implementation.

use std::collections::HashMap;

use crate::traits::{CacheEntry, Store};

/// A plain in-process store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// The entries, keyed by the cache key.
    entries: HashMap<String, CacheEntry>,
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Option<CacheEntry> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: String, entry: CacheEntry) {
        self.entries.insert(key, entry);
    }

    fn delete(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
