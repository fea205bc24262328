//! Key-value settings store injected into the core.
//!
//! The browser implementation wraps `window.localStorage`; tests use
//! [`MemoryStore`]. Stores are best-effort: a write that cannot be persisted
//! is dropped, and a read that fails is reported as absent.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use std::collections::HashMap;

pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store seeded with one entry.
    #[must_use]
    pub fn with(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_owned(), value.to_owned());
        Self { entries, writes: 0 }
    }

    /// How many times [`SettingsStore::set`] has been called.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.writes += 1;
        self.entries.insert(key.to_owned(), value.to_owned());
    }
}
