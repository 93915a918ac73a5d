//! In-memory store implementation, used in tests and as the fallback
//! when no durable path is configured.

use std::collections::HashMap;

use crate::KeyValueStore;

/// Volatile key-value store backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with the given entries.
    ///
    /// Useful in tests to simulate a previous browsing context.
    #[must_use]
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_missing_key_returns_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut store = MemoryStore::new();
        store.set("theme", "light");
        assert_eq!(store.get("theme"), Some("light".to_string()));
    }

    #[test]
    fn set_overwrites_previous_value() {
        let mut store = MemoryStore::new();
        store.set("fontSize", "large");
        store.set("fontSize", "extra-large");
        assert_eq!(store.get("fontSize"), Some("extra-large".to_string()));
    }

    #[test]
    fn remove_deletes_entry() {
        let mut store = MemoryStore::new();
        store.set("user", "{}");
        store.remove("user");
        assert_eq!(store.get("user"), None);
        assert!(store.is_empty());
    }

    #[test]
    fn remove_missing_key_is_noop() {
        let mut store = MemoryStore::new();
        store.remove("user");
        assert!(store.is_empty());
    }

    #[test]
    fn with_entries_seeds_store() {
        let store = MemoryStore::with_entries([("theme", "light"), ("highContrast", "true")]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("theme"), Some("light".to_string()));
    }
}
