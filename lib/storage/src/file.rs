//! File-backed store implementation for native hosts.
//!
//! Persists the full key-value map as a single JSON object, rewritten on
//! every mutation. This matches the write-through semantics of the browser
//! substrate; throughput is not a concern at this scale.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::KeyValueStore;

/// Key-value store persisted to a JSON file.
///
/// The in-memory map is authoritative within a browsing context; the file
/// is rewritten after every mutation. A write failure is logged and the
/// in-memory view proceeds, mirroring the no-fail mutation contract of
/// the stores built on top.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`, loading any previously persisted entries.
    ///
    /// A missing file yields an empty store. A file that fails to read or
    /// parse is treated as absent: the affected state resets to empty and
    /// a warning is logged, matching the malformed-durable-state policy.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = Self::load(&path);
        Self { path, entries }
    }

    fn load(path: &Path) -> BTreeMap<String, String> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return BTreeMap::new();
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read store file; starting empty");
                return BTreeMap::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "malformed store file; starting empty");
                BTreeMap::new()
            }
        }
    }

    fn persist(&self) {
        let json = match serde_json::to_string_pretty(&self.entries) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "failed to encode store contents");
                return;
            }
        };
        if let Err(e) = fs::write(&self.path, json) {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to write store file");
        }
    }

    /// Returns the path the store persists to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist();
    }

    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.persist();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_missing_file_yields_empty_store() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::open(dir.path().join("state.json"));
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn entries_survive_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("state.json");

        let mut store = FileStore::open(&path);
        store.set("theme", "light");
        store.set("accessibilityMode", "true");
        drop(store);

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("theme"), Some("light".to_string()));
        assert_eq!(reopened.get("accessibilityMode"), Some("true".to_string()));
    }

    #[test]
    fn remove_persists() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("state.json");

        let mut store = FileStore::open(&path);
        store.set("user", "{\"id\":\"usr_x\"}");
        store.remove("user");
        drop(store);

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("user"), None);
    }

    #[test]
    fn malformed_file_starts_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("state.json");
        fs::write(&path, "not json at all").expect("write");

        let store = FileStore::open(&path);
        assert_eq!(store.get("theme"), None);
    }
}
