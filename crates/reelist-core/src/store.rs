//! Watched-list persistence.
//!
//! The list is stored as a single JSON document, read once at startup and
//! rewritten in full on every mutation. The application depends on the
//! [`WatchedStore`] capability rather than a concrete file, so tests can
//! swap in [`MemoryStore`].

use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::ReelistError;
use crate::models::WatchedEntry;

/// Load/save capability for the watched list.
pub trait WatchedStore {
    /// Load the full list. Absent or unreadable state loads as empty.
    fn load(&self) -> Result<Vec<WatchedEntry>, ReelistError>;

    /// Persist the full list, replacing whatever was stored before.
    fn save(&self, entries: &[WatchedEntry]) -> Result<(), ReelistError>;
}

/// Production store: one JSON file under the platform data dir.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl WatchedStore for JsonFileStore {
    fn load(&self) -> Result<Vec<WatchedEntry>, ReelistError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        match serde_json::from_str(&content) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                // A corrupt file should not take the whole app down; start
                // over with an empty list and let the next save replace it.
                tracing::warn!("malformed watched list at {}: {e}", self.path.display());
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, entries: &[WatchedEntry]) -> Result<(), ReelistError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| ReelistError::Store(e.to_string()))?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-memory store for tests.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<Vec<WatchedEntry>>,
}

impl WatchedStore for MemoryStore {
    fn load(&self) -> Result<Vec<WatchedEntry>, ReelistError> {
        Ok(self.entries.lock().expect("store poisoned").clone())
    }

    fn save(&self, entries: &[WatchedEntry]) -> Result<(), ReelistError> {
        *self.entries.lock().expect("store poisoned") = entries.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(imdb_id: &str) -> WatchedEntry {
        WatchedEntry {
            imdb_id: imdb_id.into(),
            title: "Inception".into(),
            year: "2010".into(),
            poster: Some("https://example.com/p.jpg".into()),
            imdb_rating: 8.8,
            runtime: 148,
            user_rating: 9,
        }
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("watched.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_roundtrips_every_field() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("watched.json"));

        let entries = vec![entry("tt1375666")];
        store.save(&entries).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, entries);
    }

    #[test]
    fn save_replaces_the_previous_list_in_full() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("watched.json"));

        store.save(&[entry("tt1"), entry("tt2")]).unwrap();
        store.save(&[entry("tt3")]).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].imdb_id, "tt3");
    }

    #[test]
    fn malformed_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("watched.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = JsonFileStore::new(path);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn memory_store_roundtrips() {
        let store = MemoryStore::default();
        store.save(&[entry("tt1")]).unwrap();
        assert_eq!(store.load().unwrap()[0].imdb_id, "tt1");
    }
}
