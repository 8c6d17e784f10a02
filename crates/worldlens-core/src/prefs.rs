// crates/worldlens-core/src/prefs.rs

//! # Preference Store
//!
//! Durable string-keyed storage for user preferences (last region, sort
//! field and order, favorites). The trait exists so the session can be
//! driven by an in-memory fake in tests instead of touching the
//! filesystem; keys are independent of each other, and nothing here ever
//! propagates a storage failure to the caller — reads fall back to the
//! provided default, writes are fire-and-forget.

use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Storage keys for the persisted preferences.
pub const REGION_KEY: &str = "lastRegion";
pub const SORT_FIELD_KEY: &str = "lastSortField";
pub const SORT_ORDER_KEY: &str = "lastSortOrder";
pub const FAVORITES_KEY: &str = "favorites";

/// Durable per-user key-value storage.
pub trait PrefStore {
    fn get_raw(&self, key: &str) -> Option<String>;
    fn set_raw(&mut self, key: &str, value: String);

    /// Decode the value under `key`; absent or undecodable values fall
    /// back to `default` without erroring.
    fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.get_raw(key)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or(default)
    }

    fn set<T: Serialize>(&mut self, key: &str, value: &T) {
        if let Ok(raw) = serde_json::to_string(value) {
            self.set_raw(key, raw);
        }
    }
}

/// In-memory store for tests and demos. No persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set_raw(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }
}

/// File-backed store: one JSON object of key -> encoded value, written
/// through on every set. A missing or corrupt file loads as empty; a
/// failed write leaves the in-memory view authoritative for the session.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FileStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self { path, values }
    }

    fn persist(&self) {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).ok();
        }
        if let Ok(raw) = serde_json::to_string_pretty(&self.values) {
            fs::write(&self.path, raw).ok();
        }
    }
}

impl PrefStore for FileStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set_raw(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
        self.persist();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_yields_the_default() {
        let store = MemoryStore::new();
        assert_eq!(store.get(REGION_KEY, "All".to_string()), "All");
    }

    #[test]
    fn corrupt_value_yields_the_default() {
        let mut store = MemoryStore::new();
        store.set_raw(SORT_FIELD_KEY, "{not json".to_string());
        assert_eq!(store.get(SORT_FIELD_KEY, 7u32), 7);
    }

    #[test]
    fn typed_round_trip() {
        let mut store = MemoryStore::new();
        store.set(FAVORITES_KEY, &vec!["BRA".to_string(), "PRT".to_string()]);
        let restored: Vec<String> = store.get(FAVORITES_KEY, Vec::new());
        assert_eq!(restored, ["BRA", "PRT"]);
    }

    #[test]
    fn file_store_round_trips_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        {
            let mut store = FileStore::open(&path);
            store.set(REGION_KEY, &"Europe".to_string());
            store.set(SORT_ORDER_KEY, &"desc".to_string());
        }
        let store = FileStore::open(&path);
        assert_eq!(store.get(REGION_KEY, String::new()), "Europe");
        assert_eq!(store.get(SORT_ORDER_KEY, String::new()), "desc");
    }

    #[test]
    fn corrupt_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "}}}}garbage").unwrap();
        let store = FileStore::open(&path);
        assert_eq!(store.get(REGION_KEY, "All".to_string()), "All");
    }

    #[test]
    fn keys_are_independent() {
        let mut store = MemoryStore::new();
        store.set(REGION_KEY, &"Asia".to_string());
        store.set_raw(SORT_FIELD_KEY, "not-json".to_string());
        // One corrupt key must not disturb another.
        assert_eq!(store.get(REGION_KEY, String::new()), "Asia");
    }
}
