// crates/worldlens-core/src/favorites.rs

//! Favorite countries, keyed by `cca3`.

use crate::prefs::{PrefStore, FAVORITES_KEY};
use std::collections::HashSet;

/// Return a new set with `id` added if absent, removed if present.
/// Toggling twice restores the original membership.
pub fn toggle(set: &HashSet<String>, id: &str) -> HashSet<String> {
    let mut next = set.clone();
    if !next.remove(id) {
        next.insert(id.to_string());
    }
    next
}

/// Restore the persisted favorites set (empty when absent or corrupt).
pub fn load(store: &impl PrefStore) -> HashSet<String> {
    store
        .get::<Vec<String>>(FAVORITES_KEY, Vec::new())
        .into_iter()
        .collect()
}

/// Persist `set`, sorted so the stored form is stable.
pub fn save(store: &mut impl PrefStore, set: &HashSet<String>) {
    let mut codes: Vec<&String> = set.iter().collect();
    codes.sort();
    store.set(FAVORITES_KEY, &codes);
}
