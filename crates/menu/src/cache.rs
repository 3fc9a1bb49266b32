//! Advisory menu cache.
//!
//! Cached menus are a convenience, not a source of truth: absence or
//! corruption degrades to an empty result and the caller refetches.

use tracing::warn;

use atrium_core::KeyValueStore;

use crate::node::MenuGroup;

const MENUS_KEY: &str = "menus";

/// Load cached menu groups; empty on absence or corruption.
pub fn load_cached(store: &dyn KeyValueStore) -> Vec<MenuGroup> {
    let Some(raw) = store.get(MENUS_KEY) else {
        return Vec::new();
    };
    match serde_json::from_str(&raw) {
        Ok(groups) => groups,
        Err(e) => {
            warn!(error = %e, "cached menus unreadable, dropping cache");
            store.remove(MENUS_KEY);
            Vec::new()
        }
    }
}

/// Cache menu groups for the next session.
pub fn store_menus(store: &dyn KeyValueStore, groups: &[MenuGroup]) {
    match serde_json::to_string(groups) {
        Ok(raw) => store.set(MENUS_KEY, raw),
        Err(e) => warn!(error = %e, "failed to serialize menus for caching"),
    }
}
