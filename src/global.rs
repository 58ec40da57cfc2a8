//! Process-wide store.
//!
//! Built on first use from `StoreConfig::from_env`. `set_source` and `reset`
//! exist for test harnesses.

use std::sync::OnceLock;
use crate::config::StoreConfig;
use crate::store::SettingsStore;

static GLOBAL: OnceLock<SettingsStore> = OnceLock::new();

/// The global store, created on first call.
pub fn store() -> &'static SettingsStore {
    GLOBAL.get_or_init(|| SettingsStore::from_config(&StoreConfig::from_env()))
}

/// Value for `key` from the global store, or `default`.
pub fn get_value(key: &str, default: &str) -> String {
    store().get(key, default)
}

/// Change the location the global store reads on its next load.
pub fn set_source(location: impl Into<String>) {
    store().set_source(location);
}

/// Discard the global store's table.
pub fn reset() {
    store().reset();
}
