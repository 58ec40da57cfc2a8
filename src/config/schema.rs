//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Location read when nothing else is configured.
pub const DEFAULT_SOURCE: &str = "/settings.properties";

/// Root configuration for a settings store.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Resource location of the properties file (e.g. "/settings.properties").
    pub source: String,

    /// Directory the store's own resolver maps locations under.
    pub resource_root: PathBuf,

    /// Fallback `tracing` filter when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            resource_root: PathBuf::from("."),
            log_filter: "settings_store=info".to_string(),
        }
    }
}
