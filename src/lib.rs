//! Lazily loaded, thread-safe settings from a Java `.properties` resource.
//!
//! ```no_run
//! let timeout = settings_store::get_value("http.timeout.secs", "30");
//! ```
//!
//! Lookups never fail: a missing resource, an unreadable stream or an absent
//! key all fall back to the caller's default.

pub mod config;
pub mod global;
pub mod observability;
pub mod properties;
pub mod resource;
pub mod store;

pub use config::StoreConfig;
pub use global::get_value;
pub use properties::Properties;
pub use store::{LoadError, LoadStatus, SettingsStore};
