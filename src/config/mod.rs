//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, path from SETTINGS_STORE_CONFIG)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → StoreConfig (validated, immutable)
//!     → SettingsStore::from_config
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - This is the store's own configuration, not the settings it serves

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{StoreConfig, DEFAULT_SOURCE};
pub use validation::ValidationError;
