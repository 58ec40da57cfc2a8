//! Configuration loading from disk.

use std::path::Path;
use std::fs;
use thiserror::Error;
use crate::config::schema::StoreConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable naming a TOML config file for the global store.
pub const CONFIG_ENV: &str = "SETTINGS_STORE_CONFIG";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<StoreConfig, ConfigError> {
    let config: StoreConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<StoreConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

impl StoreConfig {
    /// Configuration for the global store.
    ///
    /// Reads the file named by `SETTINGS_STORE_CONFIG` when set. A missing
    /// or invalid file is logged and the defaults are used instead.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV) else {
            return Self::default();
        };
        let path = Path::new(&path);
        match load_config(path) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "Settings store configuration loaded");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "Failed to load settings store configuration: {}. Using defaults.", e);
                Self::default()
            }
        }
    }
}
