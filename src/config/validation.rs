//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject sources that no resolver could ever open
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: StoreConfig → Result<(), Vec<ValidationError>>

use std::path::Component;
use thiserror::Error;
use crate::config::schema::StoreConfig;
use tracing_subscriber::EnvFilter;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("source must not be empty")]
    EmptySource,

    #[error("source '{0}' must not contain '..'")]
    SourceTraversal(String),

    #[error("resource_root must not be empty")]
    EmptyResourceRoot,

    #[error("log_filter '{0}' is not a valid filter directive")]
    InvalidLogFilter(String),
}

/// Check `config`, collecting every problem found.
pub fn validate_config(config: &StoreConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let source = config.source.trim_start_matches('/');
    if source.trim().is_empty() {
        errors.push(ValidationError::EmptySource);
    } else if std::path::Path::new(source)
        .components()
        .any(|c| c == Component::ParentDir)
    {
        errors.push(ValidationError::SourceTraversal(config.source.clone()));
    }

    if config.resource_root.as_os_str().is_empty() {
        errors.push(ValidationError::EmptyResourceRoot);
    }

    if EnvFilter::try_new(&config.log_filter).is_err() {
        errors.push(ValidationError::InvalidLogFilter(config.log_filter.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
