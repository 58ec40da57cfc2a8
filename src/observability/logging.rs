//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the `tracing` subscriber for binaries and test harnesses
//! - Honour `RUST_LOG`, falling back to the configured filter

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use crate::config::StoreConfig;

/// Install a fmt subscriber filtered by `RUST_LOG` or `fallback_filter`.
///
/// Returns `false` if a global subscriber was already set.
pub fn init(fallback_filter: &str) -> bool {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback_filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}

/// Install the subscriber using `config.log_filter` as the fallback filter.
pub fn init_from_config(config: &StoreConfig) -> bool {
    init(&config.log_filter)
}
