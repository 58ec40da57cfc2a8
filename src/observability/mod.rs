//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! SettingsStore loads produce:
//!     → tracing events (load summary, swallowed failures)
//!     → metrics.rs (load counters, entry gauge)
//!
//! Consumers:
//!     → logging.rs subscriber (stdout)
//!     → whatever metrics recorder the host process installs
//! ```
//!
//! # Design Decisions
//! - The library never installs a subscriber or recorder on its own
//! - Failures swallowed by the store are still visible here

pub mod logging;
pub mod metrics;
