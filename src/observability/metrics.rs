//! Metrics for settings loads.
//!
//! # Metrics
//! - `settings_loads_total` (counter): completed loads by `source` and
//!   `outcome` (`loaded`, `not_found`, `read_failed`, `close_failed`)
//! - `settings_entries` (gauge): entries in the table loaded from `source`
//!
//! Recorded through the `metrics` facade; a no-op unless the host installs
//! a recorder.

/// Record one completed load.
pub fn record_load(source: &str, outcome: &'static str, entries: usize) {
    ::metrics::counter!(
        "settings_loads_total",
        "source" => source.to_string(),
        "outcome" => outcome
    )
    .increment(1);
    ::metrics::gauge!("settings_entries", "source" => source.to_string()).set(entries as f64);
}

/// Record that the table loaded from `source` was discarded.
pub fn record_reset(source: &str) {
    ::metrics::gauge!("settings_entries", "source" => source.to_string()).set(0.0);
}
