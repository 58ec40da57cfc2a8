//! Lazily loaded settings store.
//!
//! # Lifecycle
//! ```text
//! unset ──first get()/init()──▶ loaded ──reset()──▶ unset
//! ```
//!
//! # Concurrency
//! - Fast path: lock-free read of the published `Arc<Properties>`
//! - Slow path: the state mutex is taken, the table re-checked, and only
//!   then loaded and published, so concurrent first callers share one load
//! - `reset` and `set_source` take the same mutex
//!
//! # Failure Semantics
//! Reads never fail. A missing or unreadable resource yields an empty table
//! and every lookup returns its default. Swallowed failures are logged and
//! kept in `load_status`.

pub mod load;

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use arc_swap::ArcSwapOption;
use crate::config::StoreConfig;
use crate::observability::metrics;
use crate::properties::Properties;
use crate::resource::{ContextResolver, DirectoryResolver, ResourceResolver};

pub use load::{LoadError, LoadStatus};

/// Mutable state guarded by the load mutex.
struct StoreState {
    source: String,
    generation: u64,
    status: Option<LoadStatus>,
}

impl StoreState {
    /// Source of the table currently published, falling back to the
    /// configured one.
    fn loaded_source(&self) -> &str {
        self.status.as_ref().map_or(&self.source, |status| &status.source)
    }
}

/// Key/value settings loaded once per generation from a single resource.
pub struct SettingsStore {
    table: ArcSwapOption<Properties>,
    state: Mutex<StoreState>,
    primary: Arc<dyn ResourceResolver>,
    fallback: Arc<dyn ResourceResolver>,
}

impl SettingsStore {
    /// Create a store reading `source`.
    ///
    /// The calling thread's context resolver is tried first, then `fallback`.
    pub fn new(source: impl Into<String>, fallback: Arc<dyn ResourceResolver>) -> Self {
        Self {
            table: ArcSwapOption::empty(),
            state: Mutex::new(StoreState {
                source: source.into(),
                generation: 0,
                status: None,
            }),
            primary: Arc::new(ContextResolver),
            fallback,
        }
    }

    /// Create a store whose own resolver maps locations under
    /// `config.resource_root`.
    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(
            config.source.clone(),
            Arc::new(DirectoryResolver::new(config.resource_root.clone())),
        )
    }

    /// Replace the primary resolver.
    pub fn with_primary(mut self, primary: Arc<dyn ResourceResolver>) -> Self {
        self.primary = primary;
        self
    }

    /// Value for `key`, or `default` when the key is absent or nothing
    /// could be loaded.
    pub fn get(&self, key: &str, default: &str) -> String {
        tracing::trace!(key, default, "Getting setting");
        let table = self.table();
        let value = table.get(key).unwrap_or(default).to_string();
        tracing::trace!(key, value = %value, "Resolved setting");
        value
    }

    /// Load now if no table is loaded, and return the current table.
    pub fn init(&self) -> Arc<Properties> {
        self.table()
    }

    /// The loaded table, without triggering a load.
    pub fn snapshot(&self) -> Option<Arc<Properties>> {
        self.table.load_full()
    }

    /// Location the next load will read.
    pub fn source(&self) -> String {
        self.lock_state().source.clone()
    }

    /// Change the location used by the next load.
    ///
    /// An already loaded table is kept until `reset`.
    pub fn set_source(&self, location: impl Into<String>) {
        let location = location.into();
        let mut state = self.lock_state();
        tracing::debug!(from = %state.source, to = %location, "Settings source updated");
        state.source = location;
    }

    /// Discard the loaded table so the next read loads again.
    pub fn reset(&self) {
        let state = self.lock_state();
        if self.table.swap(None).is_some() {
            metrics::record_reset(state.loaded_source());
            tracing::debug!("Settings table discarded");
        }
    }

    /// Reset and forget the last load's diagnostics.
    pub fn teardown(&self) {
        let mut state = self.lock_state();
        self.table.store(None);
        metrics::record_reset(state.loaded_source());
        state.status = None;
    }

    /// Diagnostics of the most recent load, if any.
    pub fn load_status(&self) -> Option<LoadStatus> {
        self.lock_state().status.clone()
    }

    fn table(&self) -> Arc<Properties> {
        if let Some(table) = self.table.load_full() {
            return table;
        }

        let mut state = self.lock_state();
        if let Some(table) = self.table.load_full() {
            return table;
        }

        let outcome = load::load(self.primary.as_ref(), self.fallback.as_ref(), &state.source);
        outcome.log(&state.source);
        let label = outcome.label();
        let resolved_by = outcome.resolved_by;
        let (props, error) = outcome.into_parts();
        metrics::record_load(&state.source, label, props.len());

        state.generation += 1;
        state.status = Some(LoadStatus {
            generation: state.generation,
            source: state.source.clone(),
            resolved_by,
            entries: props.len(),
            error: error.map(Arc::new),
        });

        let table = Arc::new(props);
        self.table.store(Some(Arc::clone(&table)));
        table
    }

    fn lock_state(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock_state();
        f.debug_struct("SettingsStore")
            .field("source", &state.source)
            .field("generation", &state.generation)
            .field("loaded", &self.table.load().is_some())
            .field("primary", &self.primary.kind())
            .field("fallback", &self.fallback.kind())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{clear_context_resolver, EmbeddedResolver, ResolverKind};

    fn store(resolver: EmbeddedResolver) -> SettingsStore {
        SettingsStore::new("/settings.properties", Arc::new(resolver))
    }

    #[test]
    fn test_lazy_until_first_read() {
        let _clear = clear_context_resolver();
        let store = store(EmbeddedResolver::new().with("/settings.properties", "a.b=1"));
        assert!(store.snapshot().is_none());
        assert!(store.load_status().is_none());

        assert_eq!(store.get("a.b", "x"), "1");
        assert!(store.snapshot().is_some());
        assert_eq!(store.load_status().unwrap().generation, 1);
    }

    #[test]
    fn test_set_source_waits_for_reset() {
        let _clear = clear_context_resolver();
        let resolver = EmbeddedResolver::new()
            .with("/settings.properties", "who=first")
            .with("/other.properties", "who=second");
        let store = store(resolver);

        assert_eq!(store.get("who", "none"), "first");
        store.set_source("/other.properties");
        assert_eq!(store.source(), "/other.properties");
        assert_eq!(store.get("who", "none"), "first");

        store.reset();
        assert!(store.snapshot().is_none());
        assert_eq!(store.get("who", "none"), "second");

        let status = store.load_status().unwrap();
        assert_eq!(status.generation, 2);
        assert_eq!(status.source, "/other.properties");
        assert_eq!(status.resolved_by, Some(ResolverKind::Embedded));
        assert!(status.is_clean());
    }

    #[test]
    fn test_init_and_teardown() {
        let _clear = clear_context_resolver();
        let store = store(EmbeddedResolver::new().with("/settings.properties", "a=1\nb=2"));

        assert_eq!(store.init().len(), 2);
        assert!(Arc::ptr_eq(&store.init(), &store.snapshot().unwrap()));

        store.teardown();
        assert!(store.snapshot().is_none());
        assert!(store.load_status().is_none());
    }

    #[test]
    fn test_primary_override() {
        let _clear = clear_context_resolver();
        let store = store(EmbeddedResolver::new().with("/settings.properties", "who=fallback"))
            .with_primary(Arc::new(
                EmbeddedResolver::new().with("/settings.properties", "who=primary"),
            ));
        assert_eq!(store.get("who", "none"), "primary");
    }

    #[test]
    fn test_debug_output() {
        let store = store(EmbeddedResolver::new());
        let rendered = format!("{:?}", store);
        assert!(rendered.contains("/settings.properties"));
        assert!(rendered.contains("loaded: false"));
    }
}
