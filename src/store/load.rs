//! One load attempt: resolve, parse, close.
//!
//! The routine never fails. Whatever went wrong is carried in the returned
//! `LoadOutcome` and logged by the store.

use std::io;
use std::sync::Arc;
use thiserror::Error;
use crate::properties::{Properties, PropertiesError};
use crate::resource::{ResolverKind, ResourceResolver};

/// A failure swallowed during a load.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The stream failed or held malformed content.
    #[error("could not read '{location}': {source}")]
    Read {
        location: String,
        #[source]
        source: PropertiesError,
    },

    /// The stream could not be released.
    #[error("could not close stream for '{location}': {source}")]
    Close {
        location: String,
        #[source]
        source: io::Error,
    },
}

/// Diagnostic record of the most recent load.
#[derive(Debug, Clone)]
pub struct LoadStatus {
    /// Counts completed loads since the store was created.
    pub generation: u64,
    pub source: String,
    /// `None` when no resolver found the source.
    pub resolved_by: Option<ResolverKind>,
    pub entries: usize,
    /// The error of record: a read failure wins over a close failure.
    pub error: Option<Arc<LoadError>>,
}

impl LoadStatus {
    pub fn is_clean(&self) -> bool {
        self.resolved_by.is_some() && self.error.is_none()
    }
}

/// Result of a single load attempt.
#[derive(Debug)]
pub(crate) struct LoadOutcome {
    pub table: Properties,
    pub resolved_by: Option<ResolverKind>,
    pub read_error: Option<LoadError>,
    pub close_error: Option<LoadError>,
}

impl LoadOutcome {
    /// Metrics label for this outcome.
    pub fn label(&self) -> &'static str {
        if self.resolved_by.is_none() {
            "not_found"
        } else if self.read_error.is_some() {
            "read_failed"
        } else if self.close_error.is_some() {
            "close_failed"
        } else {
            "loaded"
        }
    }

    /// Emit log events for this outcome.
    ///
    /// A read failure is logged at `warn`. A close failure is logged at
    /// `warn` only when it is the sole failure, otherwise at `debug`.
    pub fn log(&self, location: &str) {
        match self.resolved_by {
            Some(kind) => tracing::debug!(
                location,
                resolver = %kind,
                entries = self.table.len(),
                "Settings loaded"
            ),
            None => tracing::debug!(location, "Settings resource not found, using defaults"),
        }

        if let Some(e) = &self.read_error {
            tracing::warn!(location, "Could not read settings from '{}'", location);
            tracing::debug!(location, error = %e, "Exception while reading settings");
        }

        if let Some(e) = &self.close_error {
            if self.read_error.is_some() {
                tracing::debug!(location, error = %e, "Closing settings stream also failed");
            } else {
                tracing::warn!(location, "Could not close the settings stream for '{}'", location);
                tracing::debug!(location, error = %e, "Exception while closing settings stream");
            }
        }
    }

    /// Split into the table and the error of record.
    pub fn into_parts(self) -> (Properties, Option<LoadError>) {
        (self.table, self.read_error.or(self.close_error))
    }
}

/// Resolve `location` via `primary`, then `fallback`, and parse it.
pub(crate) fn load(
    primary: &dyn ResourceResolver,
    fallback: &dyn ResourceResolver,
    location: &str,
) -> LoadOutcome {
    let mut outcome = LoadOutcome {
        table: Properties::new(),
        resolved_by: None,
        read_error: None,
        close_error: None,
    };

    let resolved = primary
        .open(location)
        .map(|stream| (primary.kind(), stream))
        .or_else(|| fallback.open(location).map(|stream| (fallback.kind(), stream)));

    let Some((kind, mut stream)) = resolved else {
        return outcome;
    };
    outcome.resolved_by = Some(kind);

    if let Err(source) = outcome.table.load(&mut stream) {
        outcome.read_error = Some(LoadError::Read {
            location: location.to_string(),
            source,
        });
    }

    if let Err(source) = stream.close() {
        outcome.close_error = Some(LoadError::Close {
            location: location.to_string(),
            source,
        });
    }

    outcome
}
