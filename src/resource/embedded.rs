//! In-memory resources.

use std::collections::HashMap;
use std::io::{self, Cursor, Read};
use std::sync::Arc;
use crate::resource::{ResolverKind, ResourceResolver, ResourceStream};

/// Serves resources from memory, keyed by exact location.
///
/// Suited to files compiled into the binary:
/// ```
/// use settings_store::resource::EmbeddedResolver;
///
/// let resolver = EmbeddedResolver::new()
///     .with("/settings.properties", &b"app.name=demo\n"[..]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmbeddedResolver {
    resources: HashMap<String, Arc<[u8]>>,
}

impl EmbeddedResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource, replacing any previous one at `location`.
    pub fn with(mut self, location: impl Into<String>, bytes: impl AsRef<[u8]>) -> Self {
        self.insert(location, bytes);
        self
    }

    pub fn insert(&mut self, location: impl Into<String>, bytes: impl AsRef<[u8]>) {
        self.resources.insert(location.into(), Arc::from(bytes.as_ref()));
    }
}

impl ResourceResolver for EmbeddedResolver {
    fn kind(&self) -> ResolverKind {
        ResolverKind::Embedded
    }

    fn open(&self, location: &str) -> Option<Box<dyn ResourceStream>> {
        let bytes = self.resources.get(location)?.clone();
        Some(Box::new(MemoryStream { cursor: Cursor::new(bytes) }))
    }
}

struct MemoryStream {
    cursor: Cursor<Arc<[u8]>>,
}

impl Read for MemoryStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.cursor.read(buf)
    }
}

impl ResourceStream for MemoryStream {
    fn close(self: Box<Self>) -> io::Result<()> {
        Ok(())
    }
}
