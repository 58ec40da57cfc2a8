//! Resource resolution.
//!
//! # Responsibilities
//! - Turn a location string (e.g. `/settings.properties`) into a readable,
//!   explicitly closable byte stream
//! - Provide the thread-scoped context slot consulted first on every load
//!
//! # Resolvers
//! - `ContextResolver`: whatever resolver the current thread has installed
//! - `DirectoryResolver`: virtual paths mapped under a root directory
//! - `EmbeddedResolver`: in-memory blobs, e.g. `include_bytes!` resources

pub mod context;
pub mod directory;
pub mod embedded;

use std::fmt;
use std::io::Read;

pub use context::{
    clear_context_resolver, current_context_resolver, set_context_resolver, ContextGuard,
    ContextResolver,
};
pub use directory::DirectoryResolver;
pub use embedded::EmbeddedResolver;

/// A byte stream whose release can itself fail.
pub trait ResourceStream: Read + Send {
    /// Release the stream.
    fn close(self: Box<Self>) -> std::io::Result<()>;
}

/// Strategy for opening a resource by location.
pub trait ResourceResolver: Send + Sync {
    fn kind(&self) -> ResolverKind;

    /// Open `location`, or `None` if this resolver cannot find it.
    fn open(&self, location: &str) -> Option<Box<dyn ResourceStream>>;
}

/// Which strategy produced a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverKind {
    Context,
    Directory,
    Embedded,
    Custom(&'static str),
}

impl fmt::Display for ResolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolverKind::Context => write!(f, "context"),
            ResolverKind::Directory => write!(f, "directory"),
            ResolverKind::Embedded => write!(f, "embedded"),
            ResolverKind::Custom(name) => write!(f, "{}", name),
        }
    }
}
