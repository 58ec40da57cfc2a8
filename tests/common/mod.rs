//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::io::{self, Cursor, Read};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use settings_store::resource::{EmbeddedResolver, ResolverKind, ResourceResolver, ResourceStream};

/// Directory holding `settings.properties`.
pub fn resource_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources")
}

pub const EXISTING_KEY_1: &str = "a.b";
pub const EXISTING_VALUE_1: &str = "Some value";
pub const EXISTING_KEY_2: &str = "a.other.key";
pub const EXISTING_VALUE_2: &str = "Some other value.";

/// A stream whose reads always fail.
pub struct NonReadingStream;

impl Read for NonReadingStream {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "this stream cannot be read"))
    }
}

impl ResourceStream for NonReadingStream {
    fn close(self: Box<Self>) -> io::Result<()> {
        Ok(())
    }
}

/// A stream that reads normally but fails to close.
pub struct NonClosingStream {
    inner: Cursor<Vec<u8>>,
}

impl NonClosingStream {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self { inner: Cursor::new(bytes.into()) }
    }
}

impl Read for NonClosingStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl ResourceStream for NonClosingStream {
    fn close(self: Box<Self>) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::Other, "this stream cannot be closed"))
    }
}

/// Hands out streams built by a closure, whatever the location.
pub struct InterceptingResolver<F> {
    make: F,
}

impl<F> InterceptingResolver<F>
where
    F: Fn() -> Box<dyn ResourceStream> + Send + Sync,
{
    pub fn new(make: F) -> Self {
        Self { make }
    }
}

impl<F> ResourceResolver for InterceptingResolver<F>
where
    F: Fn() -> Box<dyn ResourceStream> + Send + Sync,
{
    fn kind(&self) -> ResolverKind {
        ResolverKind::Custom("intercepting")
    }

    fn open(&self, _location: &str) -> Option<Box<dyn ResourceStream>> {
        Some((self.make)())
    }
}

/// Counts `open` calls and stalls each one to widen race windows.
pub struct CountingResolver {
    inner: EmbeddedResolver,
    opens: Arc<AtomicUsize>,
    delay: Duration,
}

impl CountingResolver {
    pub fn new(inner: EmbeddedResolver, delay: Duration) -> (Self, Arc<AtomicUsize>) {
        let opens = Arc::new(AtomicUsize::new(0));
        (Self { inner, opens: opens.clone(), delay }, opens)
    }
}

impl ResourceResolver for CountingResolver {
    fn kind(&self) -> ResolverKind {
        ResolverKind::Custom("counting")
    }

    fn open(&self, location: &str) -> Option<Box<dyn ResourceStream>> {
        self.opens.fetch_add(1, Ordering::SeqCst);
        std::thread::sleep(self.delay);
        self.inner.open(location)
    }
}
