//! Resolution of virtual paths under a directory root.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Component, Path, PathBuf};
use crate::resource::{ResolverKind, ResourceResolver, ResourceStream};

/// Maps `/a/b.properties` onto `<root>/a/b.properties`.
#[derive(Debug, Clone)]
pub struct DirectoryResolver {
    root: PathBuf,
}

impl DirectoryResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve `location` to a path under the root.
    ///
    /// A leading `/` is treated as the root itself; `..`, drive prefixes
    /// and empty locations are refused.
    pub fn resolve(&self, location: &str) -> Option<PathBuf> {
        let relative = Path::new(location.trim_start_matches('/'));
        let mut path = self.root.clone();
        let mut pushed = false;
        for component in relative.components() {
            match component {
                Component::Normal(part) => {
                    path.push(part);
                    pushed = true;
                }
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
            }
        }
        pushed.then_some(path)
    }
}

impl ResourceResolver for DirectoryResolver {
    fn kind(&self) -> ResolverKind {
        ResolverKind::Directory
    }

    fn open(&self, location: &str) -> Option<Box<dyn ResourceStream>> {
        let path = self.resolve(location)?;
        match File::open(&path) {
            Ok(file) => Some(Box::new(FileStream { file })),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "Resource exists but could not be opened");
                None
            }
        }
    }
}

struct FileStream {
    file: File,
}

impl Read for FileStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

impl ResourceStream for FileStream {
    fn close(self: Box<Self>) -> io::Result<()> {
        drop(self.file);
        Ok(())
    }
}
