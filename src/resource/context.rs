//! Thread-scoped context resolver.
//!
//! Each thread may install one resolver. Loads running on that thread try
//! it before the store's own resolver.

use std::cell::RefCell;
use std::sync::Arc;
use crate::resource::{ResolverKind, ResourceResolver, ResourceStream};

thread_local! {
    static CONTEXT: RefCell<Option<Arc<dyn ResourceResolver>>> = const { RefCell::new(None) };
}

/// Install `resolver` as this thread's context resolver.
///
/// The previous resolver is restored when the returned guard drops.
pub fn set_context_resolver(resolver: Arc<dyn ResourceResolver>) -> ContextGuard {
    let previous = CONTEXT.with(|slot| slot.borrow_mut().replace(resolver));
    ContextGuard { previous }
}

/// Remove this thread's context resolver until the guard drops.
pub fn clear_context_resolver() -> ContextGuard {
    let previous = CONTEXT.with(|slot| slot.borrow_mut().take());
    ContextGuard { previous }
}

/// The resolver currently installed on this thread.
pub fn current_context_resolver() -> Option<Arc<dyn ResourceResolver>> {
    CONTEXT.with(|slot| slot.borrow().clone())
}

/// Restores the previously installed context resolver on drop.
#[must_use = "dropping the guard immediately restores the previous resolver"]
pub struct ContextGuard {
    previous: Option<Arc<dyn ResourceResolver>>,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        let previous = self.previous.take();
        CONTEXT.with(|slot| *slot.borrow_mut() = previous);
    }
}

/// Delegates to the calling thread's context resolver, if any.
#[derive(Debug, Default, Clone, Copy)]
pub struct ContextResolver;

impl ResourceResolver for ContextResolver {
    fn kind(&self) -> ResolverKind {
        ResolverKind::Context
    }

    fn open(&self, location: &str) -> Option<Box<dyn ResourceStream>> {
        // Clone out of the slot so the borrow isn't held while the
        // installed resolver runs.
        let resolver = current_context_resolver()?;
        resolver.open(location)
    }
}
