//! Explicit ownership of a process-wide search service.
//!
//! Applications that want a single shared [`SearchService`] hold a
//! [`SearchContext`] instead of a module-level global. The context creates
//! the service on first use and supports swapping in a replacement when the
//! underlying catalog changes. Callers holding an `Arc` to the previous
//! service keep a fully usable (if stale) instance until they re-fetch.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::search::service::SearchService;

/// Holder for at most one shared [`SearchService`].
#[derive(Debug, Default)]
pub struct SearchContext {
    service: RwLock<Option<Arc<SearchService>>>,
}

impl SearchContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current service, creating it with `init` if none exists yet.
    ///
    /// First call wins: if a service is already installed, `init` is not run.
    pub fn get_or_init<F>(&self, init: F) -> Arc<SearchService>
    where
        F: FnOnce() -> SearchService,
    {
        if let Some(service) = self.service.read().as_ref() {
            return Arc::clone(service);
        }

        let mut guard = self.service.write();
        // Another caller may have installed a service between the locks.
        if let Some(service) = guard.as_ref() {
            return Arc::clone(service);
        }

        let service = Arc::new(init());
        *guard = Some(Arc::clone(&service));
        service
    }

    /// Discard the current service and install one over a new catalog.
    ///
    /// Previously handed-out `Arc`s remain valid and keep searching the old
    /// catalog.
    pub fn replace(&self, service: SearchService) -> Arc<SearchService> {
        let service = Arc::new(service);
        *self.service.write() = Some(Arc::clone(&service));
        service
    }

    /// The currently installed service, if any.
    pub fn current(&self) -> Option<Arc<SearchService>> {
        self.service.read().clone()
    }

    /// Remove the installed service.
    pub fn clear(&self) {
        *self.service.write() = None;
    }
}
