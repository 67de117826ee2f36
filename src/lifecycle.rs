//! Per-output resource lifecycle.

use std::collections::HashMap;
use std::fmt;

/// A release action for a resource allocated while rendering one output.
pub struct Disposer(Box<dyn FnOnce() + Send>);

impl Disposer {
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self(Box::new(f))
    }

    /// Run the release action.
    pub fn dispose(self) {
        (self.0)()
    }
}

impl fmt::Debug for Disposer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Disposer").finish_non_exhaustive()
    }
}

/// Disposers keyed by output identity.
///
/// Every entry stands for a resource that is allocated and not yet
/// released. Entries are removed before their disposer runs, so no
/// disposer runs twice.
#[derive(Debug, Default)]
pub struct LifecycleRegistry {
    disposers: HashMap<String, Disposer>,
}

impl LifecycleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            disposers: HashMap::new(),
        }
    }

    /// Register the disposer for `id`.
    ///
    /// An output has at most one disposer; one already held for `id` is
    /// released first.
    pub fn register(&mut self, id: impl Into<String>, disposer: Disposer) {
        let id = id.into();
        if let Some(previous) = self.disposers.remove(&id) {
            log::debug!("releasing previous resource of output {id}");
            previous.dispose();
        }
        self.disposers.insert(id, disposer);
    }

    /// Release the resource held for `id`. Returns whether there was one.
    pub fn dispose_one(&mut self, id: &str) -> bool {
        match self.disposers.remove(id) {
            Some(disposer) => {
                disposer.dispose();
                true
            }
            None => false,
        }
    }

    /// Release every held resource. Returns how many were released.
    pub fn dispose_all(&mut self) -> usize {
        let drained: Vec<(String, Disposer)> = self.disposers.drain().collect();
        let count = drained.len();
        for (_, disposer) in drained {
            disposer.dispose();
        }
        count
    }

    /// Check whether a resource is held for `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.disposers.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.disposers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disposers.is_empty()
    }
}
