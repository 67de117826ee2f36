//! Object URL store trait definition.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use thiserror::Error;

/// Errors raised while allocating an object URL.
#[derive(Debug, Error)]
pub enum ObjectUrlError {
    /// The host refused to allocate
    #[error("object url allocation refused: {0}")]
    Refused(String),

    /// The store's internal state is unusable
    #[error("object url store is poisoned")]
    Poisoned,
}

/// Allocates transient URLs that point at binary data.
///
/// Every URL returned by [`ObjectUrlStore::create`] holds its bytes alive
/// until [`ObjectUrlStore::revoke`] is called with it.
pub trait ObjectUrlStore: Send + Sync + Debug {
    fn create(&self, bytes: &[u8], mime: &str) -> Result<String, ObjectUrlError>;

    /// Release a URL. Unknown URLs are ignored.
    fn revoke(&self, url: &str);
}

#[derive(Debug, Clone)]
struct StoredObject {
    mime: String,
    bytes: Vec<u8>,
}

/// An object URL store keeping the bytes in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryObjectStore {
    objects: Arc<Mutex<HashMap<String, StoredObject>>>,
    next: Arc<AtomicU64>,
}

impl InMemoryObjectStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of URLs allocated and not yet revoked.
    pub fn live(&self) -> usize {
        self.objects.lock().map(|objects| objects.len()).unwrap_or(0)
    }

    /// Check whether `url` is allocated and not yet revoked.
    pub fn contains(&self, url: &str) -> bool {
        self.objects
            .lock()
            .map(|objects| objects.contains_key(url))
            .unwrap_or(false)
    }

    /// The bytes behind `url`, if it is live.
    pub fn bytes(&self, url: &str) -> Option<Vec<u8>> {
        let objects = self.objects.lock().ok()?;
        objects.get(url).map(|object| object.bytes.clone())
    }

    /// The mime `url` was allocated with, if it is live.
    pub fn mime(&self, url: &str) -> Option<String> {
        let objects = self.objects.lock().ok()?;
        objects.get(url).map(|object| object.mime.clone())
    }
}

impl ObjectUrlStore for InMemoryObjectStore {
    fn create(&self, bytes: &[u8], mime: &str) -> Result<String, ObjectUrlError> {
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        let url = format!("blob:outrender/{n}");
        let mut objects = self.objects.lock().map_err(|_| ObjectUrlError::Poisoned)?;
        objects.insert(
            url.clone(),
            StoredObject {
                mime: mime.to_string(),
                bytes: bytes.to_vec(),
            },
        );
        Ok(url)
    }

    fn revoke(&self, url: &str) {
        if let Ok(mut objects) = self.objects.lock() {
            objects.remove(url);
        }
    }
}
