use dashmap::DashMap;
use std::sync::Arc;

/// The service's only record of which short key points where.
///
/// There is no database behind it: an entry exists from the shorten request
/// that wrote it until the process exits, and a later write under the same
/// key replaces it. Requests on every worker thread share one DashMap through
/// the `Arc`, so handlers take a `&LinkStore` without extra locking.
#[derive(Clone, Debug)]
pub struct LinkStore {
    inner: Arc<DashMap<String, String>>,
}

impl LinkStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(DashMap::new()),
        }
    }

    /// Insert a mapping, returning the destination it replaced, if any.
    pub fn insert(
        &self,
        short_key: impl Into<String>,
        destination: impl Into<String>,
    ) -> Option<String> {
        self.inner.insert(short_key.into(), destination.into())
    }

    /// Look up a short key. Returns a clone of the destination if present.
    pub fn get(&self, short_key: &str) -> Option<String> {
        self.inner.get(short_key).map(|v| v.clone())
    }

    /// Number of stored mappings.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Default for LinkStore {
    fn default() -> Self {
        Self::new()
    }
}
