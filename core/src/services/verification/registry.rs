//! In-memory registry of the latest verification per destination

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Maps a destination phone number to the provider request id of its most
/// recent verification attempt.
///
/// Clones share the same map. Entries are overwritten on every new attempt
/// and removed only when a cancellation is tried; nothing expires them, so
/// the map grows with the number of distinct destinations seen.
///
/// The lock is held only for the duration of a single call, never across an
/// await point.
#[derive(Debug, Clone, Default)]
pub struct SessionRegistry {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the tracked request id for a destination
    pub fn get(&self, destination: &str) -> Option<String> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(destination)
            .cloned()
    }

    /// Track `request_id` for a destination, replacing any prior entry
    pub fn set(&self, destination: &str, request_id: impl Into<String>) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(destination.to_string(), request_id.into());
    }

    /// Forget a destination; no-op when absent
    pub fn remove(&self, destination: &str) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(destination);
    }

    /// Number of tracked destinations
    pub fn len(&self) -> usize {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
