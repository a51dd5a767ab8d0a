//! Cache Store Module
//!
//! HashMap-backed keyed storage with TTL expiration. The store holds no
//! lock of its own; callers sharing one across tasks wrap it in
//! `Arc<RwLock<_>>` so the expiry-check-and-delete inside `get` stays
//! atomic.

use std::collections::HashMap;
use std::time::Duration;

use tracing::debug;

use crate::cache::{CacheEntry, DEFAULT_TTL};

// == Cache Store ==
/// Keyed TTL cache, generic over the payload type.
///
/// Every operation is total: `set` always succeeds and overwrites,
/// `get` treats expired entries as absent and removes them on the way
/// out, `clear` on a missing key is a no-op.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// TTL used when `set` is called without one
    default_ttl: Duration,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty store with the given default TTL.
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            default_ttl,
        }
    }

    // == Set ==
    /// Stores `value` under `key`, expiring `ttl` from now.
    ///
    /// An existing entry for the key is overwritten unconditionally and
    /// its deadline reset; there is no merging. Falls back to the store's
    /// default TTL when `ttl` is `None`.
    pub fn set(&mut self, key: impl Into<String>, value: V, ttl: Option<Duration>) {
        let key = key.into();
        let ttl = ttl.unwrap_or(self.default_ttl);
        debug!("Caching key '{}' for {}s", key, ttl.as_secs());
        self.entries.insert(key, CacheEntry::new(value, ttl));
    }

    // == Get ==
    /// Retrieves the value for `key` if present and not expired.
    ///
    /// An expired entry is removed as a side effect (self-cleaning), so
    /// the live-entry count visibly shrinks rather than carrying dead
    /// weight until the next overwrite.
    pub fn get(&mut self, key: &str) -> Option<V> {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.entries.remove(key);
                None
            }
            Some(entry) => Some(entry.value.clone()),
            None => None,
        }
    }

    // == Clear ==
    /// Removes the entry for `key`. No-op if the key is absent.
    pub fn clear(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            debug!("Invalidated cache key '{}'", key);
        }
    }

    // == Clear All ==
    /// Removes every entry, expired or not.
    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    // == Purge Expired ==
    /// Removes all expired entries and returns how many were dropped.
    ///
    /// Purely an optimization over lazy eviction; `get` never observes
    /// the difference.
    pub fn purge_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        before - self.entries.len()
    }

    // == Length ==
    /// Number of entries currently held, including not-yet-read expired ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Clone> Default for CacheStore<V> {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}
