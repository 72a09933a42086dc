//! Cache Store Module
//!
//! Concurrent key to entry mapping. The store owns storage only; reads never
//! filter on expiration, and the engine decides when a stale entry is purged.

use chrono::{DateTime, Utc};
use dashmap::DashMap;

use crate::cache::CacheEntry;

// == Store Trait ==
/// Storage backend consumed by the cache engine.
///
/// Every method is a single-key atomic operation and is safe to call from
/// many threads at once without external locking.
pub trait Store: Send + Sync {
    /// Inserts or fully replaces the entry stored under `key`.
    fn set(&self, key: &str, entry: CacheEntry);

    /// Returns a copy of the entry under `key`, expired or not.
    fn get(&self, key: &str) -> Option<CacheEntry>;

    /// Removes the entry under `key`, returning whether one was present.
    fn delete(&self, key: &str) -> bool;

    /// Removes the entry under `key` only if it had expired at `now`.
    ///
    /// The check and the removal are one atomic step, so an entry written
    /// after a stale read is never removed by the purge that read triggers.
    fn delete_if_expired(&self, key: &str, now: DateTime<Utc>) -> bool;

    /// Number of stored entries, including expired ones not yet purged.
    fn count(&self) -> usize;
}

// == Memory Store ==
/// In-memory store backed by a sharded concurrent hash map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Key-value storage
    entries: DashMap<String, CacheEntry>,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Store for MemoryStore {
    fn set(&self, key: &str, entry: CacheEntry) {
        self.entries.insert(key.to_string(), entry);
    }

    fn get(&self, key: &str) -> Option<CacheEntry> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    fn delete(&self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    fn delete_if_expired(&self, key: &str, now: DateTime<Utc>) -> bool {
        self.entries
            .remove_if(key, |_, entry| entry.is_expired_at(now))
            .is_some()
    }

    fn count(&self) -> usize {
        self.entries.len()
    }
}
