//! Cache Engine Module
//!
//! Implements the cache operations on top of a [`Store`]: plain get/set,
//! delete, count, integer increment and the sorted-set emulation.
//!
//! Expiry is lazy. No background task sweeps the store; a read that finds a
//! stale entry deletes it and reports the key as absent. Until such a read
//! happens, [`CacheEngine::count`] still includes the stale entry.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use crate::cache::{sorted, CacheEntry, MemoryStore, Store, DEFAULT_TTL_SECONDS};

// == Cache Engine ==
/// Domain operations over a shared store.
///
/// `increment` and `sorted_set` read, compute and write back in separate
/// steps. A writer racing on the same key between those steps can cause a
/// lost update; single-key store operations are still atomic.
pub struct CacheEngine<S = MemoryStore> {
    store: Arc<S>,
    default_ttl: u64,
}

impl<S> Clone for CacheEngine<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            default_ttl: self.default_ttl,
        }
    }
}

impl<S: Store> CacheEngine<S> {
    // == Constructor ==
    /// Creates an engine over `store` using `default_ttl` seconds for
    /// entries written without an explicit TTL.
    pub fn new(store: Arc<S>, default_ttl: u64) -> Self {
        Self { store, default_ttl }
    }

    /// Creates an engine with the standard one hour default TTL.
    pub fn with_default_ttl(store: Arc<S>) -> Self {
        Self::new(store, DEFAULT_TTL_SECONDS)
    }

    /// Default TTL in seconds.
    pub fn default_ttl(&self) -> u64 {
        self.default_ttl
    }

    fn default_ttl_secs(&self) -> i64 {
        i64::try_from(self.default_ttl).unwrap_or(i64::MAX)
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    // == Set ==
    /// Stores `value` under `key`, replacing any previous entry.
    ///
    /// The entry expires `ttl_seconds` from now, or after the default TTL.
    /// A negative TTL stores an entry that is already expired.
    pub fn set(&self, key: &str, ttl_seconds: Option<i64>, value: impl Into<String>) {
        let ttl = ttl_seconds.unwrap_or_else(|| self.default_ttl_secs());
        self.store.set(key, CacheEntry::new(value, ttl));
    }

    // == Get ==
    /// Returns the stored value, or `None` when absent or expired.
    pub fn get(&self, key: &str) -> Option<String> {
        self.live_entry(key).map(|entry| entry.value)
    }

    // == Delete ==
    /// Removes `key` whether or not it has expired.
    pub fn delete(&self, key: &str) -> bool {
        self.store.delete(key)
    }

    // == Count ==
    /// Raw store size, including expired entries no read has purged yet.
    pub fn count(&self) -> usize {
        self.store.count()
    }

    // == Increment ==
    /// Adds one to an integer value, keeping its original expiration.
    ///
    /// Absent keys and non-integer values are left untouched. An increment
    /// that would overflow is skipped the same way.
    pub fn increment(&self, key: &str) {
        let Some(entry) = self.live_entry(key) else {
            return;
        };

        let next = entry
            .value
            .parse::<i64>()
            .ok()
            .and_then(|current| current.checked_add(1));

        match next {
            Some(next) => {
                self.store
                    .set(key, CacheEntry::with_expiry(next.to_string(), entry.expires_at));
            }
            None => debug!(key, "increment skipped: value is not an integer"),
        }
    }

    // == Sorted Set ==
    /// Appends a `score-member` pair to the set under `key`.
    ///
    /// Every append resets the key's lifetime to the default TTL.
    pub fn sorted_set(&self, key: &str, score: i64, member: &str) {
        let existing = self
            .live_entry(key)
            .map(|entry| entry.value)
            .unwrap_or_default();

        let encoded = sorted::append_pair(&existing, score, member);
        debug!(key, score, member, "appended sorted-set pair");
        self.store.set(key, CacheEntry::new(encoded, self.default_ttl_secs()));
    }

    // == Sorted Cardinality ==
    /// Number of encoded pairs under `key`, or 0 when absent.
    pub fn sorted_cardinality(&self, key: &str) -> usize {
        self.live_entry(key)
            .map(|entry| sorted::cardinality(&entry.value))
            .unwrap_or(0)
    }

    // == Rank Member ==
    /// Insertion position of the first pair naming `member`.
    ///
    /// Returns `-1` when the key is absent or no pair matches.
    pub fn rank_member(&self, key: &str, member: &str) -> i64 {
        self.live_entry(key)
            .and_then(|entry| sorted::rank_of(&entry.value, member))
            .and_then(|rank| i64::try_from(rank).ok())
            .unwrap_or(-1)
    }

    // == Lazy Expiry ==
    /// Reads `key`, purging it first if its deadline has passed.
    ///
    /// The purge re-checks expiry inside the store, so a concurrent `set`
    /// landing after the stale read survives.
    fn live_entry(&self, key: &str) -> Option<CacheEntry> {
        let entry = self.store.get(key)?;
        let now = Utc::now();

        if entry.is_expired_at(now) {
            let purged = self.store.delete_if_expired(key, now);
            debug!(key, expired_at = %entry.expires_at, purged, "expired entry read");
            return None;
        }

        Some(entry)
    }
}
