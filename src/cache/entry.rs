//! Cache Entry Module
//!
//! Defines the unit of storage: a string payload plus an absolute UTC deadline.

use chrono::{DateTime, Duration, Utc};

// == Cache Entry ==
/// Represents a single cache entry with value and expiration deadline.
///
/// The payload is always a plain string, whether it came from `set`, from an
/// increment, or from the sorted-set encoding. There is deliberately no richer
/// value type: sorted-set cardinality is the raw segment count of this string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// The stored value
    pub value: String,
    /// Absolute UTC timestamp after which the entry is logically gone
    pub expires_at: DateTime<Utc>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry that expires `ttl_seconds` from now.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `ttl_seconds` - Lifetime in seconds, measured from the current instant.
    ///   A negative lifetime yields an entry that is already expired.
    pub fn new(value: impl Into<String>, ttl_seconds: i64) -> Self {
        Self::with_expiry(value, deadline_from_now(ttl_seconds))
    }

    /// Creates a cache entry with an explicit expiration timestamp.
    pub fn with_expiry(value: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            value: value.into(),
            expires_at,
        }
    }

    // == Is Expired ==
    /// Checks if the entry had expired at `now`.
    ///
    /// Boundary condition: an entry is expired only when its deadline is
    /// strictly before `now`. An entry read at exactly `expires_at` is live.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }

    /// Checks if the entry has expired against the current clock.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    // == Time To Live ==
    /// Returns remaining lifetime in whole seconds, saturating at 0.
    pub fn ttl_remaining(&self) -> u64 {
        let remaining = self.expires_at.signed_duration_since(Utc::now());
        remaining.num_seconds().max(0) as u64
    }
}

// == Utility Functions ==
/// Returns the deadline `ttl_seconds` from now.
///
/// Negative TTLs produce a deadline in the past. TTLs outside chrono's range
/// clamp to the earliest or latest representable instant.
pub fn deadline_from_now(ttl_seconds: i64) -> DateTime<Utc> {
    let bound = if ttl_seconds < 0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    };
    Duration::try_seconds(ttl_seconds)
        .and_then(|ttl| Utc::now().checked_add_signed(ttl))
        .unwrap_or(bound)
}
