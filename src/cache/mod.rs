//! Cache Module
//!
//! Provides the in-memory cache: a concurrent store, lazy TTL expiry,
//! integer increments and a sorted-set emulation encoded in string values.

mod engine;
mod entry;
pub mod sorted;
mod store;


// Re-export public types
pub use engine::CacheEngine;
pub use entry::CacheEntry;
pub use store::{MemoryStore, Store};

// == Public Constants ==
/// Lifetime in seconds for entries written without an explicit TTL
pub const DEFAULT_TTL_SECONDS: u64 = 3600;

/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;
