//! Sorted KV - An in-memory key-value cache server
//!
//! Offers get/set with lazy TTL expiry, integer increments and a minimal
//! sorted-set emulation, exposed over HTTP.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::{create_router, AppState};
pub use cache::{CacheEngine, MemoryStore, Store};
pub use config::Config;
