//! API Module
//!
//! HTTP handlers and routing for the cache server REST API. Input
//! validation and status-code mapping live here, outside the cache engine.

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
