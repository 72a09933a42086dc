//! API Routes
//!
//! Configures the Axum router with all cache server endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    count_handler, delete_handler, get_handler, health_handler, increment_handler,
    rank_member_handler, set_handler, sorted_cardinality_handler, sorted_set_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `PUT /set` - Store a key-value pair
/// - `GET /get/:key` - Retrieve a value by key
/// - `DELETE /del/:key` - Delete a key
/// - `GET /count` - Number of stored entries
/// - `POST /incr/:key` - Increment an integer value
/// - `POST /zadd` - Append a scored member to a sorted set
/// - `GET /zcard/:key` - Sorted-set cardinality
/// - `GET /zrank/:key/:member` - Insertion rank of a member
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/set", put(set_handler))
        .route("/get/:key", get(get_handler))
        .route("/del/:key", delete(delete_handler))
        .route("/count", get(count_handler))
        .route("/incr/:key", post(increment_handler))
        .route("/zadd", post(sorted_set_handler))
        .route("/zcard/:key", get(sorted_cardinality_handler))
        .route("/zrank/:key/:member", get(rank_member_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
