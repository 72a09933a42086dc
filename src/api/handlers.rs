//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint. Handlers validate
//! input, call into the cache engine and map results to response bodies.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;

use crate::cache::{CacheEngine, MemoryStore};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    validate_key, validate_member, CardinalityResponse, CountResponse, DeleteResponse,
    GetResponse, HealthResponse, IncrementResponse, RankResponse, SetRequest, SetResponse,
    SortedSetRequest, SortedSetResponse,
};

/// Application state shared across all handlers.
///
/// The engine is cheap to clone; every clone shares one store.
#[derive(Clone)]
pub struct AppState {
    /// Cache engine over the process-wide store
    pub engine: CacheEngine,
}

impl AppState {
    /// Creates a new AppState around an engine.
    pub fn new(engine: CacheEngine) -> Self {
        Self { engine }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the single store for the process and injects it into the engine.
    pub fn from_config(config: &Config) -> Self {
        let store = Arc::new(MemoryStore::new());
        Self::new(CacheEngine::new(store, config.default_ttl))
    }
}

fn check_key(key: &str) -> Result<()> {
    match validate_key(key) {
        Some(msg) => Err(CacheError::InvalidRequest(msg)),
        None => Ok(()),
    }
}

/// Handler for PUT /set
///
/// Stores a key-value pair in the cache with optional TTL.
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    state.engine.set(&req.key, req.ttl, req.value);

    Ok(Json(SetResponse::new(req.key)))
}

/// Handler for GET /get/:key
///
/// Retrieves a value from the cache by key. Expired keys are purged and
/// reported as not found.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    check_key(&key)?;

    match state.engine.get(&key) {
        Some(value) => Ok(Json(GetResponse::new(key, value))),
        None => Err(CacheError::NotFound(key)),
    }
}

/// Handler for DELETE /del/:key
///
/// Deleting an absent key is not an error; the response says whether
/// anything was removed.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<DeleteResponse>> {
    check_key(&key)?;

    let deleted = state.engine.delete(&key);
    debug!(key = %key, deleted, "delete");

    Ok(Json(DeleteResponse::new(key, deleted)))
}

/// Handler for GET /count
pub async fn count_handler(State(state): State<AppState>) -> Json<CountResponse> {
    Json(CountResponse {
        count: state.engine.count(),
    })
}

/// Handler for POST /incr/:key
///
/// Always succeeds for a valid key; absent or non-numeric values are left
/// unchanged.
pub async fn increment_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<IncrementResponse>> {
    check_key(&key)?;

    state.engine.increment(&key);

    Ok(Json(IncrementResponse { key }))
}

/// Handler for POST /zadd
pub async fn sorted_set_handler(
    State(state): State<AppState>,
    Json(req): Json<SortedSetRequest>,
) -> Result<Json<SortedSetResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    state.engine.sorted_set(&req.key, req.score, &req.member);

    Ok(Json(SortedSetResponse {
        key: req.key,
        member: req.member,
    }))
}

/// Handler for GET /zcard/:key
pub async fn sorted_cardinality_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<CardinalityResponse>> {
    check_key(&key)?;

    let cardinality = state.engine.sorted_cardinality(&key);

    Ok(Json(CardinalityResponse { key, cardinality }))
}

/// Handler for GET /zrank/:key/:member
pub async fn rank_member_handler(
    State(state): State<AppState>,
    Path((key, member)): Path<(String, String)>,
) -> Result<Json<RankResponse>> {
    check_key(&key)?;
    if let Some(error_msg) = validate_member(&member) {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let rank = state.engine.rank_member(&key, &member);

    Ok(Json(RankResponse { key, member, rank }))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> AppState {
        AppState::from_config(&Config::default())
    }

    #[tokio::test]
    async fn test_set_and_get_handler() {
        let state = test_state();

        let req = SetRequest {
            key: "test_key".to_string(),
            value: "test_value".to_string(),
            ttl: None,
        };
        let result = set_handler(State(state.clone()), Json(req)).await;
        assert!(result.is_ok());

        let response = get_handler(State(state.clone()), Path("test_key".to_string()))
            .await
            .unwrap();
        assert_eq!(response.value, "test_value");
    }

    #[tokio::test]
    async fn test_get_nonexistent_key() {
        let result = get_handler(State(test_state()), Path("nonexistent".to_string())).await;
        assert!(matches!(result, Err(CacheError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_handler_reports_flag() {
        let state = test_state();
        state.engine.set("to_delete", None, "value");

        let first = delete_handler(State(state.clone()), Path("to_delete".to_string()))
            .await
            .unwrap();
        assert!(first.deleted);

        let second = delete_handler(State(state), Path("to_delete".to_string()))
            .await
            .unwrap();
        assert!(!second.deleted);
    }

    #[tokio::test]
    async fn test_increment_and_count_handlers() {
        let state = test_state();
        state.engine.set("hits", None, "41");

        increment_handler(State(state.clone()), Path("hits".to_string()))
            .await
            .unwrap();
        increment_handler(State(state.clone()), Path("absent".to_string()))
            .await
            .unwrap();

        assert_eq!(state.engine.get("hits").as_deref(), Some("42"));
        assert_eq!(count_handler(State(state)).await.count, 1);
    }

    #[tokio::test]
    async fn test_sorted_set_handlers() {
        let state = test_state();
        for (score, member) in [(10, "ten"), (3, "three")] {
            let req = SortedSetRequest {
                key: "board".to_string(),
                score,
                member: member.to_string(),
            };
            sorted_set_handler(State(state.clone()), Json(req))
                .await
                .unwrap();
        }

        let card = sorted_cardinality_handler(State(state.clone()), Path("board".to_string()))
            .await
            .unwrap();
        assert_eq!(card.cardinality, 2);

        let rank = rank_member_handler(
            State(state),
            Path(("board".to_string(), "three".to_string())),
        )
        .await
        .unwrap();
        assert_eq!(rank.rank, 1);
    }

    #[tokio::test]
    async fn test_sorted_set_rejects_separator_in_member() {
        let req = SortedSetRequest {
            key: "board".to_string(),
            score: 1,
            member: "bad-member".to_string(),
        };
        let result = sorted_set_handler(State(test_state()), Json(req)).await;
        assert!(matches!(result, Err(CacheError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }

    #[tokio::test]
    async fn test_set_invalid_request() {
        let req = SetRequest {
            key: "".to_string(),
            value: "value".to_string(),
            ttl: None,
        };
        let result = set_handler(State(test_state()), Json(req)).await;
        assert!(result.is_err());
    }
}
