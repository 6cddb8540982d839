// Cache pass-through HTTP routes

use crate::cache::CACHE_TTL;
use crate::state::GatewayState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use multiapp_core::{ApiError, ErrorResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const KEY_NOT_FOUND_MESSAGE: &str = "Key not found";
pub const CACHE_FAILED_MESSAGE: &str = "Redis operation failed";
pub const CACHE_SET_MESSAGE: &str = "Cache set successfully";

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CacheEntry {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CacheSetResponse {
    pub message: String,
    pub key: String,
    pub value: String,
}

pub fn routes(state: GatewayState) -> Router {
    Router::new()
        .route("/api/cache/:key", get(get_cache))
        .route("/api/cache/:key/:value", post(set_cache))
        .with_state(state)
}

/// GET /api/cache/{key} - Read a cached value
#[utoipa::path(
    get,
    path = "/api/cache/{key}",
    params(
        ("key" = String, Path, description = "Cache key")
    ),
    responses(
        (status = 200, description = "Key found", body = CacheEntry),
        (status = 404, description = "Key not found", body = ErrorResponse),
        (status = 500, description = "Cache unreachable", body = ErrorResponse)
    ),
    tag = "cache"
)]
pub async fn get_cache(
    State(state): State<GatewayState>,
    Path(key): Path<String>,
) -> Result<Json<CacheEntry>, ApiError> {
    let value = state.cache.get(&key).await.map_err(|e| {
        tracing::error!(key = %key, error = %e, "Cache get failed");
        ApiError::dependency(CACHE_FAILED_MESSAGE)
    })?;

    match value {
        Some(value) => Ok(Json(CacheEntry { key, value })),
        None => Err(ApiError::not_found(KEY_NOT_FOUND_MESSAGE)),
    }
}

/// POST /api/cache/{key}/{value} - Write a value with a one hour expiry
#[utoipa::path(
    post,
    path = "/api/cache/{key}/{value}",
    params(
        ("key" = String, Path, description = "Cache key"),
        ("value" = String, Path, description = "Value to store")
    ),
    responses(
        (status = 200, description = "Value stored", body = CacheSetResponse),
        (status = 500, description = "Cache unreachable", body = ErrorResponse)
    ),
    tag = "cache"
)]
pub async fn set_cache(
    State(state): State<GatewayState>,
    Path((key, value)): Path<(String, String)>,
) -> Result<Json<CacheSetResponse>, ApiError> {
    state
        .cache
        .set_with_expiry(&key, &value, CACHE_TTL)
        .await
        .map_err(|e| {
            tracing::error!(key = %key, error = %e, "Cache set failed");
            ApiError::dependency(CACHE_FAILED_MESSAGE)
        })?;

    tracing::debug!(key = %key, ttl_secs = CACHE_TTL.as_secs(), "Cache value set");

    Ok(Json(CacheSetResponse {
        message: CACHE_SET_MESSAGE.to_string(),
        key,
        value,
    }))
}
