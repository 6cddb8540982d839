// Liveness endpoint

use axum::{routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const SERVICE_NAME: &str = "multiapp-events";

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    #[schema(example = "multiapp-events")]
    pub service: String,
    pub timestamp: DateTime<Utc>,
}

pub fn routes() -> Router {
    Router::new().route("/health", get(health))
}

/// GET /health - The service is up
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        timestamp: Utc::now(),
    })
}
