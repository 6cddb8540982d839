// Service banner and composite health probe
// Decision: /health always answers 200; dependency failures only change their own field

use crate::error::DependencyError;
use crate::state::GatewayState;
use axum::{extract::State, routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use utoipa::ToSchema;

pub const SERVICE_NAME: &str = "multiapp-gateway";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Status of the gateway process itself; always "healthy" when it answers.
    pub status: ComponentStatus,
    pub database: ComponentStatus,
    pub redis: ComponentStatus,
    #[schema(example = "multiapp-gateway")]
    pub service: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
    pub language: String,
    pub framework: String,
    pub version: String,
}

pub fn routes(state: GatewayState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .with_state(state)
}

/// GET / - Service banner
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service banner", body = RootResponse)
    ),
    tag = "health"
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Hello from Rust axum API!".to_string(),
        language: "Rust".to_string(),
        framework: "axum".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /health - Gateway and dependency status
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Composite status; dependencies may be unhealthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health(State(state): State<GatewayState>) -> Json<HealthResponse> {
    let timeout = state.health_check_timeout;
    let (database, redis) = tokio::join!(
        check("database", timeout, state.database.ping()),
        check("redis", timeout, state.cache.ping()),
    );

    Json(HealthResponse {
        status: ComponentStatus::Healthy,
        database,
        redis,
        service: SERVICE_NAME.to_string(),
        timestamp: Utc::now(),
    })
}

/// Run one dependency check, bounded by `timeout`. Never fails.
async fn check<F>(component: &'static str, timeout: Duration, probe: F) -> ComponentStatus
where
    F: Future<Output = Result<(), DependencyError>>,
{
    let result = match tokio::time::timeout(timeout, probe).await {
        Ok(result) => result,
        Err(_) => Err(DependencyError::Timeout {
            component,
            elapsed: timeout,
        }),
    };

    match result {
        Ok(()) => ComponentStatus::Healthy,
        Err(e) => {
            tracing::error!(component, error = %e, "Health check failed");
            ComponentStatus::Unhealthy
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_check_healthy() {
        let status = check("database", Duration::from_secs(1), async { Ok(()) }).await;
        assert_eq!(status, ComponentStatus::Healthy);
    }

    #[tokio::test]
    async fn test_check_error_is_unhealthy() {
        let status = check("redis", Duration::from_secs(1), async {
            Err(DependencyError::unavailable("redis", "connection refused"))
        })
        .await;
        assert_eq!(status, ComponentStatus::Unhealthy);
    }

    #[tokio::test(start_paused = true)]
    async fn test_check_timeout_is_unhealthy() {
        let status = check("database", Duration::from_millis(50), async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(())
        })
        .await;
        assert_eq!(status, ComponentStatus::Unhealthy);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(ComponentStatus::Unhealthy).unwrap(),
            "unhealthy"
        );
    }
}
