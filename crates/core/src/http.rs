// HTTP plumbing shared by both services
// Decision: Any origin may call either service (no CORS restriction)
// Decision: Panics in handlers become a generic 500 JSON body

use crate::error::ApiError;
use anyhow::{Context, Result};
use axum::response::{IntoResponse, Response};
use axum::Router;
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Message returned when a handler panics.
pub const PANIC_MESSAGE: &str = "Something went wrong!";

/// CORS policy accepting requests from any origin.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin)
}

/// Fallback for unmatched routes, including known paths called with an unrouted method.
pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!(panic = %detail, "Request handler panicked");
    ApiError::internal(PANIC_MESSAGE).into_response()
}

/// Attach the fallback and the common layers to a fully-stated router.
pub fn finish_router(router: Router) -> Router {
    router
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

/// Bind `host:port` (hostnames are resolved) and serve until Ctrl-C or SIGTERM.
pub async fn serve(app: Router, addr: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to address {}", addr))?;
    let local = listener.local_addr().context("Failed to read bound address")?;
    tracing::info!("HTTP server listening on {}", local);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
