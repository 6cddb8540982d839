// Multiapp events service
// Decision: Library + thin binary so tests drive the full router in-process
//
// An ordered in-memory collection of events with list/get/create/replace/delete
// over HTTP/JSON. State is seeded at startup and lost at shutdown.

pub mod api;
pub mod models;
pub mod openapi;
pub mod services;
pub mod storage;

use axum::Router;
use openapi::ApiDoc;
use services::EventService;
use std::sync::Arc;
use storage::EventStore;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use api::events::AppState;

impl AppState {
    /// State over the three seeded events
    pub fn seeded() -> Self {
        Self::new(Arc::new(EventService::new(Arc::new(EventStore::seeded()))))
    }
}

/// Full application router: health, event routes, Swagger UI and common layers.
pub fn router(state: AppState) -> Router {
    let app = Router::new()
        .merge(api::health::routes())
        .merge(api::events::routes(state))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()));

    multiapp_core::http::finish_router(app)
}
