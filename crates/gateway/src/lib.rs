// Multiapp gateway service
//
// Serves a constant product catalog, proxies get/set-with-expiry to a
// key/value cache, and reports database and cache reachability. Holds no
// domain state of its own.

pub mod api;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod database;
pub mod error;
pub mod openapi;
pub mod state;

use axum::Router;
use openapi::ApiDoc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use error::DependencyError;
pub use state::GatewayState;

/// Full application router: banner, health, products, cache, Swagger UI and common layers.
pub fn router(state: GatewayState) -> Router {
    let app = Router::new()
        .merge(api::health::routes(state.clone()))
        .merge(api::products::routes())
        .merge(api::cache::routes(state))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()));

    multiapp_core::http::finish_router(app)
}
