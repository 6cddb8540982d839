// OpenAPI specification generation
//
// Shared by the server (Swagger UI) and the export-events-openapi binary.

use crate::api;
use crate::models::{Event, EventPayload};
use multiapp_core::{ErrorResponse, MessageResponse};
use utoipa::OpenApi;

/// OpenAPI documentation for the events service
#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health,
        api::events::list_events,
        api::events::get_event,
        api::events::create_event,
        api::events::update_event,
        api::events::delete_event,
    ),
    components(
        schemas(
            Event, EventPayload,
            api::health::HealthResponse,
            ErrorResponse, MessageResponse,
        )
    ),
    tags(
        (name = "events", description = "Event collection endpoints"),
        (name = "health", description = "Liveness endpoint")
    ),
    info(
        title = "Multiapp Events API",
        version = "0.1.0",
        description = "In-memory event collection with CRUD endpoints",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Pretty-printed OpenAPI JSON
    pub fn to_json() -> String {
        Self::openapi()
            .to_pretty_json()
            .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_event_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/events"));
        assert!(doc.paths.paths.contains_key("/api/events/{id}"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
