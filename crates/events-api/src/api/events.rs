// Event CRUD HTTP routes

use crate::models::{Event, EventId, EventPayload};
use crate::services::EventService;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use multiapp_core::{ApiError, ErrorResponse, MessageResponse};
use serde_json::Value;
use std::sync::Arc;

pub const INVALID_ID_MESSAGE: &str = "Invalid event ID";
pub const DELETED_MESSAGE: &str = "Event deleted successfully";

/// App state for event routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<EventService>,
}

impl AppState {
    pub fn new(service: Arc<EventService>) -> Self {
        Self { service }
    }
}

/// Create event routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/events", get(list_events).post(create_event))
        .route(
            "/api/events/:id",
            get(get_event).put(update_event).delete(delete_event),
        )
        .with_state(state)
}

fn event_id(path: Result<Path<EventId>, PathRejection>) -> Result<EventId, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|_| ApiError::validation(INVALID_ID_MESSAGE))
}

fn json_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, ApiError> {
    body.map(|Json(value)| value).map_err(ApiError::from)
}

/// GET /api/events - List all events in insertion order
#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "All events", body = Vec<Event>)
    ),
    tag = "events"
)]
pub async fn list_events(State(state): State<AppState>) -> Json<Vec<Event>> {
    Json(state.service.list())
}

/// GET /api/events/{id} - Get event by ID
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    params(
        ("id" = i64, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event found", body = Event),
        (status = 400, description = "Invalid event ID", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse)
    ),
    tag = "events"
)]
pub async fn get_event(
    State(state): State<AppState>,
    id: Result<Path<EventId>, PathRejection>,
) -> Result<Json<Event>, ApiError> {
    let id = event_id(id)?;
    let event = state.service.get(id)?;
    Ok(Json(event))
}

/// POST /api/events - Create a new event
#[utoipa::path(
    post,
    path = "/api/events",
    request_body = EventPayload,
    responses(
        (status = 201, description = "Event created successfully", body = Event,
            headers(("Location" = String, description = "Path of the new event"))),
        (status = 400, description = "Missing or mistyped field", body = ErrorResponse)
    ),
    tag = "events"
)]
pub async fn create_event(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Response, ApiError> {
    let body = json_body(body)?;
    let event = state.service.create(&body)?;
    let location = format!("/api/events/{}", event.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(event),
    )
        .into_response())
}

/// PUT /api/events/{id} - Replace an event
#[utoipa::path(
    put,
    path = "/api/events/{id}",
    params(
        ("id" = i64, Path, description = "Event ID")
    ),
    request_body = EventPayload,
    responses(
        (status = 200, description = "Event replaced", body = Event),
        (status = 400, description = "Invalid ID or malformed body", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse)
    ),
    tag = "events"
)]
pub async fn update_event(
    State(state): State<AppState>,
    id: Result<Path<EventId>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Event>, ApiError> {
    let id = event_id(id)?;
    // An absent id wins over an unreadable body.
    let body = match body {
        Ok(Json(value)) => value,
        Err(rejection) => {
            state.service.get(id)?;
            return Err(rejection.into());
        }
    };
    let event = state.service.update(id, &body)?;
    Ok(Json(event))
}

/// DELETE /api/events/{id} - Delete an event
#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    params(
        ("id" = i64, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event deleted", body = MessageResponse),
        (status = 400, description = "Invalid event ID", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse)
    ),
    tag = "events"
)]
pub async fn delete_event(
    State(state): State<AppState>,
    id: Result<Path<EventId>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = event_id(id)?;
    state.service.delete(id)?;
    Ok(Json(MessageResponse::new(DELETED_MESSAGE)))
}
