// Input validation for event payloads
//
// Bodies arrive as untyped JSON and are checked field by field, in declaration
// order, before anything touches the collection. The first missing or mistyped
// field rejects the whole request.

use crate::models::{EventError, EventPayload};
use serde_json::{Map, Value};

/// Returned when the body is valid JSON but not an object.
pub const NOT_AN_OBJECT_MESSAGE: &str = "Request body must be a JSON object";

fn missing_or_mistyped(field: &str, expected: &str) -> EventError {
    tracing::debug!(field, expected, "Rejected event payload");
    EventError::Validation(format!(
        "Field '{}' is required and must be {}",
        field, expected
    ))
}

fn required_string(body: &Map<String, Value>, field: &str) -> Result<String, EventError> {
    body.get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| missing_or_mistyped(field, "a string"))
}

fn required_i32(body: &Map<String, Value>, field: &str) -> Result<i32, EventError> {
    body.get(field)
        .and_then(Value::as_i64)
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| missing_or_mistyped(field, "a 32-bit integer"))
}

/// Validate a create/update body into an [`EventPayload`].
pub fn parse_event_payload(body: &Value) -> Result<EventPayload, EventError> {
    let body = body
        .as_object()
        .ok_or_else(|| EventError::Validation(NOT_AN_OBJECT_MESSAGE.to_string()))?;

    Ok(EventPayload {
        name: required_string(body, "name")?,
        date: required_string(body, "date")?,
        location: required_string(body, "location")?,
        attendees: required_i32(body, "attendees")?,
    })
}
