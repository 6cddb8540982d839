// Event domain types

use chrono::{DateTime, Utc};
use multiapp_core::ApiError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Event identifier. Assigned by the service, never by the client.
pub type EventId = i64;

/// A scheduled event in the collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Event {
    /// Unique identifier within the collection.
    #[schema(example = 1)]
    pub id: EventId,
    #[schema(example = "Tech Conference 2024")]
    pub name: String,
    /// Event date as supplied by the client (not parsed).
    #[schema(example = "2024-03-15")]
    pub date: String,
    #[schema(example = "San Francisco")]
    pub location: String,
    #[schema(example = 500)]
    pub attendees: i32,
    /// Set when the record was created through the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Set when the record was last replaced through the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Event {
    /// Build a record from a validated payload. Timestamps are left unset.
    pub fn from_payload(id: EventId, payload: EventPayload) -> Self {
        Self {
            id,
            name: payload.name,
            date: payload.date,
            location: payload.location,
            attendees: payload.attendees,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Body accepted by create and update. Every field is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EventPayload {
    #[schema(example = "Demo")]
    pub name: String,
    #[schema(example = "2024-06-01")]
    pub date: String,
    #[schema(example = "Austin")]
    pub location: String,
    #[schema(example = 42)]
    pub attendees: i32,
}

#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error("{0}")]
    Validation(String),

    #[error("Event not found")]
    NotFound(EventId),
}

impl From<EventError> for ApiError {
    fn from(err: EventError) -> Self {
        match err {
            EventError::Validation(msg) => ApiError::Validation(msg),
            EventError::NotFound(_) => ApiError::not_found(err.to_string()),
        }
    }
}

/// The three events every process starts with.
pub fn seed_events() -> Vec<Event> {
    let seed = |id, name: &str, date: &str, location: &str, attendees| Event {
        id,
        name: name.to_string(),
        date: date.to_string(),
        location: location.to_string(),
        attendees,
        created_at: None,
        updated_at: None,
    };

    vec![
        seed(1, "Tech Conference 2024", "2024-03-15", "San Francisco", 500),
        seed(2, "DevOps Workshop", "2024-04-20", "New York", 150),
        seed(3, "Cloud Summit", "2024-05-10", "Seattle", 1200),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_sequential() {
        let ids: Vec<_> = seed_events().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_timestamps_omitted_when_unset() {
        let json = serde_json::to_value(&seed_events()[0]).unwrap();
        assert!(json.get("created_at").is_none());
        assert!(json.get("updated_at").is_none());
        assert_eq!(json["attendees"], 500);
    }

    #[test]
    fn test_not_found_converts_to_api_error() {
        let err: ApiError = EventError::NotFound(9).into();
        assert!(matches!(err, ApiError::NotFound(ref m) if m == "Event not found"));
    }
}
