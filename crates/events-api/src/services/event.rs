// Event service for business logic

use crate::api::validation::parse_event_payload;
use crate::models::{Event, EventError, EventId};
use crate::storage::EventStore;
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;

pub struct EventService {
    store: Arc<EventStore>,
}

impl EventService {
    pub fn new(store: Arc<EventStore>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<Event> {
        self.store.list()
    }

    pub fn get(&self, id: EventId) -> Result<Event, EventError> {
        self.store.get(id).ok_or(EventError::NotFound(id))
    }

    /// Validate `body`, assign the next id and append.
    pub fn create(&self, body: &Value) -> Result<Event, EventError> {
        let payload = parse_event_payload(body)?;
        let now = Utc::now();

        let event = self.store.insert_with(|id| Event {
            created_at: Some(now),
            ..Event::from_payload(id, payload)
        });

        tracing::info!(event_id = event.id, name = %event.name, "Created event");
        Ok(event)
    }

    /// Full replace: every field comes from `body`, the id is kept.
    /// An absent id wins over a malformed body.
    pub fn update(&self, id: EventId, body: &Value) -> Result<Event, EventError> {
        if !self.store.contains(id) {
            return Err(EventError::NotFound(id));
        }

        let payload = parse_event_payload(body)?;
        let now = Utc::now();

        let event = self
            .store
            .replace_with(id, |id| Event {
                updated_at: Some(now),
                ..Event::from_payload(id, payload)
            })
            .ok_or(EventError::NotFound(id))?;

        tracing::info!(event_id = id, "Updated event");
        Ok(event)
    }

    pub fn delete(&self, id: EventId) -> Result<Event, EventError> {
        let event = self.store.remove(id).ok_or(EventError::NotFound(id))?;
        tracing::info!(event_id = id, "Deleted event");
        Ok(event)
    }
}
