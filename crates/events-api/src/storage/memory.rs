// In-memory event collection
// Decision: One parking_lot RwLock around the whole collection; each operation holds it once
// Decision: Identifiers come from a high-water mark, so a deleted id is never handed out again
//
// Records keep insertion order. Lookups are linear scans by stored id, so
// removing a record never changes the identifiers of the ones after it.

use crate::models::{seed_events, Event, EventId};
use parking_lot::RwLock;

struct Collection {
    records: Vec<Event>,
    next_id: EventId,
}

impl Collection {
    fn position(&self, id: EventId) -> Option<usize> {
        self.records.iter().position(|e| e.id == id)
    }
}

/// Ordered, process-local event storage. Lost on restart.
pub struct EventStore {
    inner: RwLock<Collection>,
}

impl Default for EventStore {
    fn default() -> Self {
        Self::with_records(Vec::new())
    }
}

impl EventStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the three startup events
    pub fn seeded() -> Self {
        Self::with_records(seed_events())
    }

    pub fn with_records(records: Vec<Event>) -> Self {
        // With no deletions this equals `len + 1`.
        let next_id = records
            .iter()
            .map(|e| e.id)
            .max()
            .unwrap_or(0)
            .max(records.len() as EventId)
            + 1;

        Self {
            inner: RwLock::new(Collection { records, next_id }),
        }
    }

    pub fn list(&self) -> Vec<Event> {
        self.inner.read().records.clone()
    }

    pub fn get(&self, id: EventId) -> Option<Event> {
        self.inner.read().records.iter().find(|e| e.id == id).cloned()
    }

    pub fn contains(&self, id: EventId) -> bool {
        self.inner.read().position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Assign the next identifier, build the record with it and append.
    pub fn insert_with(&self, build: impl FnOnce(EventId) -> Event) -> Event {
        let mut inner = self.inner.write();
        let id = inner.next_id;
        inner.next_id += 1;

        let event = build(id);
        inner.records.push(event.clone());
        event
    }

    /// Replace the record with `id` in place. `None` if absent.
    pub fn replace_with(&self, id: EventId, build: impl FnOnce(EventId) -> Event) -> Option<Event> {
        let mut inner = self.inner.write();
        let index = inner.position(id)?;

        let event = build(id);
        inner.records[index] = event.clone();
        Some(event)
    }

    /// Remove the record with `id`, shifting later records down. `None` if absent.
    pub fn remove(&self, id: EventId) -> Option<Event> {
        let mut inner = self.inner.write();
        let index = inner.position(id)?;
        Some(inner.records.remove(index))
    }
}
