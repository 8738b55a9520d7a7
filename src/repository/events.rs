//! Event storage

use crate::models::{Event, EventId};

/// Storage interface for events and the slots they own
pub trait EventStore: Send + Sync {
    fn all(&self) -> Vec<&Event>;

    fn get(&self, id: EventId) -> Option<&Event>;

    fn get_mut(&mut self, id: EventId) -> Option<&mut Event>;

    fn insert(&mut self, event: Event);

    /// Remove an event together with its slots and participations
    fn remove(&mut self, id: EventId) -> Option<Event>;
}

/// Vector-backed store with linear lookup
#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    events: Vec<Event>,
}

impl EventStore for InMemoryEventStore {
    fn all(&self) -> Vec<&Event> {
        self.events.iter().collect()
    }

    fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    fn get_mut(&mut self, id: EventId) -> Option<&mut Event> {
        self.events.iter_mut().find(|e| e.id == id)
    }

    fn insert(&mut self, event: Event) {
        self.events.push(event);
    }

    fn remove(&mut self, id: EventId) -> Option<Event> {
        let index = self.events.iter().position(|e| e.id == id)?;
        Some(self.events.remove(index))
    }
}
