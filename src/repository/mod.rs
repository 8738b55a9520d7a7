//! Repository layer: storage interfaces and their in-memory implementations

pub mod events;
pub mod ids;
pub mod persons;
pub mod seed;

use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

pub use events::{EventStore, InMemoryEventStore};
pub use ids::{IdGenerator, SequenceIdGenerator};
pub use persons::{InMemoryPersonStore, PersonStore};

use crate::{
    error::{AppError, AppResult},
    models::{Event, EventId, Person, PersonId},
};

/// The stores guarded together by the repository lock
pub struct Stores {
    pub persons: Box<dyn PersonStore>,
    pub events: Box<dyn EventStore>,
}

impl Stores {
    pub fn person(&self, id: PersonId) -> AppResult<&Person> {
        self.persons
            .get(id)
            .ok_or_else(|| AppError::person_not_found(id))
    }

    pub fn event(&self, id: EventId) -> AppResult<&Event> {
        self.events.get(id).ok_or_else(|| AppError::event_not_found(id))
    }

    pub fn event_mut(&mut self, id: EventId) -> AppResult<&mut Event> {
        self.events
            .get_mut(id)
            .ok_or_else(|| AppError::event_not_found(id))
    }
}

/// Shared handle to the stores.
///
/// Every mutation runs under the write lock, so a capacity check and the
/// admission that follows it can never interleave with another request.
#[derive(Clone)]
pub struct Repository {
    stores: Arc<RwLock<Stores>>,
    ids: Arc<dyn IdGenerator>,
}

impl Repository {
    /// Create a repository over the given stores and id source
    pub fn new(
        persons: Box<dyn PersonStore>,
        events: Box<dyn EventStore>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            stores: Arc::new(RwLock::new(Stores { persons, events })),
            ids,
        }
    }

    /// Empty repository backed by process memory
    pub fn in_memory() -> Self {
        Self::new(
            Box::<InMemoryPersonStore>::default(),
            Box::<InMemoryEventStore>::default(),
            Arc::new(SequenceIdGenerator::default()),
        )
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Stores> {
        self.stores.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Stores> {
        self.stores.write().await
    }

    pub fn next_id(&self) -> i64 {
        self.ids.next_id()
    }
}
