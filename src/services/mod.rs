//! Business logic services

pub mod events;
pub mod participation;
pub mod persons;
pub mod time_slots;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub persons: persons::PersonsService,
    pub events: events::EventsService,
    pub time_slots: time_slots::TimeSlotsService,
    pub participation: participation::ParticipationService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            persons: persons::PersonsService::new(repository.clone()),
            events: events::EventsService::new(repository.clone()),
            time_slots: time_slots::TimeSlotsService::new(repository.clone()),
            participation: participation::ParticipationService::new(repository),
        }
    }
}
