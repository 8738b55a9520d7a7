//! Events service

use crate::{
    error::{AppError, AppResult},
    models::{CreateEvent, EventId, EventResponse, UpdateEvent},
    repository::Repository,
    tracking::merge_new_slots,
};

#[derive(Clone)]
pub struct EventsService {
    repository: Repository,
}

impl EventsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List events, newest start date first
    pub async fn list(&self) -> Vec<EventResponse> {
        let stores = self.repository.read().await;
        let mut events = stores.events.all();
        events.sort_by(|a, b| b.date_from.cmp(&a.date_from));
        events.into_iter().map(EventResponse::from).collect()
    }

    pub async fn get_by_id(&self, id: EventId) -> AppResult<EventResponse> {
        let stores = self.repository.read().await;
        stores.event(id).map(EventResponse::from)
    }

    /// Create an event, merging its initial slots like any slot batch
    pub async fn create(&self, data: &CreateEvent) -> AppResult<EventResponse> {
        let mut event = data.into_event(self.repository.next_id())?;
        let slots = data
            .time_slots
            .iter()
            .map(|slot| slot.parse())
            .collect::<AppResult<Vec<_>>>()?;
        for slot in merge_new_slots(event.date_from, slots) {
            event
                .time_slots
                .push(slot.into_time_slot(self.repository.next_id()));
        }

        let response = EventResponse::from(&event);
        let mut stores = self.repository.write().await;
        stores.events.insert(event);
        tracing::info!(
            "Created event {} '{}' with {} time slots",
            response.id,
            response.name,
            response.time_slots.len()
        );
        Ok(response)
    }

    /// Update descriptive fields and status; participations and slots are kept
    pub async fn update(&self, id: EventId, data: &UpdateEvent) -> AppResult<EventResponse> {
        let mut stores = self.repository.write().await;
        let event = stores.event_mut(id)?;
        event.apply(data)?;
        tracing::info!("Updated event {}", id);
        Ok(EventResponse::from(&*event))
    }

    /// Delete an event with all its slots and participations
    pub async fn delete(&self, id: EventId) -> AppResult<()> {
        let mut stores = self.repository.write().await;
        let event = stores
            .events
            .remove(id)
            .ok_or_else(|| AppError::event_not_found(id))?;
        tracing::info!(
            "Deleted event {} with {} time slots and {} participations",
            id,
            event.time_slots.len(),
            event.participations.len()
        );
        Ok(())
    }
}
