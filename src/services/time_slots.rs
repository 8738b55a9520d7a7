//! Time slot management

use crate::{
    error::{AppError, AppResult},
    models::{CreateTimeSlot, EventId, TimeSlotId, TimeSlotResponse, UpdateTimeSlot},
    repository::Repository,
    tracking::{merge_new_slots, SlotCapacity},
};

#[derive(Clone)]
pub struct TimeSlotsService {
    repository: Repository,
}

impl TimeSlotsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, event_id: EventId) -> AppResult<Vec<TimeSlotResponse>> {
        let stores = self.repository.read().await;
        let event = stores.event(event_id)?;
        Ok(event
            .time_slots
            .iter()
            .map(|ts| TimeSlotResponse::new(ts, event.date_from))
            .collect())
    }

    pub async fn get(&self, event_id: EventId, slot_id: TimeSlotId) -> AppResult<TimeSlotResponse> {
        let stores = self.repository.read().await;
        let event = stores.event(event_id)?;
        event
            .time_slot(slot_id)
            .map(|ts| TimeSlotResponse::new(ts, event.date_from))
            .ok_or_else(|| AppError::time_slot_not_found(event_id, slot_id))
    }

    /// Create a batch of slots. Slots sharing category and effective date are
    /// merged into one before they are stored.
    pub async fn create(
        &self,
        event_id: EventId,
        data: &[CreateTimeSlot],
    ) -> AppResult<Vec<TimeSlotResponse>> {
        if data.is_empty() {
            return Err(AppError::BadRequest("No time slots given".to_string()));
        }
        let slots = data
            .iter()
            .map(CreateTimeSlot::parse)
            .collect::<AppResult<Vec<_>>>()?;

        let mut stores = self.repository.write().await;
        let event = stores.event_mut(event_id)?;
        let merged = merge_new_slots(event.date_from, slots);
        if merged.len() < data.len() {
            tracing::info!(
                "Merged {} new time slots into {} for event {}",
                data.len(),
                merged.len(),
                event_id
            );
        }

        let mut created = Vec::with_capacity(merged.len());
        for slot in merged {
            let slot = slot.into_time_slot(self.repository.next_id());
            created.push(TimeSlotResponse::new(&slot, event.date_from));
            event.time_slots.push(slot);
        }
        tracing::info!("Created {} time slots for event {}", created.len(), event_id);
        Ok(created)
    }

    /// Edit a slot. Lowering the capacity never evicts accepted participants.
    pub async fn update(
        &self,
        event_id: EventId,
        slot_id: TimeSlotId,
        data: &UpdateTimeSlot,
    ) -> AppResult<TimeSlotResponse> {
        let mut stores = self.repository.write().await;
        let event = stores.event_mut(event_id)?;
        let event_date = event.date_from;
        let slot = event
            .time_slot_mut(slot_id)
            .ok_or_else(|| AppError::time_slot_not_found(event_id, slot_id))?;

        let mut updated = slot.clone();
        updated.apply(data)?;
        *slot = updated;

        if slot.accepted_count() > slot.max_participants as usize {
            tracing::warn!(
                "Time slot {} of event {} is over capacity: {} accepted, {} places",
                slot_id,
                event_id,
                slot.accepted_count(),
                slot.max_participants
            );
        }
        tracing::info!("Updated time slot {} of event {}", slot_id, event_id);
        Ok(TimeSlotResponse::new(slot, event_date))
    }

    /// Delete a slot with its participations
    pub async fn delete(&self, event_id: EventId, slot_id: TimeSlotId) -> AppResult<()> {
        let mut stores = self.repository.write().await;
        let event = stores.event_mut(event_id)?;
        if !event.remove_time_slot(slot_id) {
            return Err(AppError::time_slot_not_found(event_id, slot_id));
        }
        tracing::info!("Deleted time slot {} of event {}", slot_id, event_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{CreateEvent, CreatePerson, ParticipationStatus, UnitRef},
        services::{
            events::EventsService, participation::ParticipationService, persons::PersonsService,
        },
    };

    async fn setup() -> (Repository, EventId) {
        let repository = Repository::in_memory();
        let event = EventsService::new(repository.clone())
            .create(&CreateEvent {
                name: "Reitturnier".into(),
                description: None,
                date_from: "2025-01-12".into(),
                date_to: None,
                time_from: None,
                time_to: None,
                location: None,
                status: None,
                time_slots: Vec::new(),
            })
            .await
            .unwrap();
        (repository, event.id)
    }

    fn slot(category: &str, date: Option<&str>, from: &str, to: &str, max: u32) -> CreateTimeSlot {
        CreateTimeSlot {
            name: category.into(),
            category: category.into(),
            date: date.map(str::to_string),
            time_from: from.into(),
            time_to: to.into(),
            max_participants: max,
        }
    }

    #[tokio::test]
    async fn test_create_merges_batch() {
        let (repository, event_id) = setup().await;
        let service = TimeSlotsService::new(repository);

        let created = service
            .create(
                event_id,
                &[
                    slot("Parcour", Some("2025-01-12"), "08:00", "10:00", 2),
                    slot("Parcour", Some("2025-01-12"), "09:00", "11:00", 2),
                ],
            )
            .await
            .unwrap();

        assert_eq!(created.len(), 1);
        let merged = &created[0];
        assert_eq!(merged.time_from.format("%H:%M").to_string(), "08:00");
        assert_eq!(merged.time_to.format("%H:%M").to_string(), "11:00");
        assert_eq!(merged.max_participants, 4);
    }

    #[tokio::test]
    async fn test_batches_do_not_merge_with_existing_slots() {
        let (repository, event_id) = setup().await;
        let service = TimeSlotsService::new(repository);

        service
            .create(event_id, &[slot("Putzen", None, "08:00", "09:00", 1)])
            .await
            .unwrap();
        service
            .create(event_id, &[slot("Putzen", None, "09:00", "10:00", 1)])
            .await
            .unwrap();
        assert_eq!(service.list(event_id).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_lowering_capacity_keeps_occupants() {
        let (repository, event_id) = setup().await;
        let service = TimeSlotsService::new(repository.clone());
        let participation = ParticipationService::new(repository.clone());
        let persons = PersonsService::new(repository);

        let slot_id = service
            .create(event_id, &[slot("Parcour", None, "08:00", "10:00", 2)])
            .await
            .unwrap()[0]
            .id;
        let unit = UnitRef::TimeSlot { event_id, slot_id };
        for name in ["Anna", "Lisa"] {
            let person = persons
                .create(CreatePerson {
                    first_name: name.into(),
                    last_name: "Test".into(),
                    ..Default::default()
                })
                .await
                .unwrap();
            participation
                .set(unit, person.id, ParticipationStatus::Accepted)
                .await
                .unwrap();
        }

        let updated = service
            .update(
                event_id,
                slot_id,
                &UpdateTimeSlot {
                    max_participants: Some(1),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.accepted_count, 2);
        assert_eq!(updated.available_spots, 0);
        assert!(updated.is_full);
    }

    #[tokio::test]
    async fn test_unknown_slot_and_event() {
        let (repository, event_id) = setup().await;
        let service = TimeSlotsService::new(repository);
        assert!(matches!(service.get(event_id, 999).await, Err(AppError::NotFound { .. })));
        assert!(matches!(service.delete(event_id, 999).await, Err(AppError::NotFound { .. })));
        assert!(matches!(service.list(999).await, Err(AppError::NotFound { .. })));
        assert!(matches!(service.create(event_id, &[]).await, Err(AppError::BadRequest(_))));
    }
}
