//! Participation service: sign-ups, status changes and logged time

use crate::{
    error::{AppError, AppResult},
    models::{
        CreateTimeSpan, Participation, ParticipationDetails, ParticipationStatus, PersonId,
        UnitRef,
    },
    repository::{Repository, Stores},
    tracking::{hours::credited_hours, participation, BookableUnit},
};

fn resolve<'a>(stores: &'a Stores, unit: UnitRef) -> AppResult<&'a dyn BookableUnit> {
    let event = stores.event(unit.event_id())?;
    match unit {
        UnitRef::Event(_) => Ok(event as &dyn BookableUnit),
        UnitRef::TimeSlot { event_id, slot_id } => event
            .time_slot(slot_id)
            .map(|ts| ts as &dyn BookableUnit)
            .ok_or_else(|| AppError::time_slot_not_found(event_id, slot_id)),
    }
}

fn resolve_mut<'a>(stores: &'a mut Stores, unit: UnitRef) -> AppResult<&'a mut dyn BookableUnit> {
    let event = stores.event_mut(unit.event_id())?;
    match unit {
        UnitRef::Event(_) => Ok(event as &mut dyn BookableUnit),
        UnitRef::TimeSlot { event_id, slot_id } => event
            .time_slot_mut(slot_id)
            .map(|ts| ts as &mut dyn BookableUnit)
            .ok_or_else(|| AppError::time_slot_not_found(event_id, slot_id)),
    }
}

#[derive(Clone)]
pub struct ParticipationService {
    repository: Repository,
}

impl ParticipationService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Participations of a unit with person names and credited hours
    pub async fn list(&self, target: UnitRef) -> AppResult<Vec<ParticipationDetails>> {
        let stores = self.repository.read().await;
        let unit = resolve(&stores, target)?;
        Ok(unit
            .participations()
            .iter()
            .map(|p| ParticipationDetails {
                person_id: p.person_id,
                full_name: stores
                    .persons
                    .get(p.person_id)
                    .map(|person| person.full_name())
                    .unwrap_or_default(),
                status: p.status,
                time_spans: p.time_spans.clone(),
                hours: credited_hours(unit, p),
            })
            .collect())
    }

    /// Sign a person up or change their status.
    ///
    /// The capacity check and the admission happen under one write lock.
    pub async fn set(
        &self,
        target: UnitRef,
        person_id: PersonId,
        status: ParticipationStatus,
    ) -> AppResult<Participation> {
        let mut stores = self.repository.write().await;
        stores.person(person_id)?;
        let unit = resolve_mut(&mut stores, target)?;

        let transition = match participation::set_status(unit, person_id, status) {
            Ok(t) => t,
            Err(e) => {
                tracing::info!("Refused {} for person {} on {}: {}", status, person_id, target, e);
                return Err(e);
            }
        };
        match transition.previous {
            Some(previous) if previous == status => {}
            Some(previous) => tracing::info!(
                "Person {} on {}: {} -> {}",
                person_id,
                target,
                previous,
                status
            ),
            None => tracing::info!("Person {} signed up on {} as {}", person_id, target, status),
        }
        Ok(transition.participation)
    }

    /// Erase a participation. Returns false when there was none.
    pub async fn remove(&self, target: UnitRef, person_id: PersonId) -> AppResult<bool> {
        let mut stores = self.repository.write().await;
        let removed = participation::remove(resolve_mut(&mut stores, target)?, person_id);
        if removed {
            tracing::info!("Removed participation of person {} on {}", person_id, target);
        }
        Ok(removed)
    }

    /// Log worked time. Returns false when the participation is not accepted.
    pub async fn add_time_span(
        &self,
        target: UnitRef,
        person_id: PersonId,
        data: CreateTimeSpan,
    ) -> AppResult<bool> {
        let span = data.into_time_span()?;
        let mut stores = self.repository.write().await;
        stores.person(person_id)?;
        let added = participation::add_time_span(resolve_mut(&mut stores, target)?, person_id, span)?;
        if !added {
            tracing::debug!(
                "Ignored time span for person {} on {}: not accepted",
                person_id,
                target
            );
        }
        Ok(added)
    }

    /// Remove the time span at `index`
    pub async fn remove_time_span(
        &self,
        target: UnitRef,
        person_id: PersonId,
        index: usize,
    ) -> AppResult<bool> {
        let mut stores = self.repository.write().await;
        Ok(participation::remove_time_span(
            resolve_mut(&mut stores, target)?,
            person_id,
            index,
        ))
    }
}
