//! Participation state machine
//!
//! Status moves freely between `pending`, `accepted` and `declined`. The only
//! guarded edge is into `accepted` on a unit with a capacity, which needs a
//! free place at the moment of the change. Leaving `accepted` always succeeds.

use crate::{
    error::{AppError, AppResult},
    models::{Event, Participation, ParticipationStatus, PersonId, TimeSlot, TimeSpan},
};

/// Something people can sign up for
pub trait BookableUnit {
    fn participations(&self) -> &[Participation];

    fn participations_mut(&mut self) -> &mut Vec<Participation>;

    /// Hours credited to an accepted participation that has no logged time
    fn booked_hours(&self) -> Option<f64>;

    /// Human readable label for messages
    fn label(&self) -> String;

    fn participation(&self, person_id: PersonId) -> Option<&Participation> {
        self.participations()
            .iter()
            .find(|p| p.person_id == person_id)
    }

    /// Whether one more acceptance fits right now
    fn can_admit(&self) -> bool;
}

impl BookableUnit for Event {
    fn participations(&self) -> &[Participation] {
        &self.participations
    }

    fn participations_mut(&mut self) -> &mut Vec<Participation> {
        &mut self.participations
    }

    fn can_admit(&self) -> bool {
        true
    }

    fn booked_hours(&self) -> Option<f64> {
        None
    }

    fn label(&self) -> String {
        format!("Event '{}'", self.name)
    }
}

impl BookableUnit for TimeSlot {
    fn participations(&self) -> &[Participation] {
        &self.participations
    }

    fn participations_mut(&mut self) -> &mut Vec<Participation> {
        &mut self.participations
    }

    fn can_admit(&self) -> bool {
        super::capacity::SlotCapacity::can_admit(self)
    }

    fn booked_hours(&self) -> Option<f64> {
        Some(self.planned_hours())
    }

    fn label(&self) -> String {
        format!("Time slot '{}'", self.name)
    }
}

/// Result of a status change
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// Status before the change, `None` for a first sign-up
    pub previous: Option<ParticipationStatus>,
    pub participation: Participation,
}

/// Set the status of `person_id` on `unit`, creating the record if needed.
///
/// Fails with `CapacityExceeded` when accepting on a full unit; the unit is
/// left untouched in that case. Declining clears all logged time spans.
pub fn set_status<U: BookableUnit + ?Sized>(
    unit: &mut U,
    person_id: PersonId,
    status: ParticipationStatus,
) -> AppResult<Transition> {
    let index = unit
        .participations()
        .iter()
        .position(|p| p.person_id == person_id);
    let previous = index.map(|i| unit.participations()[i].status);

    if status == ParticipationStatus::Accepted
        && previous != Some(ParticipationStatus::Accepted)
        && !unit.can_admit()
    {
        return Err(AppError::CapacityExceeded(format!(
            "{} has no free places",
            unit.label()
        )));
    }

    let participations = unit.participations_mut();
    let index = match index {
        Some(i) => i,
        None => {
            participations.push(Participation::new(person_id));
            participations.len() - 1
        }
    };
    let participation = &mut participations[index];
    participation.status = status;
    if status == ParticipationStatus::Declined {
        participation.time_spans.clear();
    }

    Ok(Transition {
        previous,
        participation: participation.clone(),
    })
}

/// Erase the participation record entirely. Returns false when none existed.
pub fn remove<U: BookableUnit + ?Sized>(unit: &mut U, person_id: PersonId) -> bool {
    let participations = unit.participations_mut();
    let before = participations.len();
    participations.retain(|p| p.person_id != person_id);
    participations.len() < before
}

/// Log worked time on an accepted participation.
///
/// Returns false without logging when the participation is not accepted.
pub fn add_time_span<U: BookableUnit + ?Sized>(
    unit: &mut U,
    person_id: PersonId,
    span: TimeSpan,
) -> AppResult<bool> {
    let label = unit.label();
    let participation = unit
        .participations_mut()
        .iter_mut()
        .find(|p| p.person_id == person_id)
        .ok_or_else(|| AppError::participation_not_found(person_id, &label))?;

    if !participation.is_accepted() {
        return Ok(false);
    }
    participation.time_spans.push(span);
    Ok(true)
}

/// Remove the logged time span at `index`. Returns false for an unknown pair or index.
pub fn remove_time_span<U: BookableUnit + ?Sized>(
    unit: &mut U,
    person_id: PersonId,
    index: usize,
) -> bool {
    match unit
        .participations_mut()
        .iter_mut()
        .find(|p| p.person_id == person_id)
    {
        Some(p) if index < p.time_spans.len() => {
            p.time_spans.remove(index);
            true
        }
        _ => false,
    }
}
