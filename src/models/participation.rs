//! Participation of a person in an event or time slot

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{EventId, ParticipationStatus, PersonId, TimeSlotId, TimeSpan};

/// Relationship between one person and one bookable unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Participation {
    pub person_id: PersonId,
    pub status: ParticipationStatus,
    #[serde(default)]
    pub time_spans: Vec<TimeSpan>,
}

impl Participation {
    /// Fresh record for a first sign-up
    pub fn new(person_id: PersonId) -> Self {
        Self {
            person_id,
            status: ParticipationStatus::default(),
            time_spans: Vec::new(),
        }
    }

    pub fn with_status(person_id: PersonId, status: ParticipationStatus) -> Self {
        Self {
            status,
            ..Self::new(person_id)
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.status == ParticipationStatus::Accepted
    }

    /// Sum of all logged time spans
    pub fn logged_hours(&self) -> f64 {
        self.time_spans.iter().map(TimeSpan::duration_hours).sum()
    }
}

/// Reference to a bookable unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitRef {
    Event(EventId),
    TimeSlot { event_id: EventId, slot_id: TimeSlotId },
}

impl UnitRef {
    pub fn event_id(&self) -> EventId {
        match *self {
            UnitRef::Event(id) => id,
            UnitRef::TimeSlot { event_id, .. } => event_id,
        }
    }
}

impl std::fmt::Display for UnitRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitRef::Event(id) => write!(f, "event {}", id),
            UnitRef::TimeSlot { event_id, slot_id } => {
                write!(f, "time slot {} of event {}", slot_id, event_id)
            }
        }
    }
}

/// Set participation status request
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetParticipation {
    pub person_id: PersonId,
    /// accepted, declined or pending
    pub status: String,
}

/// Participation with person details for listings
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParticipationDetails {
    pub person_id: PersonId,
    pub full_name: String,
    pub status: ParticipationStatus,
    pub time_spans: Vec<TimeSpan>,
    /// Hours credited to this participation (0 unless accepted)
    pub hours: f64,
}

/// Outcome of an operation that may or may not change anything
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct ChangeResult {
    pub changed: bool,
}
