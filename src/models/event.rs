//! Event model (club events with optional time slots)

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::{
    hhmm, not_blank, parse_date, parse_optional_date, parse_optional_time, CreateTimeSlot,
    EventId, EventStatus, Participation, ParticipationStatus, TimeSlot, TimeSlotId,
    TimeSlotResponse,
};
use crate::{error::AppResult, tracking::time_span::duration_hours};

/// Event record, the aggregate owning its participations and time slots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub description: Option<String>,
    pub date_from: NaiveDate,
    pub date_to: Option<NaiveDate>,
    #[serde(with = "hhmm::option", default)]
    #[schema(value_type = Option<String>, example = "09:00")]
    pub time_from: Option<NaiveTime>,
    #[serde(with = "hhmm::option", default)]
    #[schema(value_type = Option<String>, example = "17:00")]
    pub time_to: Option<NaiveTime>,
    pub location: Option<String>,
    #[serde(default)]
    pub status: EventStatus,
    /// Event-level participations (events without slots)
    #[serde(default)]
    pub participations: Vec<Participation>,
    #[serde(default)]
    pub time_slots: Vec<TimeSlot>,
}

impl Event {
    /// Planned duration of the event window in hours
    pub fn planned_hours(&self) -> f64 {
        match (self.time_from, self.time_to) {
            (Some(from), Some(to)) => duration_hours(from, to),
            _ => 0.0,
        }
    }

    fn count_status(&self, status: ParticipationStatus) -> usize {
        self.participations
            .iter()
            .filter(|p| p.status == status)
            .count()
    }

    pub fn accepted_count(&self) -> usize {
        self.count_status(ParticipationStatus::Accepted)
    }

    pub fn declined_count(&self) -> usize {
        self.count_status(ParticipationStatus::Declined)
    }

    pub fn time_slot(&self, id: TimeSlotId) -> Option<&TimeSlot> {
        self.time_slots.iter().find(|ts| ts.id == id)
    }

    pub fn time_slot_mut(&mut self, id: TimeSlotId) -> Option<&mut TimeSlot> {
        self.time_slots.iter_mut().find(|ts| ts.id == id)
    }

    /// Remove a time slot with all its participations
    pub fn remove_time_slot(&mut self, id: TimeSlotId) -> bool {
        let before = self.time_slots.len();
        self.time_slots.retain(|ts| ts.id != id);
        self.time_slots.len() < before
    }

    /// Apply an edit to the descriptive fields, keeping participations and slots
    pub fn apply(&mut self, data: &UpdateEvent) -> AppResult<()> {
        data.validate()?;
        if let Some(ref name) = data.name {
            self.name = name.trim().to_string();
        }
        if let Some(ref description) = data.description {
            self.description = Some(description.clone());
        }
        if let Some(ref date_from) = data.date_from {
            self.date_from = parse_date("dateFrom", date_from)?;
        }
        if let Some(ref date_to) = data.date_to {
            self.date_to = parse_optional_date("dateTo", Some(date_to))?;
        }
        if let Some(ref time_from) = data.time_from {
            self.time_from = parse_optional_time("timeFrom", Some(time_from))?;
        }
        if let Some(ref time_to) = data.time_to {
            self.time_to = parse_optional_time("timeTo", Some(time_to))?;
        }
        if let Some(ref location) = data.location {
            self.location = Some(location.clone());
        }
        if let Some(ref status) = data.status {
            self.status = status.parse()?;
        }
        Ok(())
    }
}

/// Create event request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEvent {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    pub description: Option<String>,
    /// Start date (YYYY-MM-DD)
    pub date_from: String,
    /// End date (YYYY-MM-DD)
    pub date_to: Option<String>,
    /// Planned start (HH:MM)
    pub time_from: Option<String>,
    /// Planned end (HH:MM)
    pub time_to: Option<String>,
    pub location: Option<String>,
    /// draft or published
    pub status: Option<String>,
    /// Initial time slots, merged like any slot batch
    #[serde(default)]
    pub time_slots: Vec<CreateTimeSlot>,
}

impl CreateEvent {
    /// Build the event without slots; slots are created through the slot batch path
    pub fn into_event(&self, id: EventId) -> AppResult<Event> {
        self.validate()?;
        Ok(Event {
            id,
            name: self.name.trim().to_string(),
            description: self.description.clone(),
            date_from: parse_date("dateFrom", &self.date_from)?,
            date_to: parse_optional_date("dateTo", self.date_to.as_deref())?,
            time_from: parse_optional_time("timeFrom", self.time_from.as_deref())?,
            time_to: parse_optional_time("timeTo", self.time_to.as_deref())?,
            location: self.location.clone(),
            status: match self.status {
                Some(ref s) => s.parse()?,
                None => EventStatus::default(),
            },
            participations: Vec::new(),
            time_slots: Vec::new(),
        })
    }
}

/// Update event request
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEvent {
    #[validate(custom(function = "not_blank"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub time_from: Option<String>,
    pub time_to: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
}

/// Event with derived counters
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: EventId,
    pub name: String,
    pub description: Option<String>,
    pub date_from: NaiveDate,
    pub date_to: Option<NaiveDate>,
    #[serde(with = "hhmm::option")]
    #[schema(value_type = Option<String>, example = "09:00")]
    pub time_from: Option<NaiveTime>,
    #[serde(with = "hhmm::option")]
    #[schema(value_type = Option<String>, example = "17:00")]
    pub time_to: Option<NaiveTime>,
    pub location: Option<String>,
    pub status: EventStatus,
    pub planned_hours: f64,
    pub accepted_count: usize,
    pub declined_count: usize,
    pub participations: Vec<Participation>,
    pub time_slots: Vec<TimeSlotResponse>,
}

impl From<&Event> for EventResponse {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id,
            name: event.name.clone(),
            description: event.description.clone(),
            date_from: event.date_from,
            date_to: event.date_to,
            time_from: event.time_from,
            time_to: event.time_to,
            location: event.location.clone(),
            status: event.status,
            planned_hours: event.planned_hours(),
            accepted_count: event.accepted_count(),
            declined_count: event.declined_count(),
            participations: event.participations.clone(),
            time_slots: event
                .time_slots
                .iter()
                .map(|ts| TimeSlotResponse::new(ts, event.date_from))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn create() -> CreateEvent {
        CreateEvent {
            name: "Sommerfest".into(),
            description: None,
            date_from: "2024-06-20".into(),
            date_to: None,
            time_from: Some("12:00".into()),
            time_to: Some("22:00".into()),
            location: Some("Festplatz".into()),
            status: None,
            time_slots: Vec::new(),
        }
    }

    #[test]
    fn test_into_event() {
        let event = create().into_event(1).unwrap();
        assert_eq!(event.status, EventStatus::Draft);
        assert_eq!(event.planned_hours(), 10.0);
        assert!(event.time_slots.is_empty());
    }

    #[test]
    fn test_invalid_fields() {
        let mut data = create();
        data.date_from = "20.06.2024".into();
        assert!(matches!(data.into_event(1), Err(AppError::Validation(_))));

        let mut data = create();
        data.status = Some("cancelled".into());
        assert!(matches!(data.into_event(1), Err(AppError::InvalidStatus(_))));
    }

    #[test]
    fn test_blank_names_are_rejected() {
        let mut data = create();
        data.name = "   ".into();
        assert!(matches!(data.into_event(1), Err(AppError::Validation(_))));

        let mut event = create().into_event(1).unwrap();
        let result = event.apply(&UpdateEvent {
            name: Some(" \n ".into()),
            ..Default::default()
        });
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(event.name, "Sommerfest");
    }

    #[test]
    fn test_apply_keeps_participations() {
        let mut event = create().into_event(1).unwrap();
        event
            .participations
            .push(Participation::with_status(5, ParticipationStatus::Declined));
        event
            .apply(&UpdateEvent {
                status: Some("published".into()),
                time_to: Some("".into()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(event.status, EventStatus::Published);
        assert_eq!(event.time_to, None);
        assert_eq!(event.planned_hours(), 0.0);
        assert_eq!(event.declined_count(), 1);
    }
}
