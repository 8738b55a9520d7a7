//! Time slot models

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::{hhmm, not_blank, parse_optional_date, parse_time, Participation, TimeSlotId};
use crate::{
    error::{AppError, AppResult},
    tracking::{capacity::SlotCapacity, time_span::duration_hours},
};

/// A bookable capacity unit owned by an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub id: TimeSlotId,
    pub name: String,
    /// Grouping label (e.g. "Parcour", "Putzen")
    #[serde(default)]
    pub category: String,
    /// Falls back to the event's start date when absent
    pub date: Option<NaiveDate>,
    #[serde(with = "hhmm")]
    #[schema(value_type = String, example = "08:00")]
    pub time_from: NaiveTime,
    #[serde(with = "hhmm")]
    #[schema(value_type = String, example = "10:00")]
    pub time_to: NaiveTime,
    pub max_participants: u32,
    #[serde(default)]
    pub participations: Vec<Participation>,
}

impl TimeSlot {
    pub fn effective_date(&self, event_date: NaiveDate) -> NaiveDate {
        self.date.unwrap_or(event_date)
    }

    /// Planned length of the slot in hours
    pub fn planned_hours(&self) -> f64 {
        duration_hours(self.time_from, self.time_to)
    }

    /// Apply an administrative edit. Existing acceptances are kept even when
    /// the new capacity is lower than the accepted count. Nothing changes when
    /// the edit is rejected.
    pub fn apply(&mut self, data: &UpdateTimeSlot) -> AppResult<()> {
        data.validate()?;
        let date = match data.date {
            Some(ref date) => parse_optional_date("date", Some(date))?,
            None => self.date,
        };
        let time_from = match data.time_from {
            Some(ref from) => parse_time("timeFrom", from)?,
            None => self.time_from,
        };
        let time_to = match data.time_to {
            Some(ref to) => parse_time("timeTo", to)?,
            None => self.time_to,
        };
        check_order(time_from, time_to)?;

        if let Some(ref name) = data.name {
            self.name = name.trim().to_string();
        }
        if let Some(ref category) = data.category {
            self.category = category.trim().to_string();
        }
        self.date = date;
        self.time_from = time_from;
        self.time_to = time_to;
        if let Some(max) = data.max_participants {
            self.max_participants = max;
        }
        Ok(())
    }
}

/// A parsed, not yet persisted time slot
#[derive(Debug, Clone, PartialEq)]
pub struct NewTimeSlot {
    pub name: String,
    pub category: String,
    pub date: Option<NaiveDate>,
    pub time_from: NaiveTime,
    pub time_to: NaiveTime,
    pub max_participants: u32,
}

impl NewTimeSlot {
    pub fn effective_date(&self, event_date: NaiveDate) -> NaiveDate {
        self.date.unwrap_or(event_date)
    }

    pub fn into_time_slot(self, id: TimeSlotId) -> TimeSlot {
        TimeSlot {
            id,
            name: self.name,
            category: self.category,
            date: self.date,
            time_from: self.time_from,
            time_to: self.time_to,
            max_participants: self.max_participants,
            participations: Vec::new(),
        }
    }
}

fn check_order(time_from: NaiveTime, time_to: NaiveTime) -> AppResult<()> {
    if time_to <= time_from {
        return Err(AppError::Validation(
            "timeTo must be after timeFrom".to_string(),
        ));
    }
    Ok(())
}

/// Create time slot request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTimeSlot {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[serde(default)]
    pub category: String,
    /// Slot date (YYYY-MM-DD), defaults to the event's start date
    pub date: Option<String>,
    /// Start time (HH:MM)
    pub time_from: String,
    /// End time (HH:MM)
    pub time_to: String,
    #[validate(range(min = 1, message = "At least one participant is required"))]
    pub max_participants: u32,
}

impl CreateTimeSlot {
    pub fn parse(&self) -> AppResult<NewTimeSlot> {
        self.validate()?;
        let time_from = parse_time("timeFrom", &self.time_from)?;
        let time_to = parse_time("timeTo", &self.time_to)?;
        check_order(time_from, time_to)?;
        Ok(NewTimeSlot {
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            date: parse_optional_date("date", self.date.as_deref())?,
            time_from,
            time_to,
            max_participants: self.max_participants,
        })
    }
}

/// Update time slot request
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTimeSlot {
    #[validate(custom(function = "not_blank"))]
    pub name: Option<String>,
    pub category: Option<String>,
    /// Slot date (YYYY-MM-DD), empty string clears it
    pub date: Option<String>,
    pub time_from: Option<String>,
    pub time_to: Option<String>,
    #[validate(range(min = 1, message = "At least one participant is required"))]
    pub max_participants: Option<u32>,
}

/// Time slot with derived capacity fields
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotResponse {
    pub id: TimeSlotId,
    pub name: String,
    pub category: String,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    #[schema(value_type = String, example = "08:00")]
    pub time_from: NaiveTime,
    #[serde(with = "hhmm")]
    #[schema(value_type = String, example = "10:00")]
    pub time_to: NaiveTime,
    pub max_participants: u32,
    pub participations: Vec<Participation>,
    pub accepted_count: usize,
    pub available_spots: usize,
    pub is_full: bool,
}

impl TimeSlotResponse {
    pub fn new(slot: &TimeSlot, event_date: NaiveDate) -> Self {
        Self {
            id: slot.id,
            name: slot.name.clone(),
            category: slot.category.clone(),
            date: slot.effective_date(event_date),
            time_from: slot.time_from,
            time_to: slot.time_to,
            max_participants: slot.max_participants,
            participations: slot.participations.clone(),
            accepted_count: slot.accepted_count(),
            available_spots: slot.available_spots(),
            is_full: slot.is_full(),
        }
    }
}
