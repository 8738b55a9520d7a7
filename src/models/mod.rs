//! Data models for Helferplan

pub mod enums;
pub mod event;
pub mod hhmm;
pub mod participation;
pub mod person;
pub mod time_slot;
pub mod time_span;

use chrono::{NaiveDate, NaiveTime};

use crate::error::{AppError, AppResult};

pub type PersonId = i64;
pub type EventId = i64;
pub type TimeSlotId = i64;

// Re-export commonly used types
pub use enums::{EventStatus, ParticipationStatus};
pub use event::{CreateEvent, Event, EventResponse, UpdateEvent};
pub use participation::{Participation, ParticipationDetails, SetParticipation, UnitRef};
pub use person::{CreatePerson, Person, PersonHours, PersonHoursSummary, UpdatePerson};
pub use time_slot::{CreateTimeSlot, NewTimeSlot, TimeSlot, TimeSlotResponse, UpdateTimeSlot};
pub use time_span::{CreateTimeSpan, TimeSpan};

/// Reject names that are empty once surrounding whitespace is removed
pub(crate) fn not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        let mut error = validator::ValidationError::new("blank");
        error.message = Some("must not be blank".into());
        return Err(error);
    }
    Ok(())
}

/// Parse a `YYYY-MM-DD` request field
pub(crate) fn parse_date(field: &str, value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("Invalid {} (use YYYY-MM-DD)", field)))
}

/// Parse a `HH:MM` request field
pub(crate) fn parse_time(field: &str, value: &str) -> AppResult<NaiveTime> {
    hhmm::parse(value).ok_or_else(|| AppError::Validation(format!("Invalid {} (use HH:MM)", field)))
}

/// Parse an optional date field, treating blank strings as absent
pub(crate) fn parse_optional_date(field: &str, value: Option<&str>) -> AppResult<Option<NaiveDate>> {
    match value {
        Some(v) if !v.trim().is_empty() => parse_date(field, v).map(Some),
        _ => Ok(None),
    }
}

/// Parse an optional time field, treating blank strings as absent
pub(crate) fn parse_optional_time(field: &str, value: Option<&str>) -> AppResult<Option<NaiveTime>> {
    match value {
        Some(v) if !v.trim().is_empty() => parse_time(field, v).map(Some),
        _ => Ok(None),
    }
}
