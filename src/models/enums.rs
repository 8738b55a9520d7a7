//! Shared domain enums

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;

// ---------------------------------------------------------------------------
// ParticipationStatus
// ---------------------------------------------------------------------------

/// Status of one person's participation in an event or time slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ParticipationStatus {
    /// Not yet responded
    #[default]
    Pending,
    /// Confirmed, counts against capacity
    Accepted,
    Declined,
}

impl ParticipationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParticipationStatus::Pending => "pending",
            ParticipationStatus::Accepted => "accepted",
            ParticipationStatus::Declined => "declined",
        }
    }
}

impl std::fmt::Display for ParticipationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ParticipationStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(ParticipationStatus::Pending),
            "accepted" => Ok(ParticipationStatus::Accepted),
            "declined" => Ok(ParticipationStatus::Declined),
            other => Err(AppError::InvalidStatus(format!(
                "'{}' is not a participation status (accepted, declined, pending)",
                other
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// EventStatus
// ---------------------------------------------------------------------------

/// Publication status of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Draft,
    Published,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Draft => "draft",
            EventStatus::Published => "published",
        }
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EventStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "draft" => Ok(EventStatus::Draft),
            "published" => Ok(EventStatus::Published),
            other => Err(AppError::InvalidStatus(format!(
                "'{}' is not an event status (draft, published)",
                other
            ))),
        }
    }
}
