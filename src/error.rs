//! Error types for Helferplan server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Numeric error codes exposed in error bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    NoSuchPerson = 2,
    NoSuchEvent = 3,
    NoSuchTimeSlot = 4,
    NoSuchParticipation = 5,
    SlotFull = 6,
    BadStatus = 7,
    BadValue = 8,
}

/// What a `NotFound` error failed to find
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundKind {
    Person,
    Event,
    TimeSlot,
    Participation,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {message}")]
    NotFound { kind: NotFoundKind, message: String },

    #[error("Capacity exceeded: {0}")]
    CapacityExceeded(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    fn not_found(kind: NotFoundKind, message: String) -> Self {
        AppError::NotFound { kind, message }
    }

    pub fn person_not_found(id: i64) -> Self {
        Self::not_found(NotFoundKind::Person, format!("Person {} not found", id))
    }

    pub fn event_not_found(id: i64) -> Self {
        Self::not_found(NotFoundKind::Event, format!("Event {} not found", id))
    }

    pub fn time_slot_not_found(event_id: i64, slot_id: i64) -> Self {
        Self::not_found(
            NotFoundKind::TimeSlot,
            format!("Time slot {} not found in event {}", slot_id, event_id),
        )
    }

    /// The person exists but has no participation record on `unit`
    pub fn participation_not_found(person_id: i64, unit: &str) -> Self {
        Self::not_found(
            NotFoundKind::Participation,
            format!("Person {} has no participation in {}", person_id, unit),
        )
    }

    fn code(&self) -> ErrorCode {
        match self {
            AppError::NotFound { kind, .. } => match kind {
                NotFoundKind::Person => ErrorCode::NoSuchPerson,
                NotFoundKind::Event => ErrorCode::NoSuchEvent,
                NotFoundKind::TimeSlot => ErrorCode::NoSuchTimeSlot,
                NotFoundKind::Participation => ErrorCode::NoSuchParticipation,
            },
            AppError::CapacityExceeded(_) => ErrorCode::SlotFull,
            AppError::InvalidStatus(_) => ErrorCode::BadStatus,
            AppError::Validation(_) | AppError::BadRequest(_) => ErrorCode::BadValue,
            AppError::Internal(_) => ErrorCode::Failure,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();
        let (status, message) = match &self {
            AppError::NotFound { message, .. } => (StatusCode::NOT_FOUND, message.clone()),
            AppError::CapacityExceeded(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::InvalidStatus(msg)
            | AppError::Validation(msg)
            | AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
