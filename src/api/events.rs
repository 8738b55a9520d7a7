//! Events API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{CreateEvent, EventId, EventResponse, UpdateEvent},
};

/// List events, newest first
#[utoipa::path(
    get,
    path = "/events",
    tag = "events",
    responses(
        (status = 200, description = "Events list", body = Vec<EventResponse>)
    )
)]
pub async fn list_events(State(state): State<crate::AppState>) -> Json<Vec<EventResponse>> {
    Json(state.services.events.list().await)
}

/// Get event by ID
#[utoipa::path(
    get,
    path = "/events/{id}",
    tag = "events",
    params(("id" = i64, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Event details", body = EventResponse),
        (status = 404, description = "Event not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_event(
    State(state): State<crate::AppState>,
    Path(id): Path<EventId>,
) -> AppResult<Json<EventResponse>> {
    let event = state.services.events.get_by_id(id).await?;
    Ok(Json(event))
}

/// Create an event with optional initial time slots
#[utoipa::path(
    post,
    path = "/events",
    tag = "events",
    request_body = CreateEvent,
    responses(
        (status = 201, description = "Event created", body = EventResponse),
        (status = 400, description = "Invalid event", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_event(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateEvent>,
) -> AppResult<(StatusCode, Json<EventResponse>)> {
    let event = state.services.events.create(&data).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// Update an event
#[utoipa::path(
    put,
    path = "/events/{id}",
    tag = "events",
    params(("id" = i64, Path, description = "Event ID")),
    request_body = UpdateEvent,
    responses(
        (status = 200, description = "Event updated", body = EventResponse)
    )
)]
pub async fn update_event(
    State(state): State<crate::AppState>,
    Path(id): Path<EventId>,
    Json(data): Json<UpdateEvent>,
) -> AppResult<Json<EventResponse>> {
    let event = state.services.events.update(id, &data).await?;
    Ok(Json(event))
}

/// Delete an event with its time slots and participations
#[utoipa::path(
    delete,
    path = "/events/{id}",
    tag = "events",
    params(("id" = i64, Path, description = "Event ID")),
    responses(
        (status = 204, description = "Event deleted")
    )
)]
pub async fn delete_event(
    State(state): State<crate::AppState>,
    Path(id): Path<EventId>,
) -> AppResult<StatusCode> {
    state.services.events.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
