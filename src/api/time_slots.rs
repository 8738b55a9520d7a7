//! Time slot endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{CreateTimeSlot, EventId, TimeSlotId, TimeSlotResponse, UpdateTimeSlot},
};

#[utoipa::path(
    get,
    path = "/events/{id}/timeslots",
    tag = "timeslots",
    params(("id" = i64, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Time slots of the event", body = Vec<TimeSlotResponse>)
    )
)]
pub async fn list_time_slots(
    State(state): State<crate::AppState>,
    Path(id): Path<EventId>,
) -> AppResult<Json<Vec<TimeSlotResponse>>> {
    Ok(Json(state.services.time_slots.list(id).await?))
}

#[utoipa::path(
    get,
    path = "/events/{id}/timeslots/{slot_id}",
    tag = "timeslots",
    params(
        ("id" = i64, Path, description = "Event ID"),
        ("slot_id" = i64, Path, description = "Time slot ID")
    ),
    responses(
        (status = 200, description = "Time slot", body = TimeSlotResponse),
        (status = 404, description = "Event or time slot not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_time_slot(
    State(state): State<crate::AppState>,
    Path((id, slot_id)): Path<(EventId, TimeSlotId)>,
) -> AppResult<Json<TimeSlotResponse>> {
    Ok(Json(state.services.time_slots.get(id, slot_id).await?))
}

/// Create a batch of time slots.
///
/// Slots of the batch sharing category and date are merged into one.
#[utoipa::path(
    post,
    path = "/events/{id}/timeslots",
    tag = "timeslots",
    params(("id" = i64, Path, description = "Event ID")),
    request_body = Vec<CreateTimeSlot>,
    responses(
        (status = 201, description = "Created time slots", body = Vec<TimeSlotResponse>)
    )
)]
pub async fn create_time_slots(
    State(state): State<crate::AppState>,
    Path(id): Path<EventId>,
    Json(data): Json<Vec<CreateTimeSlot>>,
) -> AppResult<(StatusCode, Json<Vec<TimeSlotResponse>>)> {
    let slots = state.services.time_slots.create(id, &data).await?;
    Ok((StatusCode::CREATED, Json(slots)))
}

#[utoipa::path(
    put,
    path = "/events/{id}/timeslots/{slot_id}",
    tag = "timeslots",
    params(
        ("id" = i64, Path, description = "Event ID"),
        ("slot_id" = i64, Path, description = "Time slot ID")
    ),
    request_body = UpdateTimeSlot,
    responses(
        (status = 200, description = "Time slot updated", body = TimeSlotResponse)
    )
)]
pub async fn update_time_slot(
    State(state): State<crate::AppState>,
    Path((id, slot_id)): Path<(EventId, TimeSlotId)>,
    Json(data): Json<UpdateTimeSlot>,
) -> AppResult<Json<TimeSlotResponse>> {
    Ok(Json(state.services.time_slots.update(id, slot_id, &data).await?))
}

#[utoipa::path(
    delete,
    path = "/events/{id}/timeslots/{slot_id}",
    tag = "timeslots",
    params(
        ("id" = i64, Path, description = "Event ID"),
        ("slot_id" = i64, Path, description = "Time slot ID")
    ),
    responses(
        (status = 204, description = "Time slot deleted")
    )
)]
pub async fn delete_time_slot(
    State(state): State<crate::AppState>,
    Path((id, slot_id)): Path<(EventId, TimeSlotId)>,
) -> AppResult<StatusCode> {
    state.services.time_slots.delete(id, slot_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
