//! Participation endpoints for events and time slots
//!
//! Both unit kinds share the same operations; the handlers only differ in how
//! the unit is addressed.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::{
        participation::ChangeResult, CreateTimeSpan, EventId, Participation,
        ParticipationDetails, ParticipationStatus, PersonId, SetParticipation, TimeSlotId,
        UnitRef,
    },
    AppState,
};

async fn list(state: &AppState, unit: UnitRef) -> AppResult<Json<Vec<ParticipationDetails>>> {
    Ok(Json(state.services.participation.list(unit).await?))
}

async fn set(
    state: &AppState,
    unit: UnitRef,
    data: SetParticipation,
) -> AppResult<Json<Participation>> {
    let status: ParticipationStatus = data.status.parse()?;
    let participation = state
        .services
        .participation
        .set(unit, data.person_id, status)
        .await?;
    Ok(Json(participation))
}

async fn remove(state: &AppState, unit: UnitRef, person_id: PersonId) -> AppResult<Json<ChangeResult>> {
    let changed = state.services.participation.remove(unit, person_id).await?;
    Ok(Json(ChangeResult { changed }))
}

async fn add_span(
    state: &AppState,
    unit: UnitRef,
    person_id: PersonId,
    data: CreateTimeSpan,
) -> AppResult<Json<ChangeResult>> {
    let changed = state
        .services
        .participation
        .add_time_span(unit, person_id, data)
        .await?;
    Ok(Json(ChangeResult { changed }))
}

async fn remove_span(
    state: &AppState,
    unit: UnitRef,
    person_id: PersonId,
    index: usize,
) -> AppResult<Json<ChangeResult>> {
    let changed = state
        .services
        .participation
        .remove_time_span(unit, person_id, index)
        .await?;
    Ok(Json(ChangeResult { changed }))
}

/// List event-level participations
#[utoipa::path(
    get,
    path = "/events/{id}/participation",
    tag = "participation",
    params(("id" = i64, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Participations", body = Vec<ParticipationDetails>)
    )
)]
pub async fn list_event_participation(
    State(state): State<AppState>,
    Path(id): Path<EventId>,
) -> AppResult<Json<Vec<ParticipationDetails>>> {
    list(&state, UnitRef::Event(id)).await
}

/// Sign a person up for an event or change their status
#[utoipa::path(
    post,
    path = "/events/{id}/participation",
    tag = "participation",
    params(("id" = i64, Path, description = "Event ID")),
    request_body = SetParticipation,
    responses(
        (status = 200, description = "Participation after the change", body = Participation),
        (status = 400, description = "Unknown status", body = crate::error::ErrorResponse)
    )
)]
pub async fn set_event_participation(
    State(state): State<AppState>,
    Path(id): Path<EventId>,
    Json(data): Json<SetParticipation>,
) -> AppResult<Json<Participation>> {
    set(&state, UnitRef::Event(id), data).await
}

#[utoipa::path(
    delete,
    path = "/events/{id}/participation/{person_id}",
    tag = "participation",
    params(
        ("id" = i64, Path, description = "Event ID"),
        ("person_id" = i64, Path, description = "Person ID")
    ),
    responses(
        (status = 200, description = "Whether a participation was removed", body = ChangeResult)
    )
)]
pub async fn remove_event_participation(
    State(state): State<AppState>,
    Path((id, person_id)): Path<(EventId, PersonId)>,
) -> AppResult<Json<ChangeResult>> {
    remove(&state, UnitRef::Event(id), person_id).await
}

/// Log worked time on an accepted event participation
#[utoipa::path(
    post,
    path = "/events/{id}/participation/{person_id}/timespans",
    tag = "participation",
    params(
        ("id" = i64, Path, description = "Event ID"),
        ("person_id" = i64, Path, description = "Person ID")
    ),
    request_body = CreateTimeSpan,
    responses(
        (status = 200, description = "Whether the time span was logged", body = ChangeResult)
    )
)]
pub async fn add_event_time_span(
    State(state): State<AppState>,
    Path((id, person_id)): Path<(EventId, PersonId)>,
    Json(data): Json<CreateTimeSpan>,
) -> AppResult<Json<ChangeResult>> {
    add_span(&state, UnitRef::Event(id), person_id, data).await
}

#[utoipa::path(
    delete,
    path = "/events/{id}/participation/{person_id}/timespans/{index}",
    tag = "participation",
    params(
        ("id" = i64, Path, description = "Event ID"),
        ("person_id" = i64, Path, description = "Person ID"),
        ("index" = usize, Path, description = "Position of the time span")
    ),
    responses(
        (status = 200, description = "Whether a time span was removed", body = ChangeResult)
    )
)]
pub async fn remove_event_time_span(
    State(state): State<AppState>,
    Path((id, person_id, index)): Path<(EventId, PersonId, usize)>,
) -> AppResult<Json<ChangeResult>> {
    remove_span(&state, UnitRef::Event(id), person_id, index).await
}

/// List participations of a time slot
#[utoipa::path(
    get,
    path = "/events/{id}/timeslots/{slot_id}/participation",
    tag = "participation",
    params(
        ("id" = i64, Path, description = "Event ID"),
        ("slot_id" = i64, Path, description = "Time slot ID")
    ),
    responses(
        (status = 200, description = "Participations", body = Vec<ParticipationDetails>)
    )
)]
pub async fn list_slot_participation(
    State(state): State<AppState>,
    Path((id, slot_id)): Path<(EventId, TimeSlotId)>,
) -> AppResult<Json<Vec<ParticipationDetails>>> {
    list(&state, UnitRef::TimeSlot { event_id: id, slot_id }).await
}

/// Sign a person up for a time slot or change their status.
///
/// Accepting on a full slot is refused with 409.
#[utoipa::path(
    post,
    path = "/events/{id}/timeslots/{slot_id}/participation",
    tag = "participation",
    params(
        ("id" = i64, Path, description = "Event ID"),
        ("slot_id" = i64, Path, description = "Time slot ID")
    ),
    request_body = SetParticipation,
    responses(
        (status = 200, description = "Participation after the change", body = Participation),
        (status = 409, description = "Time slot is full", body = crate::error::ErrorResponse)
    )
)]
pub async fn set_slot_participation(
    State(state): State<AppState>,
    Path((id, slot_id)): Path<(EventId, TimeSlotId)>,
    Json(data): Json<SetParticipation>,
) -> AppResult<Json<Participation>> {
    set(&state, UnitRef::TimeSlot { event_id: id, slot_id }, data).await
}

#[utoipa::path(
    delete,
    path = "/events/{id}/timeslots/{slot_id}/participation/{person_id}",
    tag = "participation",
    params(
        ("id" = i64, Path, description = "Event ID"),
        ("slot_id" = i64, Path, description = "Time slot ID"),
        ("person_id" = i64, Path, description = "Person ID")
    ),
    responses(
        (status = 200, description = "Whether a participation was removed", body = ChangeResult)
    )
)]
pub async fn remove_slot_participation(
    State(state): State<AppState>,
    Path((id, slot_id, person_id)): Path<(EventId, TimeSlotId, PersonId)>,
) -> AppResult<Json<ChangeResult>> {
    remove(&state, UnitRef::TimeSlot { event_id: id, slot_id }, person_id).await
}

#[utoipa::path(
    post,
    path = "/events/{id}/timeslots/{slot_id}/participation/{person_id}/timespans",
    tag = "participation",
    params(
        ("id" = i64, Path, description = "Event ID"),
        ("slot_id" = i64, Path, description = "Time slot ID"),
        ("person_id" = i64, Path, description = "Person ID")
    ),
    request_body = CreateTimeSpan,
    responses(
        (status = 200, description = "Whether the time span was logged", body = ChangeResult)
    )
)]
pub async fn add_slot_time_span(
    State(state): State<AppState>,
    Path((id, slot_id, person_id)): Path<(EventId, TimeSlotId, PersonId)>,
    Json(data): Json<CreateTimeSpan>,
) -> AppResult<Json<ChangeResult>> {
    add_span(&state, UnitRef::TimeSlot { event_id: id, slot_id }, person_id, data).await
}

#[utoipa::path(
    delete,
    path = "/events/{id}/timeslots/{slot_id}/participation/{person_id}/timespans/{index}",
    tag = "participation",
    params(
        ("id" = i64, Path, description = "Event ID"),
        ("slot_id" = i64, Path, description = "Time slot ID"),
        ("person_id" = i64, Path, description = "Person ID"),
        ("index" = usize, Path, description = "Position of the time span")
    ),
    responses(
        (status = 200, description = "Whether a time span was removed", body = ChangeResult)
    )
)]
pub async fn remove_slot_time_span(
    State(state): State<AppState>,
    Path((id, slot_id, person_id, index)): Path<(EventId, TimeSlotId, PersonId, usize)>,
) -> AppResult<Json<ChangeResult>> {
    remove_span(&state, UnitRef::TimeSlot { event_id: id, slot_id }, person_id, index).await
}
