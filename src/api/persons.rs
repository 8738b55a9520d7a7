//! Person registry and hours endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        person::HoursQuery, CreatePerson, Person, PersonHours, PersonHoursSummary, PersonId,
        UpdatePerson,
    },
};

/// List registered persons
#[utoipa::path(
    get,
    path = "/persons",
    tag = "persons",
    responses(
        (status = 200, description = "All persons", body = Vec<Person>)
    )
)]
pub async fn list_persons(State(state): State<crate::AppState>) -> Json<Vec<Person>> {
    Json(state.services.persons.list().await)
}

#[utoipa::path(
    get,
    path = "/persons/{id}",
    tag = "persons",
    params(("id" = i64, Path, description = "Person ID")),
    responses(
        (status = 200, description = "Person", body = Person),
        (status = 404, description = "Person not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_person(
    State(state): State<crate::AppState>,
    Path(id): Path<PersonId>,
) -> AppResult<Json<Person>> {
    Ok(Json(state.services.persons.get(id).await?))
}

/// Register a person
#[utoipa::path(
    post,
    path = "/persons",
    tag = "persons",
    request_body = CreatePerson,
    responses(
        (status = 201, description = "Person created", body = Person),
        (status = 400, description = "Invalid person", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_person(
    State(state): State<crate::AppState>,
    Json(data): Json<CreatePerson>,
) -> AppResult<(StatusCode, Json<Person>)> {
    let person = state.services.persons.create(data).await?;
    Ok((StatusCode::CREATED, Json(person)))
}

/// Update contact fields and manual hours
#[utoipa::path(
    put,
    path = "/persons/{id}",
    tag = "persons",
    params(("id" = i64, Path, description = "Person ID")),
    request_body = UpdatePerson,
    responses(
        (status = 200, description = "Person updated", body = Person)
    )
)]
pub async fn update_person(
    State(state): State<crate::AppState>,
    Path(id): Path<PersonId>,
    Json(data): Json<UpdatePerson>,
) -> AppResult<Json<Person>> {
    Ok(Json(state.services.persons.update(id, data).await?))
}

/// Total and approved hours of a person
#[utoipa::path(
    get,
    path = "/persons/{id}/hours",
    tag = "persons",
    params(("id" = i64, Path, description = "Person ID"), HoursQuery),
    responses(
        (status = 200, description = "Hours of the person", body = PersonHours)
    )
)]
pub async fn get_person_hours(
    State(state): State<crate::AppState>,
    Path(id): Path<PersonId>,
    Query(query): Query<HoursQuery>,
) -> AppResult<Json<PersonHours>> {
    Ok(Json(state.services.persons.hours(id, query.year).await?))
}

/// Hours of every registered person
#[utoipa::path(
    get,
    path = "/stats/hours",
    tag = "stats",
    params(HoursQuery),
    responses(
        (status = 200, description = "Hours per person", body = Vec<PersonHoursSummary>)
    )
)]
pub async fn hours_overview(
    State(state): State<crate::AppState>,
    Query(query): Query<HoursQuery>,
) -> Json<Vec<PersonHoursSummary>> {
    Json(state.services.persons.hours_overview(query.year).await)
}
