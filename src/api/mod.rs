//! API handlers for Helferplan REST endpoints

pub mod events;
pub mod health;
pub mod openapi;
pub mod participation;
pub mod persons;
pub mod time_slots;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Persons
        .route("/persons", get(persons::list_persons).post(persons::create_person))
        .route("/persons/:id", get(persons::get_person).put(persons::update_person))
        .route("/persons/:id/hours", get(persons::get_person_hours))
        .route("/stats/hours", get(persons::hours_overview))
        // Events
        .route("/events", get(events::list_events).post(events::create_event))
        .route(
            "/events/:id",
            get(events::get_event)
                .put(events::update_event)
                .delete(events::delete_event),
        )
        .route(
            "/events/:id/participation",
            get(participation::list_event_participation)
                .post(participation::set_event_participation),
        )
        .route(
            "/events/:id/participation/:person_id",
            delete(participation::remove_event_participation),
        )
        .route(
            "/events/:id/participation/:person_id/timespans",
            post(participation::add_event_time_span),
        )
        .route(
            "/events/:id/participation/:person_id/timespans/:index",
            delete(participation::remove_event_time_span),
        )
        // Time slots
        .route(
            "/events/:id/timeslots",
            get(time_slots::list_time_slots).post(time_slots::create_time_slots),
        )
        .route(
            "/events/:id/timeslots/:slot_id",
            get(time_slots::get_time_slot)
                .put(time_slots::update_time_slot)
                .delete(time_slots::delete_time_slot),
        )
        .route(
            "/events/:id/timeslots/:slot_id/participation",
            get(participation::list_slot_participation)
                .post(participation::set_slot_participation),
        )
        .route(
            "/events/:id/timeslots/:slot_id/participation/:person_id",
            delete(participation::remove_slot_participation),
        )
        .route(
            "/events/:id/timeslots/:slot_id/participation/:person_id/timespans",
            post(participation::add_slot_time_span),
        )
        .route(
            "/events/:id/timeslots/:slot_id/participation/:person_id/timespans/:index",
            delete(participation::remove_slot_time_span),
        )
        .with_state(state);

    Router::new()
        .nest("/api", api)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
