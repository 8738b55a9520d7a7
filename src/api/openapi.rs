//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{events, health, participation, persons, time_slots};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Helferplan API",
        version = "0.1.0",
        description = "Volunteer participation and hours tracking REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api", description = "Helferplan API")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Persons
        persons::list_persons,
        persons::get_person,
        persons::create_person,
        persons::update_person,
        persons::get_person_hours,
        persons::hours_overview,
        // Events
        events::list_events,
        events::get_event,
        events::create_event,
        events::update_event,
        events::delete_event,
        // Time slots
        time_slots::list_time_slots,
        time_slots::get_time_slot,
        time_slots::create_time_slots,
        time_slots::update_time_slot,
        time_slots::delete_time_slot,
        // Participation
        participation::list_event_participation,
        participation::set_event_participation,
        participation::remove_event_participation,
        participation::add_event_time_span,
        participation::remove_event_time_span,
        participation::list_slot_participation,
        participation::set_slot_participation,
        participation::remove_slot_participation,
        participation::add_slot_time_span,
        participation::remove_slot_time_span,
    ),
    components(
        schemas(
            // Persons
            crate::models::Person,
            crate::models::CreatePerson,
            crate::models::UpdatePerson,
            crate::models::PersonHours,
            crate::models::PersonHoursSummary,
            // Events
            crate::models::EventStatus,
            crate::models::CreateEvent,
            crate::models::UpdateEvent,
            crate::models::EventResponse,
            // Time slots
            crate::models::CreateTimeSlot,
            crate::models::UpdateTimeSlot,
            crate::models::TimeSlotResponse,
            // Participation
            crate::models::ParticipationStatus,
            crate::models::Participation,
            crate::models::ParticipationDetails,
            crate::models::SetParticipation,
            crate::models::TimeSpan,
            crate::models::CreateTimeSpan,
            crate::models::participation::ChangeResult,
            // Health
            health::HealthResponse,
            health::ReadinessResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "persons", description = "Person registry and hours"),
        (name = "events", description = "Event management"),
        (name = "timeslots", description = "Time slot management"),
        (name = "participation", description = "Sign-ups, status changes and logged time"),
        (name = "stats", description = "Hours statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
