//! API integration tests
//!
//! The router is driven in-process, no listening socket needed.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use helferplan_server::{
    api, config::AppConfig, repository::Repository, services::Services, AppState,
};

fn app(repository: Repository) -> Router {
    api::create_router(AppState {
        config: Arc::new(AppConfig::default()),
        services: Arc::new(Services::new(repository)),
    })
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app.clone().oneshot(request).await.expect("Request failed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response")
    };
    (status, body)
}

async fn create_person(app: &Router, first: &str, last: &str) -> i64 {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/persons",
        Some(json!({ "firstName": first, "lastName": last })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().expect("No person id")
}

/// Event on 2025-01-12 with one Parcour slot, returns (event id, slot id)
async fn create_tournament(app: &Router, max: u32) -> (i64, i64) {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/events",
        Some(json!({
            "name": "Reitturnier",
            "dateFrom": "2025-01-12",
            "timeSlots": [{
                "name": "Parcour",
                "category": "Parcour",
                "timeFrom": "08:00",
                "timeTo": "10:00",
                "maxParticipants": max
            }]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    (
        body["id"].as_i64().expect("No event id"),
        body["timeSlots"][0]["id"].as_i64().expect("No slot id"),
    )
}

#[tokio::test]
async fn test_health_check() {
    let app = app(Repository::in_memory());

    let (status, body) = send(&app, Method::GET, "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(&app, Method::GET, "/api/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["persons"], 0);
}

#[tokio::test]
async fn test_person_validation() {
    let app = app(Repository::in_memory());
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/persons",
        Some(json!({ "firstName": "Anna", "lastName": "Schmidt", "email": "not-an-email" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");

    let (status, body) = send(&app, Method::GET, "/api/persons/77", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchPerson");
}

#[tokio::test]
async fn test_full_slot_rejects_acceptance() {
    let app = app(Repository::in_memory());
    let (event_id, slot_id) = create_tournament(&app, 1).await;
    let anna = create_person(&app, "Anna", "Schmidt").await;
    let lisa = create_person(&app, "Lisa", "Wagner").await;
    let uri = format!("/api/events/{}/timeslots/{}/participation", event_id, slot_id);

    let (status, body) = send(
        &app,
        Method::POST,
        &uri,
        Some(json!({ "personId": anna, "status": "accepted" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "accepted");

    let (status, body) = send(
        &app,
        Method::POST,
        &uri,
        Some(json!({ "personId": lisa, "status": "accepted" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "SlotFull");

    let (_, slot) = send(
        &app,
        Method::GET,
        &format!("/api/events/{}/timeslots/{}", event_id, slot_id),
        None,
    )
    .await;
    assert_eq!(slot["acceptedCount"], 1);
    assert_eq!(slot["availableSpots"], 0);
    assert_eq!(slot["isFull"], true);

    let (status, body) = send(&app, Method::DELETE, &format!("{}/{}", uri, anna), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["changed"], true);
    let (_, body) = send(&app, Method::DELETE, &format!("{}/{}", uri, anna), None).await;
    assert_eq!(body["changed"], false);
}

#[tokio::test]
async fn test_unknown_status_is_rejected() {
    let app = app(Repository::in_memory());
    let (event_id, _) = create_tournament(&app, 2).await;
    let anna = create_person(&app, "Anna", "Schmidt").await;

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/events/{}/participation", event_id),
        Some(json!({ "personId": anna, "status": "maybe" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadStatus");
}

#[tokio::test]
async fn test_time_span_without_sign_up() {
    let app = app(Repository::in_memory());
    let (event_id, _) = create_tournament(&app, 2).await;
    let anna = create_person(&app, "Anna", "Schmidt").await;

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/events/{}/participation/{}/timespans", event_id, anna),
        Some(json!({ "date": "2025-01-12", "timeFrom": "08:00", "timeTo": "09:00" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchParticipation");

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/events/{}/participation/{}/timespans", event_id, anna + 100),
        Some(json!({ "date": "2025-01-12", "timeFrom": "08:00", "timeTo": "09:00" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchPerson");
}

#[tokio::test]
async fn test_logged_time_and_hours() {
    let app = app(Repository::in_memory());
    let (event_id, slot_id) = create_tournament(&app, 2).await;
    let anna = create_person(&app, "Anna", "Schmidt").await;
    let participation = format!("/api/events/{}/participation", event_id);

    send(
        &app,
        Method::POST,
        &participation,
        Some(json!({ "personId": anna, "status": "accepted" })),
    )
    .await;
    let (status, body) = send(
        &app,
        Method::POST,
        &format!("{}/{}/timespans", participation, anna),
        Some(json!({ "date": "2025-01-12", "timeFrom": "13:00", "timeTo": "15:30" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["changed"], true);

    // Accepted slot without logged time credits the planned two hours
    send(
        &app,
        Method::POST,
        &format!("/api/events/{}/timeslots/{}/participation", event_id, slot_id),
        Some(json!({ "personId": anna, "status": "accepted" })),
    )
    .await;

    let (status, hours) = send(&app, Method::GET, &format!("/api/persons/{}/hours", anna), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(hours["totalHours"], 4.5);
    assert_eq!(hours["approvedHours"], 4.5);

    let (_, hours) = send(
        &app,
        Method::GET,
        &format!("/api/persons/{}/hours?year=2024", anna),
        None,
    )
    .await;
    assert_eq!(hours["totalHours"], 0.0);

    let (status, body) = send(
        &app,
        Method::DELETE,
        &format!("{}/{}/timespans/0", participation, anna),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["changed"], true);

    let (_, overview) = send(&app, Method::GET, "/api/stats/hours", None).await;
    assert_eq!(overview[0]["fullName"], "Anna Schmidt");
    assert_eq!(overview[0]["totalHours"], 2.0);
}

#[tokio::test]
async fn test_slot_batch_is_merged() {
    let app = app(Repository::in_memory());
    let (event_id, _) = create_tournament(&app, 2).await;

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/events/{}/timeslots", event_id),
        Some(json!([
            { "name": "Meldestelle", "category": "Meldestelle", "timeFrom": "07:00", "timeTo": "12:00", "maxParticipants": 2 },
            { "name": "Meldestelle", "category": "Meldestelle", "timeFrom": "12:00", "timeTo": "17:00", "maxParticipants": 2 }
        ])),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let created = body.as_array().expect("Expected a list");
    assert_eq!(created.len(), 1);
    assert_eq!(created[0]["timeFrom"], "07:00");
    assert_eq!(created[0]["timeTo"], "17:00");
    assert_eq!(created[0]["maxParticipants"], 4);
    assert_eq!(created[0]["date"], "2025-01-12");
}

#[tokio::test]
async fn test_sample_data_and_event_order() {
    let repository = Repository::in_memory();
    repository
        .seed_sample_data()
        .await
        .expect("Failed to seed sample data");
    let app = app(repository);

    let (_, events) = send(&app, Method::GET, "/api/events", None).await;
    let dates: Vec<&str> = events
        .as_array()
        .expect("Expected a list")
        .iter()
        .filter_map(|e| e["dateFrom"].as_str())
        .collect();
    let mut sorted = dates.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(dates, sorted);

    let (_, persons) = send(&app, Method::GET, "/api/persons", None).await;
    let maria = persons
        .as_array()
        .expect("Expected a list")
        .iter()
        .find(|p| p["firstName"] == "Maria")
        .and_then(|p| p["id"].as_i64())
        .expect("Maria missing from sample data");

    let (_, hours) = send(&app, Method::GET, &format!("/api/persons/{}/hours", maria), None).await;
    assert_eq!(hours["totalHours"], 16.0);
}

#[tokio::test]
async fn test_openapi_document() {
    let app = app(Repository::in_memory());
    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/events/{id}/timeslots"].is_object());
}
