// HTTP tests for the events service
// Drives the full router in-process; no listener or network needed.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use multiapp_events::{router, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

struct TestResponse {
    status: StatusCode,
    location: Option<String>,
    body: Value,
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    TestResponse {
        status,
        location,
        body,
    }
}

fn app() -> Router {
    router(AppState::seeded())
}

fn demo() -> Value {
    json!({
        "name": "Demo",
        "date": "2024-06-01",
        "location": "Austin",
        "attendees": 42
    })
}

fn ids(body: &Value) -> Vec<i64> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_health() {
    let app = app();
    let res = send(&app, Method::GET, "/health", None).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["status"], "healthy");
    assert_eq!(res.body["service"], "multiapp-events");
    assert!(res.body["timestamp"].is_string());
}

#[tokio::test]
async fn test_list_returns_seeded_events() {
    let app = app();
    let res = send(&app, Method::GET, "/api/events", None).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(ids(&res.body), vec![1, 2, 3]);
    assert_eq!(res.body[0]["name"], "Tech Conference 2024");
    assert_eq!(res.body[2]["attendees"], 1200);
}

#[tokio::test]
async fn test_create_demo_event() {
    let app = app();
    let res = send(&app, Method::POST, "/api/events", Some(demo())).await;

    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.location.as_deref(), Some("/api/events/4"));
    assert_eq!(res.body["id"], 4);
    assert_eq!(res.body["name"], "Demo");
    assert_eq!(res.body["date"], "2024-06-01");
    assert_eq!(res.body["location"], "Austin");
    assert_eq!(res.body["attendees"], 42);
    assert!(res.body["created_at"].is_string());

    let fetched = send(&app, Method::GET, "/api/events/4", None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body, res.body);
}

#[tokio::test]
async fn test_create_rejects_malformed_payload() {
    let app = app();

    let res = send(
        &app,
        Method::POST,
        "/api/events",
        Some(json!({ "name": "Demo", "date": "2024-06-01", "location": "Austin" })),
    )
    .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert!(res.body["error"].as_str().unwrap().contains("attendees"));

    let res = send(
        &app,
        Method::POST,
        "/api/events",
        Some(json!({ "name": "Demo", "date": "2024-06-01", "location": "Austin", "attendees": "lots" })),
    )
    .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);

    let list = send(&app, Method::GET, "/api/events", None).await;
    assert_eq!(ids(&list.body), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_create_rejects_invalid_json() {
    let app = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/events")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_get_unknown_and_invalid_ids() {
    let app = app();

    let res = send(&app, Method::GET, "/api/events/99", None).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body["error"], "Event not found");

    let res = send(&app, Method::GET, "/api/events/abc", None).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["error"], "Invalid event ID");
}

#[tokio::test]
async fn test_update_replaces_whole_record() {
    let app = app();
    let res = send(
        &app,
        Method::PUT,
        "/api/events/2",
        Some(json!({
            "name": "Platform Day",
            "date": "2024-09-09",
            "location": "Denver",
            "attendees": 80
        })),
    )
    .await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["id"], 2);
    assert_eq!(res.body["name"], "Platform Day");
    assert_eq!(res.body["location"], "Denver");
    assert_eq!(res.body["attendees"], 80);
    assert!(res.body["updated_at"].is_string());

    let list = send(&app, Method::GET, "/api/events", None).await;
    assert_eq!(ids(&list.body), vec![1, 2, 3]);
    assert_eq!(list.body[1]["name"], "Platform Day");
}

#[tokio::test]
async fn test_update_created_event_drops_created_at() {
    let app = app();
    send(&app, Method::POST, "/api/events", Some(demo())).await;

    let res = send(
        &app,
        Method::PUT,
        "/api/events/4",
        Some(json!({
            "name": "Demo 2",
            "date": "2024-07-01",
            "location": "Dallas",
            "attendees": 10
        })),
    )
    .await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.get("created_at").is_none());
    assert!(res.body["updated_at"].is_string());
}

#[tokio::test]
async fn test_update_missing_and_malformed() {
    let app = app();

    let res = send(&app, Method::PUT, "/api/events/99", Some(demo())).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    let res = send(&app, Method::PUT, "/api/events/99", Some(json!({}))).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    let res = send(&app, Method::PUT, "/api/events/1", Some(json!({ "name": "Only" }))).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);

    let original = send(&app, Method::GET, "/api/events/1", None).await;
    assert_eq!(original.body["name"], "Tech Conference 2024");
}

#[tokio::test]
async fn test_delete_then_get_and_delete_again() {
    let app = app();

    let res = send(&app, Method::DELETE, "/api/events/1", None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["message"], "Event deleted successfully");

    let res = send(&app, Method::GET, "/api/events/1", None).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    let res = send(&app, Method::DELETE, "/api/events/1", None).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    // Later records keep their identifiers.
    let res = send(&app, Method::GET, "/api/events/3", None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["name"], "Cloud Summit");
}

#[tokio::test]
async fn test_list_tracks_creates_and_deletes_in_order() {
    let app = app();

    send(&app, Method::POST, "/api/events", Some(demo())).await;
    send(&app, Method::DELETE, "/api/events/2", None).await;
    let created = send(&app, Method::POST, "/api/events", Some(demo())).await;
    assert_eq!(created.body["id"], 5);

    let list = send(&app, Method::GET, "/api/events", None).await;
    assert_eq!(ids(&list.body), vec![1, 3, 4, 5]);
}

#[tokio::test]
async fn test_unmatched_route() {
    let app = app();
    let res = send(&app, Method::GET, "/api/nothing", None).await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body["error"], "Route not found");
}

#[tokio::test]
async fn test_unrouted_method_on_known_path() {
    let app = app();

    let res = send(&app, Method::PATCH, "/api/events/1", Some(demo())).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body["error"], "Route not found");

    let res = send(&app, Method::DELETE, "/api/events", None).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body["error"], "Route not found");

    let original = send(&app, Method::GET, "/api/events/1", None).await;
    assert_eq!(original.body["name"], "Tech Conference 2024");
}

#[tokio::test]
async fn test_openapi_document_served() {
    let app = app();
    let res = send(&app, Method::GET, "/api-doc/openapi.json", None).await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body["paths"]["/api/events"].is_object());
}
