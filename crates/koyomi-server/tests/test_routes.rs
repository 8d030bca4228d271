//! In-process tests of the REST API against the in-memory event store.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use koyomi_core::Locale;
use koyomi_events::InMemoryEventRepository;
use koyomi_server::rest::create_router;
use koyomi_server::AppState;
use serde_json::{json, Value};
use tower::ServiceExt;

const ORIGIN: &str = "http://localhost:3000";

fn app_with_locale(locale: Locale) -> Router {
    let state = Arc::new(AppState::new(
        Arc::new(InMemoryEventRepository::new()),
        locale,
    ));
    create_router(state, &[ORIGIN.to_string()])
}

fn app() -> Router {
    app_with_locale(Locale::Ja)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn with_json(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

async fn send_json(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let (status, body) = send(app, req).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, value)
}

fn trip() -> Value {
    json!({
        "title": "Kyoto trip",
        "description": "shinkansen",
        "start_date": "2025-03-10T18:00:00Z",
        "end_date": "2025-03-12T08:00:00Z",
        "all_day": false
    })
}

#[tokio::test]
async fn health() {
    let (status, body) = send(&app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"OK");
}

#[tokio::test]
async fn calendar_month() {
    let (status, cal) = send_json(&app(), get("/api/calendar/2025/12")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cal["year"], 2025);
    assert_eq!(cal["month"], 12);
    let days = cal["days"].as_array().unwrap();
    assert_eq!(days.len(), 31);
    assert_eq!(days[0]["date"], "2025-12-01");
    assert_eq!(days[0]["weekday"], "月");
    assert_eq!(days[0]["is_holiday"], false);
    assert!(days[0].get("holiday").is_none());
    assert_eq!(days[0]["events"], json!([]));
}

#[tokio::test]
async fn calendar_in_english() {
    let (status, cal) = send_json(&app_with_locale(Locale::En), get("/api/calendar/2025/1")).await;
    assert_eq!(status, StatusCode::OK);
    let first = &cal["days"][0];
    assert_eq!(first["weekday"], "Wednesday");
    assert_eq!(first["holiday"], "New Year's Day");
    assert_eq!(first["rokuyo"], "Sensho");
}

#[tokio::test]
async fn calendar_rejects_bad_path() {
    let app = app();
    let (status, body) = send_json(&app, get("/api/calendar/abc/1")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid year");
    assert_eq!(body["code"], 400);

    let (status, body) = send_json(&app, get("/api/calendar/2025/x")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid month");

    for uri in ["/api/calendar/2025/0", "/api/calendar/2025/13", "/api/calendar/0/1"] {
        let (status, _) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[tokio::test]
async fn holidays_for_year() {
    let app = app();
    let (status, list) = send_json(&app, get("/api/holidays/2025")).await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 16);
    assert_eq!(list[0], json!({"date": "2025-01-01", "name": "元日"}));
    let dates: Vec<&str> = list.iter().map(|h| h["date"].as_str().unwrap()).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);

    let (status, _) = send(&app, get("/api/holidays/twenty")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = send(&app, get("/api/holidays/10000")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn event_lifecycle() {
    let app = app();

    let (status, created) = send_json(&app, with_json(Method::POST, "/api/events", &trip())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);
    assert_eq!(created["title"], "Kyoto trip");

    let (status, fetched) = send_json(&app, get("/api/events/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (_, all) = send_json(&app, get("/api/events")).await;
    assert_eq!(all.as_array().unwrap().len(), 1);

    let mut edited = trip();
    edited["title"] = json!("Osaka trip");
    let (status, updated) = send_json(&app, with_json(Method::PUT, "/api/events/1", &edited)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "Osaka trip");
    assert_eq!(updated["created_at"], created["created_at"]);

    let (status, body) = send(&app, delete("/api/events/1")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (status, _) = send(&app, delete("/api/events/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, body) = send_json(&app, get("/api/events/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
}

#[tokio::test]
async fn events_are_merged_into_calendar() {
    let app = app();
    let (status, _) = send(&app, with_json(Method::POST, "/api/events", &trip())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, cal) = send_json(&app, get("/api/calendar/2025/3")).await;
    let titles_on = |day: usize| -> Vec<String> {
        cal["days"][day - 1]["events"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["title"].as_str().unwrap().to_string())
            .collect()
    };
    assert!(titles_on(9).is_empty());
    assert_eq!(titles_on(10), ["Kyoto trip"]);
    assert_eq!(titles_on(11), ["Kyoto trip"]);
    assert_eq!(titles_on(12), ["Kyoto trip"]);
    assert!(titles_on(13).is_empty());

    let (_, april) = send_json(&app, get("/api/calendar/2025/4")).await;
    assert!(april["days"]
        .as_array()
        .unwrap()
        .iter()
        .all(|d| d["events"].as_array().unwrap().is_empty()));
}

#[tokio::test]
async fn invalid_event_payloads() {
    let app = app();

    let mut blank = trip();
    blank["title"] = json!("  ");
    let (status, _) = send(&app, with_json(Method::POST, "/api/events", &blank)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut reversed = trip();
    reversed["end_date"] = json!("2025-03-01T00:00:00Z");
    let (status, _) = send(&app, with_json(Method::POST, "/api/events", &reversed)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let malformed = Request::builder()
        .method(Method::POST)
        .uri("/api/events")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send_json(&app, malformed).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);

    let (status, _) = send(&app, with_json(Method::PUT, "/api/events/1", &reversed)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = send(&app, with_json(Method::PUT, "/api/events/1", &trip())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, get("/api/events/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, all) = send_json(&app, get("/api/events")).await;
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn cors_preflight() {
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/events")
        .header(header::ORIGIN, ORIGIN)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();
    assert!(resp.status().is_success());
    let headers = resp.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], ORIGIN);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");

    let req = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "http://evil.example")
        .body(Body::empty())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();
    assert!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}
