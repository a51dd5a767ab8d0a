//! Integration Tests for API Endpoints
//!
//! Tests the full request/response cycle for each endpoint, including
//! the cache invalidation visible through the forecast routes.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use weather_api::repository::MemoryRepository;
use weather_api::{create_router, AppState, ForecastCache};

// == Helper Functions ==

fn create_test_app() -> Router {
    let repo = Arc::new(MemoryRepository::new());
    let cache = ForecastCache::new(Duration::from_secs(3600));
    create_router(AppState::new(repo, cache))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn put(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn forecast_body(id: &str, location_id: &str, temperature: f64) -> Value {
    json!({
        "id": id,
        "locationId": location_id,
        "temperature": temperature,
        "humidity": 40.0,
        "windSpeed": 15.0,
        "date": "2025-11-08"
    })
}

fn alert_body(id: &str, location_id: &str) -> Value {
    json!({
        "id": id,
        "locationId": location_id,
        "type": "Storm",
        "description": "Severe thunderstorm approaching",
        "severity": "High",
        "startTime": "2025-11-08T10:00:00Z",
        "endTime": "2025-11-08T18:00:00Z"
    })
}

// == Health Endpoint ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "healthy");
}

// == Forecast Endpoints ==

#[tokio::test]
async fn test_create_forecast_returns_201() {
    let app = create_test_app();

    let response = app
        .oneshot(post("/api/v1/forecasts", forecast_body("f1", "loc1", 20.0)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "success");
    assert_eq!(json["data"]["id"], "f1");
    assert_eq!(json["data"]["locationId"], "loc1");
}

#[tokio::test]
async fn test_create_forecast_generates_id() {
    let app = create_test_app();

    let response = app
        .oneshot(post(
            "/api/v1/forecasts",
            json!({"locationId": "loc1", "temperature": 20.0, "humidity": 40.0, "windSpeed": 15.0}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_to_json(response.into_body()).await;
    assert!(json["data"]["id"].as_str().is_some_and(|id| !id.is_empty()));
}

#[tokio::test]
async fn test_create_forecast_missing_field_returns_400() {
    let app = create_test_app();

    let response = app
        .oneshot(post(
            "/api/v1/forecasts",
            json!({"locationId": "loc1", "temperature": 20.0}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "error");
    assert_eq!(json["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_get_forecast_by_id() {
    let app = create_test_app();

    app.clone()
        .oneshot(post("/api/v1/forecasts", forecast_body("f1", "loc1", 20.0)))
        .await
        .unwrap();

    let response = app.oneshot(get("/api/v1/forecasts/f1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["data"]["temperature"], 20.0);
}

#[tokio::test]
async fn test_get_forecast_not_found() {
    let app = create_test_app();

    let response = app.oneshot(get("/api/v1/forecasts/ghost")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "error");
    assert_eq!(json["error"], "NOT_FOUND");
}

// Listing stays correct across writes even though reads are served
// through the cache: each create invalidates the collection key.
#[tokio::test]
async fn test_forecast_listing_reflects_writes_through_cache() {
    let app = create_test_app();

    app.clone()
        .oneshot(post("/api/v1/forecasts", forecast_body("f1", "loc1", 20.0)))
        .await
        .unwrap();

    // First listing populates the cache
    let response = app.clone().oneshot(get("/api/v1/forecasts")).await.unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    // Second listing is served from cache with identical data
    let response = app.clone().oneshot(get("/api/v1/forecasts")).await.unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    // A create must invalidate the cached listing
    app.clone()
        .oneshot(post("/api/v1/forecasts", forecast_body("f2", "loc1", 22.0)))
        .await
        .unwrap();

    let response = app.oneshot(get("/api/v1/forecasts")).await.unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_forecast_merges_fields() {
    let app = create_test_app();

    app.clone()
        .oneshot(post("/api/v1/forecasts", forecast_body("f1", "loc1", 20.0)))
        .await
        .unwrap();

    // Prime the per-record cache entry
    app.clone()
        .oneshot(get("/api/v1/forecasts/f1"))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(put("/api/v1/forecasts/f1", json!({"temperature": 25.0})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["data"]["temperature"], 25.0);
    assert_eq!(json["data"]["humidity"], 40.0);

    // The stale record entry must not be served after the update
    let response = app.oneshot(get("/api/v1/forecasts/f1")).await.unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["data"]["temperature"], 25.0);
}

#[tokio::test]
async fn test_update_forecast_not_found() {
    let app = create_test_app();

    let response = app
        .oneshot(put("/api/v1/forecasts/ghost", json!({"temperature": 1.0})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_forecast() {
    let app = create_test_app();

    app.clone()
        .oneshot(post("/api/v1/forecasts", forecast_body("f1", "loc1", 20.0)))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(delete("/api/v1/forecasts/f1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["data"], true);

    // Deleted records are gone from cache and store alike
    let response = app.oneshot(get("/api/v1/forecasts/f1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_forecasts_by_location() {
    let app = create_test_app();

    app.clone()
        .oneshot(post("/api/v1/forecasts", forecast_body("f1", "loc1", 20.0)))
        .await
        .unwrap();
    app.clone()
        .oneshot(post("/api/v1/forecasts", forecast_body("f2", "loc2", 10.0)))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(get("/api/v1/forecasts/location/loc1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"], "f1");
}

#[tokio::test]
async fn test_forecasts_by_location_empty_returns_404() {
    let app = create_test_app();

    let response = app
        .oneshot(get("/api/v1/forecasts/location/nowhere"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// == Alert Endpoints ==

#[tokio::test]
async fn test_alert_crud_flow() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(post("/api/v1/alerts", alert_body("a1", "loc1")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.clone().oneshot(get("/api/v1/alerts/a1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["data"]["type"], "Storm");
    assert_eq!(json["data"]["severity"], "High");

    let response = app
        .clone()
        .oneshot(put("/api/v1/alerts/a1", json!({"severity": "Critical"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["data"]["severity"], "Critical");

    let response = app
        .clone()
        .oneshot(delete("/api/v1/alerts/a1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/api/v1/alerts/a1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_alert_missing_field_returns_400() {
    let app = create_test_app();

    let response = app
        .oneshot(post(
            "/api/v1/alerts",
            json!({"locationId": "loc1", "type": "Rain"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_alerts_by_location() {
    let app = create_test_app();

    app.clone()
        .oneshot(post("/api/v1/alerts", alert_body("a1", "loc1")))
        .await
        .unwrap();
    app.clone()
        .oneshot(post("/api/v1/alerts", alert_body("a2", "loc2")))
        .await
        .unwrap();

    let response = app
        .oneshot(get("/api/v1/alerts/location/loc2"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

// == Location Endpoints ==

#[tokio::test]
async fn test_location_crud_flow() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(post(
            "/api/v1/locations",
            json!({"id": "loc1", "name": "Paris", "country": "France", "latitude": 48.8, "longitude": 2.3}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(get("/api/v1/locations"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let response = app
        .clone()
        .oneshot(put("/api/v1/locations/loc1", json!({"name": "Lyon"})))
        .await
        .unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["data"]["name"], "Lyon");
    assert_eq!(json["data"]["country"], "France");

    let response = app
        .clone()
        .oneshot(delete("/api/v1/locations/loc1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/api/v1/locations/loc1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_location_missing_fields_returns_400() {
    let app = create_test_app();

    let response = app
        .oneshot(post(
            "/api/v1/locations",
            json!({"name": "Paris", "country": "France"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
