//! Shared helpers for router tests

#![allow(dead_code)]

use std::path::Path;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use hamro_vacation_web::cache::PageCache;
use hamro_vacation_web::pricing::Catalog;
use hamro_vacation_web::site::Site;
use hamro_vacation_web::{app, AppState};

/// Catalog with the round numbers used in the worked example
pub const EXAMPLE_CATALOG: &str = r#"{
    "tiers": [
        { "id": "premium", "name": "Premium", "hotel_per_night": 100,
          "vehicle_per_day": 50, "guide_per_day": 30 },
        { "id": "luxury", "name": "Luxury", "hotel_per_night": 250,
          "vehicle_per_day": 120, "guide_per_day": 60 }
    ],
    "activities": [
        { "id": "rafting", "name": "Rafting", "price_per_person": 40 },
        { "id": "safari", "name": "Safari", "price_per_person": 60 }
    ]
}"#;

pub fn example_catalog() -> Catalog {
    Catalog::from_json_str(EXAMPLE_CATALOG).expect("example catalog is valid")
}

pub fn test_app(catalog: Catalog, static_dir: &Path) -> Router {
    let state = AppState::new(catalog, Site::builtin(), PageCache::new(Duration::from_secs(60)));
    app(state, static_dir)
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("valid request");
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, json: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .expect("valid request");
    send(app, request).await
}
