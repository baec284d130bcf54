//! Common test utilities for integration tests.
//!
//! Everything runs in-process against an in-memory store, so no external
//! services are required.

// Allow dead code in this module - these are helper utilities that may not be
// used by all integration tests.
#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use chrono::Utc;
use fake::faker::address::en::StreetName;
use fake::Fake;
use uuid::Uuid;

use domain::models::{Device, GuardedObject, TapeEntry, TapeState};
use guardmap_api::app::create_app;
use guardmap_api::config::{Config, LoggingConfig, MapConfig, SecurityConfig, ServerConfig};
use state::StateStore;

/// Configuration used by integration tests.
pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            request_timeout_secs: 30,
        },
        logging: LoggingConfig {
            level: "info".to_string(),
            format: "json".to_string(),
        },
        security: SecurityConfig {
            cors_origins: vec![],
        },
        map: MapConfig {
            tile_url: "https://tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            default_lat: 50.4501,
            default_lng: 30.5234,
            default_zoom: 11,
            focus_zoom: 16,
            marker_radius: 12.0,
        },
    }
}

/// Build a test application with an empty store.
pub fn create_test_app() -> Router {
    create_app(test_config(), StateStore::new())
}

/// Build a test application and keep a handle on its store for seeding.
pub fn create_test_app_with_store() -> (Router, StateStore) {
    let store = StateStore::new();
    let app = create_app(test_config(), store.clone());
    (app, store)
}

/// A device fixture.
pub fn test_device(number: i64, device_type: &str) -> Device {
    Device {
        device_id: Uuid::new_v4(),
        number,
        device_type: device_type.to_string(),
        active: true,
        last_seen_at: Some(Utc::now()),
    }
}

/// A guarded object fixture linked to the given device.
pub fn test_object(obj_id: i64, device: &Device, lat: &str, long: &str) -> GuardedObject {
    GuardedObject {
        obj_id,
        name: format!("Object {obj_id}"),
        address: Some(StreetName().fake()),
        lat: Some(lat.to_string()),
        long: Some(long.to_string()),
        device_id: Some(device.device_id),
        device_number: Some(device.number),
        device_blocked: Some(false),
    }
}

/// A guarded object fixture with no device link.
pub fn test_unlinked_object(obj_id: i64, lat: &str, long: &str) -> GuardedObject {
    GuardedObject {
        obj_id,
        name: format!("Object {obj_id}"),
        address: Some(StreetName().fake()),
        lat: Some(lat.to_string()),
        long: Some(long.to_string()),
        device_id: None,
        device_number: None,
        device_blocked: None,
    }
}

/// A tape entry fixture.
pub fn test_tape_entry(obj_id: i64, state: TapeState) -> TapeEntry {
    TapeEntry {
        obj_id,
        state,
        occurred_at: Utc::now(),
        message: None,
    }
}

/// Build a GET request.
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Build a request with a JSON body.
pub fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a DELETE request.
pub fn delete_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Read a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&bytes).expect("Response body is not valid JSON")
}
