//! Health check endpoint handlers.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::app::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub state: StateHealth,
}

/// Sizes of the held state collections.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct StateHealth {
    pub objects: usize,
    pub devices: usize,
    pub tape_entries: usize,
}

/// Simple status response for liveness/readiness probes.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Full health check endpoint.
///
/// The store is in-process, so the service is healthy whenever it answers;
/// the response reports what the store currently holds.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let (objects, devices, tape_entries) = state.store.counts().await;

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        state: StateHealth {
            objects,
            devices,
            tape_entries,
        },
    })
}

/// Liveness probe endpoint.
///
/// Returns 200 OK if the process is running.
pub async fn live() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "alive".to_string(),
    })
}

/// Readiness probe endpoint.
///
/// Returns 200 OK once the store answers.
pub async fn ready(State(state): State<AppState>) -> Json<StatusResponse> {
    state.store.counts().await;

    Json(StatusResponse {
        status: "ready".to_string(),
    })
}
