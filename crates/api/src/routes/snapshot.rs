//! State ingest endpoint handlers.
//!
//! The map view derives from already-fetched monitoring state; these
//! endpoints are where that state enters the store.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use domain::models::{Device, GuardedObject, TapeEntry};

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::record_snapshot_ingested;

/// Request payload replacing the whole state snapshot.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceSnapshotRequest {
    #[validate(nested)]
    #[serde(default)]
    pub objects: Vec<GuardedObject>,

    #[validate(nested)]
    #[serde(default)]
    pub devices: Vec<Device>,

    #[serde(default)]
    pub tape: Vec<TapeEntry>,
}

/// Response reporting what the store now holds.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotResponse {
    pub objects: usize,
    pub devices: usize,
    pub tape_entries: usize,
}

/// Request payload appending tape entries.
#[derive(Debug, Deserialize)]
pub struct AppendTapeRequest {
    pub entries: Vec<TapeEntry>,
}

/// Request payload for the loading-indicator flag.
#[derive(Debug, Deserialize)]
pub struct LoadingRequest {
    pub loading: bool,
}

/// Replace the state snapshot.
///
/// PUT /api/v1/state/snapshot
pub async fn replace_snapshot(
    State(state): State<AppState>,
    Json(request): Json<ReplaceSnapshotRequest>,
) -> Result<Json<SnapshotResponse>, ApiError> {
    request.validate()?;

    state
        .store
        .replace_snapshot(request.objects, request.devices, request.tape)
        .await;

    let (objects, devices, tape_entries) = state.store.counts().await;
    record_snapshot_ingested(objects, devices, tape_entries);

    Ok(Json(SnapshotResponse {
        objects,
        devices,
        tape_entries,
    }))
}

/// Append entries to the general tape.
///
/// POST /api/v1/state/tape
pub async fn append_tape(
    State(state): State<AppState>,
    Json(request): Json<AppendTapeRequest>,
) -> Json<SnapshotResponse> {
    state.store.append_tape(request.entries).await;

    let (objects, devices, tape_entries) = state.store.counts().await;
    Json(SnapshotResponse {
        objects,
        devices,
        tape_entries,
    })
}

/// Set the loading-indicator flag.
///
/// PUT /api/v1/state/loading
pub async fn set_loading(
    State(state): State<AppState>,
    Json(request): Json<LoadingRequest>,
) -> Json<SnapshotResponse> {
    state.store.set_loading(request.loading).await;

    let (objects, devices, tape_entries) = state.store.counts().await;
    Json(SnapshotResponse {
        objects,
        devices,
        tape_entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_snapshot_request_defaults() {
        let request: ReplaceSnapshotRequest = serde_json::from_str("{}").unwrap();
        assert!(request.objects.is_empty());
        assert!(request.devices.is_empty());
        assert!(request.tape.is_empty());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_replace_snapshot_request_validates_devices() {
        let json = r#"{
            "devices": [{
                "deviceId": "550e8400-e29b-41d4-a716-446655440000",
                "number": 0,
                "type": "panel"
            }]
        }"#;
        let request: ReplaceSnapshotRequest = serde_json::from_str(json).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_replace_snapshot_request_validates_objects() {
        let json = r#"{"objects": [{"objId": 1, "name": ""}]}"#;
        let request: ReplaceSnapshotRequest = serde_json::from_str(json).unwrap();
        assert!(request.validate().is_err());
    }
}
