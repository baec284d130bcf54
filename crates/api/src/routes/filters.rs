//! Filter intent endpoint handlers.
//!
//! These three endpoints are the only mutation path into the shared map
//! filter; the map surface forwards operator input here verbatim.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use domain::models::MapFilter;
use state::{FilterName, SetFilter, UnknownFilterName};

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::record_filter_intent;

/// Response carrying the filter after an intent was applied.
#[derive(Debug, Serialize)]
pub struct FilterResponse {
    pub filter: MapFilter,
}

/// Apply a set-filter intent.
///
/// PUT /api/v1/map/filter
pub async fn set_filter(
    State(state): State<AppState>,
    Json(intent): Json<SetFilter>,
) -> Json<FilterResponse> {
    let name = intent.name();
    let filter = state.store.set_filter(intent).await;
    record_filter_intent("set", name.as_str());

    Json(FilterResponse { filter })
}

/// Clear one filter part.
///
/// DELETE /api/v1/map/filter/:name
pub async fn clear_filter(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<FilterResponse>, ApiError> {
    let name: FilterName = name
        .parse()
        .map_err(|e: UnknownFilterName| ApiError::Validation(e.to_string()))?;

    let filter = state.store.clear_filter(name).await;
    record_filter_intent("clear", name.as_str());

    Ok(Json(FilterResponse { filter }))
}

/// Reset the whole filter.
///
/// DELETE /api/v1/map/filter
pub async fn clear_all_filters(State(state): State<AppState>) -> Json<FilterResponse> {
    let filter = state.store.clear_all_filters().await;
    record_filter_intent("clear_all", "all");

    Json(FilterResponse { filter })
}
