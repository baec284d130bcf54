//! Map view endpoint handler.

use axum::{extract::State, Json};

use domain::services::{build_view, MapView};

use crate::app::AppState;

/// Derive and return the current map view.
///
/// GET /api/v1/map/view
///
/// Runs the full pipeline on a cloned snapshot: classification, filtering,
/// hint resolution, focus, marker assembly. Nothing is cached between
/// requests; the view is a pure function of the store's current contents.
pub async fn get_map_view(State(state): State<AppState>) -> Json<MapView> {
    let snapshot = state.store.snapshot().await;
    let filter = state.store.filter().await;
    let options = state.config.map.view_options();

    let view = build_view(
        &snapshot.objects,
        &snapshot.devices,
        &snapshot.tape,
        &filter,
        snapshot.loading,
        &options,
    );

    Json(view)
}
