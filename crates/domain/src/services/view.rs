//! Assembly of the full declarative map view.

use std::collections::HashMap;

use serde::Serialize;
use uuid::Uuid;

use crate::models::coords::LatLng;
use crate::models::device::Device;
use crate::models::guarded_object::GuardedObject;
use crate::models::map_filter::MapFilter;
use crate::models::tape::TapeEntry;
use crate::services::classify::classify;
use crate::services::filter::apply_filters;
use crate::services::focus::{resolve_focus, MapFocus};
use crate::services::hint::{resolve_hint, FilterHint};
use crate::services::status::marker_color;

/// Rendering parameters for the map surface.
#[derive(Debug, Clone, PartialEq)]
pub struct MapViewOptions {
    /// Tile-image source URL template handed through to the surface.
    pub tile_url: String,
    pub default_center: LatLng,
    pub default_zoom: u8,
    pub focus_zoom: u8,
    pub marker_radius: f32,
}

impl Default for MapViewOptions {
    fn default() -> Self {
        Self {
            tile_url: "https://tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            default_center: LatLng::new(50.4501, 30.5234),
            default_zoom: 11,
            focus_zoom: 16,
            marker_radius: 12.0,
        }
    }
}

/// Popup content shown when a marker is opened.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarkerPopup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub position: LatLng,
}

/// One marker the map surface should draw.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarkerSpec {
    pub obj_id: i64,
    pub position: LatLng,
    pub color: String,
    pub radius: f32,
    pub popup: MarkerPopup,
}

/// Serialized form of the filter hint.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HintPayload {
    pub code: String,
    pub message: String,
}

impl From<&FilterHint> for HintPayload {
    fn from(hint: &FilterHint) -> Self {
        Self {
            code: hint.code().to_string(),
            message: hint.to_string(),
        }
    }
}

/// The complete declarative map view.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    pub center: LatLng,
    pub zoom: u8,
    pub tile_url: String,
    pub loading: bool,
    /// Classified records before filtering.
    pub total: usize,
    /// Records surviving the filter pipeline, including ones without
    /// renderable coordinates.
    pub matched: usize,
    pub markers: Vec<MarkerSpec>,
    pub hint: HintPayload,
}

/// Runs the whole pipeline: classify, filter, resolve hint and focus, and
/// emit one marker per filtered record with a renderable position.
///
/// Records without a renderable position stay in `matched` but get no
/// marker.
pub fn build_view(
    objects: &[GuardedObject],
    devices: &HashMap<Uuid, Device>,
    tape: &[TapeEntry],
    filter: &MapFilter,
    loading: bool,
    options: &MapViewOptions,
) -> MapView {
    let classified = classify(objects, devices, tape);
    let total = classified.len();
    let filtered = apply_filters(classified, filter);
    let hint = resolve_hint(filter, objects, devices, &filtered);
    let default_focus = MapFocus {
        center: options.default_center,
        zoom: options.default_zoom,
    };
    let focus = resolve_focus(filter, &filtered, &hint, default_focus, options.focus_zoom);

    let markers = filtered
        .iter()
        .filter_map(|record| {
            let position = record.position()?;
            Some(MarkerSpec {
                obj_id: record.obj_id,
                position,
                color: marker_color(record.status).to_string(),
                radius: options.marker_radius,
                popup: MarkerPopup {
                    device_number: record.device_number,
                    address: record.address.clone(),
                    position,
                },
            })
        })
        .collect();

    MapView {
        center: focus.center,
        zoom: focus.zoom,
        tile_url: options.tile_url.clone(),
        loading,
        total,
        matched: filtered.len(),
        markers,
        hint: HintPayload::from(&hint),
    }
}
