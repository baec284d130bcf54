//! Map focus: default world view vs a single isolated object.

use serde::Serialize;

use crate::models::coords::LatLng;
use crate::models::display::DisplayRecord;
use crate::models::map_filter::MapFilter;
use crate::services::hint::FilterHint;

/// Where the map is centered and how far it is zoomed.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct MapFocus {
    pub center: LatLng,
    pub zoom: u8,
}

/// Computes the focus for the current filtered set.
///
/// The map zooms onto a record only when the number filter is active, the
/// hint has nothing to report, and the first filtered record has a
/// renderable position. Every other combination (filter cleared, hint not
/// ok, invalid coordinates) falls back to the supplied default focus. The
/// transition is synchronous with derivation; there is no pending state.
pub fn resolve_focus(
    filter: &MapFilter,
    filtered: &[DisplayRecord],
    hint: &FilterHint,
    default: MapFocus,
    focus_zoom: u8,
) -> MapFocus {
    if !filter.number_active() || !hint.is_ok() {
        return default;
    }
    match filtered.first().and_then(DisplayRecord::position) {
        Some(center) => MapFocus {
            center,
            zoom: focus_zoom,
        },
        None => default,
    }
}
