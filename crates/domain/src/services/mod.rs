//! Pure derivation services for the map view.
//!
//! Services contain the display pipeline that turns the raw state snapshot
//! into the rendered map: classification, filtering, hint resolution, focus,
//! and view assembly. All of them are pure functions over plain data.

pub mod classify;
pub mod filter;
pub mod focus;
pub mod hint;
pub mod status;
pub mod view;

pub use classify::classify;
pub use filter::apply_filters;
pub use focus::{resolve_focus, MapFocus};
pub use hint::{resolve_hint, FilterHint};
pub use status::{legend, marker_color, resolve_status, LegendEntry, UNKNOWN_STATUS_COLOR};
pub use view::{build_view, HintPayload, MapView, MapViewOptions, MarkerPopup, MarkerSpec};
