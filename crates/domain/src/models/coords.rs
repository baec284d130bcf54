//! Coordinate parsing and validity.
//!
//! Guarded-object coordinates arrive as operator-entered strings and stay
//! that way in the model. A position is renderable only if both parts parse
//! to finite numbers strictly inside the open intervals (-90, 90) for
//! latitude and (-180, 180) for longitude. Boundary values are invalid: a
//! pole or antimeridian value is treated as a data-entry artifact, not a
//! real site.

use serde::{Deserialize, Serialize};

/// A parsed geographic position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Parses a lat/long string pair into a position, or `None` when either part
/// is absent, empty, unparseable, non-finite, or on/outside the boundary.
pub fn parse_position(lat: Option<&str>, long: Option<&str>) -> Option<LatLng> {
    let lat = parse_part(lat, 90.0)?;
    let lng = parse_part(long, 180.0)?;
    Some(LatLng { lat, lng })
}

/// True when the string pair forms a renderable position.
pub fn is_valid(lat: Option<&str>, long: Option<&str>) -> bool {
    parse_position(lat, long).is_some()
}

fn parse_part(raw: Option<&str>, limit: f64) -> Option<f64> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    let value: f64 = raw.parse().ok()?;
    if value.is_finite() && value.abs() < limit {
        Some(value)
    } else {
        None
    }
}
