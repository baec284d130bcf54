//! Operational status shown on the map and in the legend.

use serde::{Deserialize, Serialize};

/// The status a guarded object is displayed with.
///
/// `WithoutDevice` is reserved for objects that carry no device link at all;
/// every other value is derived from the linked device's live state and the
/// block flag. A record never carries both.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ObjectStatus {
    UnderGuard,
    Disarmed,
    Alarm,
    ConnectionLost,
    Blocked,
    WithoutDevice,
}

impl ObjectStatus {
    /// Converts to the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectStatus::UnderGuard => "under_guard",
            ObjectStatus::Disarmed => "disarmed",
            ObjectStatus::Alarm => "alarm",
            ObjectStatus::ConnectionLost => "connection_lost",
            ObjectStatus::Blocked => "blocked",
            ObjectStatus::WithoutDevice => "without_device",
        }
    }

    /// Parses from the wire string representation.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "under_guard" => Some(ObjectStatus::UnderGuard),
            "disarmed" => Some(ObjectStatus::Disarmed),
            "alarm" => Some(ObjectStatus::Alarm),
            "connection_lost" => Some(ObjectStatus::ConnectionLost),
            "blocked" => Some(ObjectStatus::Blocked),
            "without_device" => Some(ObjectStatus::WithoutDevice),
            _ => None,
        }
    }
}
