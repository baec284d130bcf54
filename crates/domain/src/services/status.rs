//! Status resolution and the map legend.

use crate::models::device::Device;
use crate::models::status::ObjectStatus;
use crate::models::tape::{TapeEntry, TapeState};

/// One row of the map legend: status tag, marker color, operator label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendEntry {
    pub status: ObjectStatus,
    pub color: &'static str,
    pub label: &'static str,
}

/// Fallback marker color for a status missing from the legend.
pub const UNKNOWN_STATUS_COLOR: &str = "#bdbdbd";

const LEGEND: &[LegendEntry] = &[
    LegendEntry {
        status: ObjectStatus::UnderGuard,
        color: "#2e7d32",
        label: "Under guard",
    },
    LegendEntry {
        status: ObjectStatus::Disarmed,
        color: "#90a4ae",
        label: "Disarmed",
    },
    LegendEntry {
        status: ObjectStatus::Alarm,
        color: "#e53935",
        label: "Alarm",
    },
    LegendEntry {
        status: ObjectStatus::ConnectionLost,
        color: "#fb8c00",
        label: "No connection",
    },
    LegendEntry {
        status: ObjectStatus::Blocked,
        color: "#6d4c41",
        label: "Blocked",
    },
    LegendEntry {
        status: ObjectStatus::WithoutDevice,
        color: "#9e9e9e",
        label: "No device",
    },
];

/// The full legend table, in display order.
pub fn legend() -> &'static [LegendEntry] {
    LEGEND
}

/// Marker color for a status. Total: a status missing from the legend gets
/// the unknown fallback color instead of failing the lookup.
pub fn marker_color(status: ObjectStatus) -> &'static str {
    LEGEND
        .iter()
        .find(|entry| entry.status == status)
        .map(|entry| entry.color)
        .unwrap_or(UNKNOWN_STATUS_COLOR)
}

/// Resolves the display status of an object from its linked device, its tape
/// entry, and the block flag.
///
/// The block flag wins over everything; an inactive device or a missing tape
/// entry reads as a lost connection; otherwise the tape entry's state maps
/// directly.
pub fn resolve_status(device: &Device, tape_entry: Option<&TapeEntry>, blocked: bool) -> ObjectStatus {
    if blocked {
        return ObjectStatus::Blocked;
    }
    if !device.active {
        return ObjectStatus::ConnectionLost;
    }
    match tape_entry.map(|entry| entry.state) {
        Some(TapeState::Armed) => ObjectStatus::UnderGuard,
        Some(TapeState::Disarmed) => ObjectStatus::Disarmed,
        Some(TapeState::Alarm) => ObjectStatus::Alarm,
        Some(TapeState::ConnectionLost) | None => ObjectStatus::ConnectionLost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn device(active: bool) -> Device {
        Device {
            device_id: Uuid::new_v4(),
            number: 5,
            device_type: "panel".to_string(),
            active,
            last_seen_at: None,
        }
    }

    fn entry(state: TapeState) -> TapeEntry {
        TapeEntry {
            obj_id: 1,
            state,
            occurred_at: Utc::now(),
            message: None,
        }
    }

    #[test]
    fn test_blocked_wins_over_tape_state() {
        let armed = entry(TapeState::Armed);
        assert_eq!(
            resolve_status(&device(true), Some(&armed), true),
            ObjectStatus::Blocked
        );
    }

    #[test]
    fn test_inactive_device_reads_as_connection_lost() {
        let armed = entry(TapeState::Armed);
        assert_eq!(
            resolve_status(&device(false), Some(&armed), false),
            ObjectStatus::ConnectionLost
        );
    }

    #[test]
    fn test_missing_tape_entry_reads_as_connection_lost() {
        assert_eq!(
            resolve_status(&device(true), None, false),
            ObjectStatus::ConnectionLost
        );
    }

    #[test]
    fn test_tape_states_map_directly() {
        let cases = [
            (TapeState::Armed, ObjectStatus::UnderGuard),
            (TapeState::Disarmed, ObjectStatus::Disarmed),
            (TapeState::Alarm, ObjectStatus::Alarm),
            (TapeState::ConnectionLost, ObjectStatus::ConnectionLost),
        ];
        for (state, expected) in cases {
            let e = entry(state);
            assert_eq!(resolve_status(&device(true), Some(&e), false), expected);
        }
    }

    #[test]
    fn test_legend_covers_every_status() {
        for status in [
            ObjectStatus::UnderGuard,
            ObjectStatus::Disarmed,
            ObjectStatus::Alarm,
            ObjectStatus::ConnectionLost,
            ObjectStatus::Blocked,
            ObjectStatus::WithoutDevice,
        ] {
            assert!(legend().iter().any(|entry| entry.status == status));
            assert_ne!(marker_color(status), UNKNOWN_STATUS_COLOR);
        }
    }

    #[test]
    fn test_marker_color_values() {
        assert_eq!(marker_color(ObjectStatus::Alarm), "#e53935");
        assert_eq!(marker_color(ObjectStatus::WithoutDevice), "#9e9e9e");
    }
}
