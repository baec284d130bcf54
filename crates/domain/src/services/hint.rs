//! Diagnostic hint for the device-number filter.

use std::collections::HashMap;
use std::fmt;

use uuid::Uuid;

use crate::models::device::Device;
use crate::models::display::DisplayRecord;
use crate::models::guarded_object::GuardedObject;
use crate::models::map_filter::MapFilter;

/// Why the current number filter shows what it shows.
///
/// `Ok` is the sentinel for "nothing to report"; every other variant is an
/// advisory message for the operator and also forces the map back to its
/// default focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterHint {
    Ok,
    /// A device with the filtered number exists, but no object links to it.
    LinkMissing { number: String },
    /// No device with the filtered number exists at all.
    DeviceNotFound { number: String },
    /// The number matches an object, but the other filters hide it.
    NarrowedOut,
    /// The isolated object has no renderable coordinates.
    NoCoordinates,
}

impl FilterHint {
    /// Machine-readable hint code.
    pub fn code(&self) -> &'static str {
        match self {
            FilterHint::Ok => "ok",
            FilterHint::LinkMissing { .. } => "link_missing",
            FilterHint::DeviceNotFound { .. } => "device_not_found",
            FilterHint::NarrowedOut => "narrowed_out",
            FilterHint::NoCoordinates => "no_coordinates",
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, FilterHint::Ok)
    }
}

impl fmt::Display for FilterHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterHint::Ok => write!(f, "ok"),
            FilterHint::LinkMissing { number } => write!(
                f,
                "Device \u{2116}{number} is not linked to any object. Create the link and fill in the object's coordinates."
            ),
            FilterHint::DeviceNotFound { number } => {
                write!(f, "Device \u{2116}{number} does not exist.")
            }
            FilterHint::NarrowedOut => {
                write!(f, "No objects match. Clear the status and type filters.")
            }
            FilterHint::NoCoordinates => {
                write!(f, "The object has no valid coordinates.")
            }
        }
    }
}

/// Resolves the hint for the current number filter.
///
/// Priority-ordered, first match wins. The object and device checks run
/// against the unfiltered collections; the emptiness and coordinate checks
/// run against the fully filtered set. The object-missing check deliberately
/// precedes the device-missing check.
pub fn resolve_hint(
    filter: &MapFilter,
    objects: &[GuardedObject],
    devices: &HashMap<Uuid, Device>,
    filtered: &[DisplayRecord],
) -> FilterHint {
    let Some(raw) = filter.number.as_deref() else {
        return FilterHint::Ok;
    };

    let number = filter.parsed_number();
    let object_exists = number
        .map(|n| objects.iter().any(|o| o.device_number == Some(n)))
        .unwrap_or(false);
    let device_exists = number
        .map(|n| devices.values().any(|d| d.number == n))
        .unwrap_or(false);

    if !object_exists && device_exists {
        return FilterHint::LinkMissing {
            number: raw.to_string(),
        };
    }
    if !device_exists {
        return FilterHint::DeviceNotFound {
            number: raw.to_string(),
        };
    }
    if filtered.is_empty() {
        return FilterHint::NarrowedOut;
    }
    if filtered[0].position().is_none() {
        return FilterHint::NoCoordinates;
    }
    FilterHint::Ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::status::ObjectStatus;

    fn object(obj_id: i64, device_number: Option<i64>) -> GuardedObject {
        GuardedObject {
            obj_id,
            name: format!("Object {obj_id}"),
            address: None,
            lat: Some("50.4".to_string()),
            long: Some("30.64".to_string()),
            device_id: None,
            device_number,
            device_blocked: None,
        }
    }

    fn device(number: i64) -> (Uuid, Device) {
        let device_id = Uuid::new_v4();
        (
            device_id,
            Device {
                device_id,
                number,
                device_type: "panel".to_string(),
                active: true,
                last_seen_at: None,
            },
        )
    }

    fn record(obj_id: i64, number: i64, lat: &str, long: &str) -> DisplayRecord {
        DisplayRecord {
            obj_id,
            name: format!("Object {obj_id}"),
            address: None,
            lat: Some(lat.to_string()),
            long: Some(long.to_string()),
            device_number: Some(number),
            status: ObjectStatus::UnderGuard,
            device_type: "panel".to_string(),
        }
    }

    fn number_filter(raw: &str) -> MapFilter {
        MapFilter {
            number: Some(raw.to_string()),
            ..MapFilter::default()
        }
    }

    #[test]
    fn test_inactive_number_filter_is_ok() {
        let hint = resolve_hint(&MapFilter::default(), &[], &HashMap::new(), &[]);
        assert_eq!(hint, FilterHint::Ok);
    }

    #[test]
    fn test_device_exists_but_no_object_links_it() {
        let devices = HashMap::from([device(5)]);
        let objects = vec![object(1, Some(9))];
        let hint = resolve_hint(&number_filter("5"), &objects, &devices, &[]);
        assert_eq!(
            hint,
            FilterHint::LinkMissing {
                number: "5".to_string()
            }
        );
    }

    #[test]
    fn test_device_does_not_exist() {
        let devices = HashMap::from([device(5)]);
        let objects = vec![object(1, Some(5))];
        let hint = resolve_hint(&number_filter("7"), &objects, &devices, &[]);
        assert_eq!(
            hint,
            FilterHint::DeviceNotFound {
                number: "7".to_string()
            }
        );
    }

    #[test]
    fn test_unparseable_number_reports_device_not_found() {
        let devices = HashMap::from([device(5)]);
        let objects = vec![object(1, Some(5))];
        let hint = resolve_hint(&number_filter("5a"), &objects, &devices, &[]);
        assert_eq!(
            hint,
            FilterHint::DeviceNotFound {
                number: "5a".to_string()
            }
        );
    }

    #[test]
    fn test_other_filters_hide_the_match() {
        let devices = HashMap::from([device(5)]);
        let objects = vec![object(1, Some(5))];
        // Object and device both exist, but the filtered set is empty.
        let hint = resolve_hint(&number_filter("5"), &objects, &devices, &[]);
        assert_eq!(hint, FilterHint::NarrowedOut);
    }

    #[test]
    fn test_isolated_record_without_coordinates() {
        let devices = HashMap::from([device(5)]);
        let objects = vec![object(1, Some(5))];
        let filtered = vec![record(1, 5, "90", "30.64")];
        let hint = resolve_hint(&number_filter("5"), &objects, &devices, &filtered);
        assert_eq!(hint, FilterHint::NoCoordinates);
    }

    #[test]
    fn test_everything_in_order_is_ok() {
        let devices = HashMap::from([device(5)]);
        let objects = vec![object(1, Some(5))];
        let filtered = vec![record(1, 5, "50.4", "30.64")];
        let hint = resolve_hint(&number_filter("5"), &objects, &devices, &filtered);
        assert_eq!(hint, FilterHint::Ok);
        assert!(hint.is_ok());
    }

    #[test]
    fn test_codes() {
        assert_eq!(FilterHint::Ok.code(), "ok");
        assert_eq!(
            FilterHint::LinkMissing {
                number: "5".to_string()
            }
            .code(),
            "link_missing"
        );
        assert_eq!(
            FilterHint::DeviceNotFound {
                number: "7".to_string()
            }
            .code(),
            "device_not_found"
        );
        assert_eq!(FilterHint::NarrowedOut.code(), "narrowed_out");
        assert_eq!(FilterHint::NoCoordinates.code(), "no_coordinates");
    }

    #[test]
    fn test_messages_mention_the_number() {
        let message = FilterHint::DeviceNotFound {
            number: "7".to_string(),
        }
        .to_string();
        assert!(message.contains("\u{2116}7"));
    }
}
