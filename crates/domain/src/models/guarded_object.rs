//! Guarded object domain model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A monitored physical entity tracked by the system.
///
/// Coordinates are kept as the raw strings operators entered; whether they
/// form a renderable position is decided at derivation time by
/// [`crate::models::coords`]. The device link is optional and split into the
/// lookup key (`device_id`) and the operator-facing `device_number`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GuardedObject {
    pub obj_id: i64,

    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(max = 200, message = "Address must be at most 200 characters"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<Uuid>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_number: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_blocked: Option<bool>,
}

impl GuardedObject {
    /// True when the object carries a device number link.
    pub fn has_device_link(&self) -> bool {
        self.device_number.is_some()
    }
}
