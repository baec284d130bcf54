//! Derived display record.

use serde::Serialize;

use crate::models::coords::{self, LatLng};
use crate::models::guarded_object::GuardedObject;
use crate::models::status::ObjectStatus;

/// A guarded object projected for display, carrying its derived status and
/// device type.
///
/// Display records are ephemeral: freshly allocated by classification on
/// every relevant input change, discarded after the view is built, and
/// carrying no identity beyond the source object's `obj_id`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRecord {
    pub obj_id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_number: Option<i64>,
    pub status: ObjectStatus,
    pub device_type: String,
}

impl DisplayRecord {
    /// Projects a guarded object with its derived status and type.
    pub fn from_object(
        object: &GuardedObject,
        status: ObjectStatus,
        device_type: impl Into<String>,
    ) -> Self {
        Self {
            obj_id: object.obj_id,
            name: object.name.clone(),
            address: object.address.clone(),
            lat: object.lat.clone(),
            long: object.long.clone(),
            device_number: object.device_number,
            status,
            device_type: device_type.into(),
        }
    }

    /// The record's renderable position, if its coordinates are valid.
    pub fn position(&self) -> Option<LatLng> {
        coords::parse_position(self.lat.as_deref(), self.long.as_deref())
    }
}
