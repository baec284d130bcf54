//! Classification of guarded objects into display records.

use std::collections::HashMap;

use uuid::Uuid;

use crate::models::device::{Device, NO_DEVICE_TYPE};
use crate::models::display::DisplayRecord;
use crate::models::guarded_object::GuardedObject;
use crate::models::status::ObjectStatus;
use crate::models::tape::TapeEntry;
use crate::services::status::resolve_status;

/// Maps every guarded object to a display record.
///
/// Objects without a device number become `without_device` records with the
/// no-device type sentinel. Objects whose `device_id` resolves to no known
/// device are dropped silently; a dangling link is stale data, not an error.
/// The tape entry used for status resolution is the first one in tape order
/// matching the object's id.
pub fn classify(
    objects: &[GuardedObject],
    devices: &HashMap<Uuid, Device>,
    tape: &[TapeEntry],
) -> Vec<DisplayRecord> {
    objects
        .iter()
        .filter_map(|object| {
            if !object.has_device_link() {
                return Some(DisplayRecord::from_object(
                    object,
                    ObjectStatus::WithoutDevice,
                    NO_DEVICE_TYPE,
                ));
            }
            let device = object.device_id.and_then(|id| devices.get(&id))?;
            let tape_entry = tape.iter().find(|entry| entry.obj_id == object.obj_id);
            let blocked = object.device_blocked.unwrap_or(false);
            let status = resolve_status(device, tape_entry, blocked);
            Some(DisplayRecord::from_object(
                object,
                status,
                device.device_type.clone(),
            ))
        })
        .collect()
}
