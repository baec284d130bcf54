//! Device domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Type tag assigned to display records whose object has no linked device.
pub const NO_DEVICE_TYPE: &str = "none";

/// A sensor/controller unit that can be linked to a guarded object.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub device_id: Uuid,

    #[validate(range(min = 1, message = "Device number must be positive"))]
    pub number: i64,

    #[validate(
        length(min = 1, max = 50, message = "Type must be 1-50 characters"),
        custom(function = "validate_type_tag")
    )]
    #[serde(rename = "type")]
    pub device_type: String,

    #[serde(default = "default_active")]
    pub active: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

fn validate_type_tag(tag: &str) -> Result<(), validator::ValidationError> {
    if tag
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        Ok(())
    } else {
        let mut err = validator::ValidationError::new("invalid_type_tag");
        err.message = Some(
            "Type may only contain alphanumeric characters, hyphens, and underscores".into(),
        );
        Err(err)
    }
}
