//! General-tape domain model.
//!
//! The general tape is the per-object status-history feed: each entry records
//! an event reported for a guarded object, and the most relevant entry for an
//! object feeds status resolution.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single status-history record for a guarded object.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TapeEntry {
    pub obj_id: i64,
    pub state: TapeState,
    pub occurred_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Reported state carried by a tape entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TapeState {
    Armed,
    Disarmed,
    Alarm,
    ConnectionLost,
}

impl TapeState {
    /// Converts to the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TapeState::Armed => "armed",
            TapeState::Disarmed => "disarmed",
            TapeState::Alarm => "alarm",
            TapeState::ConnectionLost => "connection_lost",
        }
    }

    /// Parses from the wire string representation.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "armed" => Some(TapeState::Armed),
            "disarmed" => Some(TapeState::Disarmed),
            "alarm" => Some(TapeState::Alarm),
            "connection_lost" => Some(TapeState::ConnectionLost),
            _ => None,
        }
    }
}
