//! The shared tri-part map filter.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::models::status::ObjectStatus;

/// Filter state scoping which display records are shown on the map.
///
/// Owned by the state store and mutated only through dispatched intents.
/// Each part is inactive in its empty form: `None` number, empty status set,
/// empty type selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MapFilter {
    /// Device-number filter, kept as the raw string the operator typed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,

    /// Selected statuses; empty means "all".
    #[serde(default)]
    pub status: Vec<ObjectStatus>,

    /// Selected device types grouped by category; the flattened value set is
    /// what records are matched against. Empty (or all-empty groups) means
    /// "all".
    #[serde(default)]
    pub device_types: HashMap<String, Vec<String>>,
}

impl MapFilter {
    /// True when the number filter is active.
    pub fn number_active(&self) -> bool {
        self.number.is_some()
    }

    /// Numeric parse of the number filter. `None` either when the filter is
    /// inactive or when the string does not parse; an active-but-unparseable
    /// number matches no record.
    pub fn parsed_number(&self) -> Option<i64> {
        self.number.as_deref().and_then(|n| n.trim().parse().ok())
    }

    /// The flattened set of selected type values across all categories.
    pub fn flattened_types(&self) -> HashSet<&str> {
        self.device_types
            .values()
            .flatten()
            .map(String::as_str)
            .collect()
    }

    /// True when no part of the filter is active.
    pub fn is_default(&self) -> bool {
        self.number.is_none() && self.status.is_empty() && self.flattened_types().is_empty()
    }
}
