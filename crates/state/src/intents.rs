//! Filter-change intents dispatched by the map surface.

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use domain::models::ObjectStatus;

/// Names of the three map filter parts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FilterName {
    Status,
    Type,
    Number,
}

impl FilterName {
    /// Converts to the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterName::Status => "status",
            FilterName::Type => "type",
            FilterName::Number => "number",
        }
    }
}

/// Error for an unrecognized filter name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown filter name: {0}")]
pub struct UnknownFilterName(pub String);

impl FromStr for FilterName {
    type Err = UnknownFilterName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "status" => Ok(FilterName::Status),
            "type" => Ok(FilterName::Type),
            "number" => Ok(FilterName::Number),
            other => Err(UnknownFilterName(other.to_string())),
        }
    }
}

/// A set-filter intent. The payload shape mirrors the wire format:
/// `{"name": "number", "value": "5"}`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "name", content = "value", rename_all = "snake_case")]
pub enum SetFilter {
    Status(Vec<ObjectStatus>),
    Type(HashMap<String, Vec<String>>),
    Number(String),
}

impl SetFilter {
    /// The filter part this intent targets.
    pub fn name(&self) -> FilterName {
        match self {
            SetFilter::Status(_) => FilterName::Status,
            SetFilter::Type(_) => FilterName::Type,
            SetFilter::Number(_) => FilterName::Number,
        }
    }
}
