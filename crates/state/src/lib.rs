//! Application state store for GuardMap.
//!
//! The map view reads already-fetched monitoring state and writes nothing
//! back except filter-change intents. This crate is that boundary: an
//! in-memory store holding the state snapshot (guarded objects, devices,
//! general tape, loading flag) and the shared map filter, plus the intent
//! types that are the only mutation path into the filter.

pub mod intents;
pub mod store;

pub use intents::{FilterName, SetFilter, UnknownFilterName};
pub use store::{Snapshot, StateStore};
