//! Domain layer for GuardMap.
//!
//! This crate contains:
//! - Domain models (GuardedObject, Device, TapeEntry, MapFilter)
//! - Pure derivation services (classification, filtering, focus, hints,
//!   map-view assembly)
//!
//! Everything here is synchronous and side-effect free: services take the
//! current collections as plain data and return freshly allocated results,
//! so they can be re-run on every state change and unit-tested without any
//! store or HTTP runtime.

pub mod models;
pub mod services;
