//! Domain models for GuardMap.

pub mod coords;
pub mod device;
pub mod display;
pub mod guarded_object;
pub mod map_filter;
pub mod status;
pub mod tape;

pub use coords::LatLng;
pub use device::{Device, NO_DEVICE_TYPE};
pub use display::DisplayRecord;
pub use guarded_object::GuardedObject;
pub use map_filter::MapFilter;
pub use status::ObjectStatus;
pub use tape::{TapeEntry, TapeState};
