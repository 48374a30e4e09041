//! Standalone elevator simulation module
//!
//! This module contains all the core simulation logic: the rider records,
//! the elevator state machine, and the world that ties them together. It
//! can be tested via console without any frontend attached.

mod elevator;
mod rider;
mod types;
mod world;

// Re-export public types for external use
// These may not be used within this crate but are part of the public API
#[allow(unused_imports)]
pub use elevator::SimElevator;
#[allow(unused_imports)]
pub use rider::SimRider;
#[allow(unused_imports)]
pub use types::{
    ActionKind, Direction, PendingAction, RiderId, DEFAULT_FLOOR_COUNT, MAX_OCCUPANCY,
    MAX_RIDER_COUNT, MIN_FLOOR_COUNT, MIN_RIDER_COUNT, PAUSE_FRAMES,
};
#[allow(unused_imports)]
pub use world::TickResult;
pub use world::SimWorld;
