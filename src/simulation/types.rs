//! Core types for the elevator simulation
//!
//! These are standalone types shared across the simulation modules.

/// A unique identifier for a rider
/// This is a simple wrapper around a usize for type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RiderId(pub usize);

/// Travel direction of the elevator cabin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// The kind of action the elevator is currently pausing for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// A rider is stepping into the cabin
    Boarding,
    /// A rider is stepping out at their destination
    Alighting,
}

/// The boarding or alighting event currently being held for one frame
///
/// The rider is referenced by id only; look it up in the owning rider
/// collection when details are needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingAction {
    pub kind: ActionKind,
    pub rider: RiderId,
}

/// Maximum number of riders the cabin can hold at once
pub const MAX_OCCUPANCY: usize = 5;

/// Smallest accepted rider count for an initialization
pub const MIN_RIDER_COUNT: usize = 1;

/// Largest accepted rider count for an initialization
pub const MAX_RIDER_COUNT: usize = 5;

/// Smallest building that allows a distinct origin/destination pair
pub const MIN_FLOOR_COUNT: usize = 2;

/// Building height used when the caller does not pick one
pub const DEFAULT_FLOOR_COUNT: usize = 10;

/// Number of frames the cabin holds position after a boarding or alighting
pub const PAUSE_FRAMES: u32 = 1;
