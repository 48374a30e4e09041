//! Rider records for the elevator simulation
//!
//! Riders are passive: they hold a trip and lifecycle flags, and only the
//! elevator mutates them while processing a tick.

use super::types::RiderId;

/// A person riding (or waiting for) the elevator
#[derive(Debug, Clone)]
pub struct SimRider {
    pub id: RiderId,
    /// Floor the rider is currently on; carried by the cabin while riding
    /// and written only when the rider alights
    pub current_floor: usize,
    /// Floor the rider wants to reach, fixed at creation
    pub destination_floor: usize,
    /// True while the rider occupies the cabin
    pub in_elevator: bool,
    /// True once the rider has alighted at their destination; terminal
    pub finished: bool,
}

impl SimRider {
    pub fn new(id: RiderId, current_floor: usize, destination_floor: usize) -> Self {
        Self {
            id,
            current_floor,
            destination_floor,
            in_elevator: false,
            finished: false,
        }
    }

    /// Check whether the rider is standing on `floor` waiting for a pickup
    pub fn is_waiting_at(&self, floor: usize) -> bool {
        self.current_floor == floor && !self.finished && !self.in_elevator
    }
}
