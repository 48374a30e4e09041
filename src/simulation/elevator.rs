//! Elevator state machine for the simulation
//!
//! The elevator owns the cabin position, the occupant list, and the pause
//! sub-state that serializes boarding/alighting into discrete frames.

use std::collections::HashSet;

use log::debug;

use super::rider::SimRider;
use super::types::{ActionKind, Direction, PendingAction, RiderId, MAX_OCCUPANCY, PAUSE_FRAMES};

/// The elevator cabin and its scheduling state
#[derive(Debug, Clone)]
pub struct SimElevator {
    /// Floor the cabin is currently on
    pub current_floor: usize,
    /// Direction the cabin sweeps in when it moves
    pub direction: Direction,
    /// Riders inside the cabin, in boarding order
    pub occupants: Vec<RiderId>,
    /// Floors with at least one pickup or drop-off wanted, recomputed
    /// from rider state every tick
    pub requests: HashSet<usize>,
    /// Top floor of the building the cabin serves
    pub floor_count: usize,
    /// Frames left to hold position after a boarding or alighting
    pub pause_frames_remaining: u32,
    /// The action currently being held for, if any
    pub pending_action: Option<PendingAction>,
}

impl SimElevator {
    pub fn new(floor_count: usize) -> Self {
        Self {
            current_floor: 1,
            direction: Direction::Up,
            occupants: Vec::new(),
            requests: HashSet::new(),
            floor_count,
            pause_frames_remaining: 0,
            pending_action: None,
        }
    }

    /// Recompute the request set from current rider state
    ///
    /// An unfinished rider outside the cabin wants a pickup at their
    /// current floor; one inside wants a drop-off at their destination.
    /// Floors nobody wants anymore are dropped, even if requested last
    /// tick. Called once at the start of every tick.
    pub fn update_requests(&mut self, riders: &[SimRider]) {
        self.requests.clear();
        for rider in riders.iter().filter(|r| !r.finished) {
            if rider.in_elevator {
                self.requests.insert(rider.destination_floor);
            } else {
                self.requests.insert(rider.current_floor);
            }
        }
    }

    /// Process at most one boarding or alighting this frame
    ///
    /// Returns true when an action occurred or a pause frame was consumed,
    /// in which case the cabin must not move this tick. Alighting takes
    /// priority over boarding when both are possible on the same floor.
    pub fn process_one_action(&mut self, riders: &mut [SimRider]) -> bool {
        // Spend the pause frame left by the previous action
        if self.pause_frames_remaining > 0 {
            self.pause_frames_remaining -= 1;
            return true;
        }

        // Riders leaving, in boarding order
        if let Some(slot) = self.occupants.iter().position(|id| {
            riders
                .iter()
                .any(|r| r.id == *id && r.destination_floor == self.current_floor)
        }) {
            let rider_id = self.occupants.remove(slot);
            if let Some(rider) = riders.iter_mut().find(|r| r.id == rider_id) {
                rider.finished = true;
                rider.in_elevator = false;
                rider.current_floor = self.current_floor;
            }
            self.pause_frames_remaining = PAUSE_FRAMES;
            self.pending_action = Some(PendingAction {
                kind: ActionKind::Alighting,
                rider: rider_id,
            });
            debug!("Rider {:?} alighting at floor {}", rider_id, self.current_floor);
            return true;
        }

        // Riders entering, one per frame, in creation order
        if self.occupants.len() < MAX_OCCUPANCY {
            if let Some(rider) = riders.iter_mut().find(|r| r.is_waiting_at(self.current_floor)) {
                rider.in_elevator = true;
                let rider_id = rider.id;
                self.occupants.push(rider_id);
                self.pause_frames_remaining = PAUSE_FRAMES;
                self.pending_action = Some(PendingAction {
                    kind: ActionKind::Boarding,
                    rider: rider_id,
                });
                debug!("Rider {:?} boarding at floor {}", rider_id, self.current_floor);
                return true;
            }
        }

        // Nothing to process on this floor
        self.pending_action = None;
        false
    }

    /// Move the cabin one floor, if there is anywhere to go
    ///
    /// Returns false only when the request set is empty - the signal that
    /// the simulation has nothing left to do. The cabin sweeps to a
    /// physical extreme before reversing, regardless of where the pending
    /// requests are.
    pub fn advance(&mut self) -> bool {
        if self.pause_frames_remaining > 0 {
            // Holding position for an in-progress action
            return true;
        }
        if self.requests.is_empty() {
            return false;
        }

        if self.direction == Direction::Up && self.current_floor == self.floor_count {
            self.direction = Direction::Down;
        } else if self.direction == Direction::Down && self.current_floor == 1 {
            self.direction = Direction::Up;
        }

        match self.direction {
            Direction::Up => self.current_floor += 1,
            Direction::Down => self.current_floor -= 1,
        }
        true
    }
}
