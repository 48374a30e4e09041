//! Main simulation world that ties everything together
//!
//! This is the entry point for running the elevator simulation. The world
//! owns the rider collection and the elevator for one run; callers drive
//! it one tick at a time and read snapshots back out.

use anyhow::{bail, Result};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::elevator::SimElevator;
use super::rider::SimRider;
use super::types::{RiderId, MAX_OCCUPANCY, MAX_RIDER_COUNT, MIN_FLOOR_COUNT, MIN_RIDER_COUNT};

/// Result of advancing the simulation by one tick
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// True when the tick produced no action and no movement - every
    /// rider has been delivered and there is nothing left to do
    pub completed: bool,
}

/// The main simulation world
///
/// Riders and the elevator are mutated only through [`SimWorld::tick`] and
/// [`SimWorld::reinitialize`]; everything handed out is a shared reference.
pub struct SimWorld {
    /// All riders for this run, in creation order
    riders: Vec<SimRider>,

    /// The single elevator serving the building
    elevator: SimElevator,

    /// Number of floors in the building
    floor_count: usize,

    /// Ticks processed since the last (re)initialization
    ticks: u64,

    /// Optional seeded RNG for reproducible simulations
    rng: Option<StdRng>,
}

impl SimWorld {
    fn new_internal(floor_count: usize, rider_count: usize, rng: Option<StdRng>) -> Result<Self> {
        validate_floor_count(floor_count)?;
        validate_rider_count(rider_count)?;

        let mut world = Self {
            riders: Vec::new(),
            elevator: SimElevator::new(floor_count),
            floor_count,
            ticks: 0,
            rng,
        };
        world.spawn_riders(rider_count);
        Ok(world)
    }

    /// Create a world with randomly placed riders
    pub fn new(floor_count: usize, rider_count: usize) -> Result<Self> {
        Self::new_internal(floor_count, rider_count, None)
    }

    /// Create a world with a seeded RNG for reproducible simulations
    pub fn new_with_seed(floor_count: usize, rider_count: usize, seed: u64) -> Result<Self> {
        Self::new_internal(floor_count, rider_count, Some(StdRng::seed_from_u64(seed)))
    }

    /// Create a world with a scripted population instead of random trips
    ///
    /// Each entry is an `(origin, destination)` pair; riders get ids in
    /// entry order. Intended for tests and demos, so the rider-count range
    /// enforced by [`SimWorld::new`] does not apply here.
    pub fn with_trips(floor_count: usize, trips: &[(usize, usize)]) -> Result<Self> {
        validate_floor_count(floor_count)?;
        for &(origin, destination) in trips {
            if !(1..=floor_count).contains(&origin) || !(1..=floor_count).contains(&destination) {
                bail!("Trip floors must be between 1 and {}", floor_count);
            }
            if origin == destination {
                bail!("Trip origin and destination must differ");
            }
        }

        let riders = trips
            .iter()
            .enumerate()
            .map(|(index, &(origin, destination))| {
                SimRider::new(RiderId(index + 1), origin, destination)
            })
            .collect();

        Ok(Self {
            riders,
            elevator: SimElevator::new(floor_count),
            floor_count,
            ticks: 0,
            rng: None,
        })
    }

    /// Replace the rider population wholesale and reset the elevator
    ///
    /// The previous riders are discarded, the cabin returns to floor 1
    /// heading up with nobody inside, and the tick counter starts over.
    /// Fails without mutating anything when `rider_count` is out of range.
    pub fn reinitialize(&mut self, rider_count: usize) -> Result<()> {
        validate_rider_count(rider_count)?;

        self.riders.clear();
        self.elevator = SimElevator::new(self.floor_count);
        self.ticks = 0;
        self.spawn_riders(rider_count);
        Ok(())
    }

    /// Get a random floor, using the seeded RNG if available
    fn random_floor(&mut self) -> usize {
        match &mut self.rng {
            Some(rng) => rng.random_range(1..=self.floor_count),
            None => rand::rng().random_range(1..=self.floor_count),
        }
    }

    /// Create `rider_count` riders with random distinct origin/destination pairs
    fn spawn_riders(&mut self, rider_count: usize) {
        for index in 0..rider_count {
            let current_floor = self.random_floor();
            let mut destination_floor = self.random_floor();
            // floor_count >= 2, so a distinct destination always exists
            while destination_floor == current_floor {
                destination_floor = self.random_floor();
            }
            self.riders.push(SimRider::new(
                RiderId(index + 1),
                current_floor,
                destination_floor,
            ));
        }
        info!(
            "Spawned {} riders across {} floors",
            rider_count, self.floor_count
        );
    }

    /// Main simulation tick
    ///
    /// Recomputes the request set, then processes at most one boarding or
    /// alighting; only when no action occurred may the cabin move. The
    /// tick is complete when neither happened.
    pub fn tick(&mut self) -> TickResult {
        self.ticks += 1;

        self.elevator.update_requests(&self.riders);
        let acted = self.elevator.process_one_action(&mut self.riders);
        let moved = acted || self.elevator.advance();

        TickResult { completed: !moved }
    }

    pub fn riders(&self) -> &[SimRider] {
        &self.riders
    }

    pub fn elevator(&self) -> &SimElevator {
        &self.elevator
    }

    pub fn floor_count(&self) -> usize {
        self.floor_count
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Render the building as text, one row per floor from the top down
    ///
    /// Waiting riders appear to the left of their floor, delivered riders
    /// to the right, and the cabin box sits on the elevator's floor with
    /// its occupants listed inside.
    pub fn draw_building(&self) -> String {
        let mut building = String::new();

        for floor in (1..=self.floor_count).rev() {
            let waiting: Vec<String> = self
                .riders
                .iter()
                .filter(|r| r.is_waiting_at(floor))
                .map(|r| format!("P{}", r.id.0))
                .collect();

            let delivered: Vec<String> = self
                .riders
                .iter()
                .filter(|r| r.finished && r.destination_floor == floor)
                .map(|r| format!("P{}", r.id.0))
                .collect();

            // Show the cabin only on its current floor
            let cabin = if self.elevator.current_floor == floor {
                let occupants: Vec<String> = self
                    .elevator
                    .occupants
                    .iter()
                    .map(|id| format!("P{}", id.0))
                    .collect();
                let contents = if occupants.is_empty() {
                    "  ".to_string()
                } else {
                    occupants.join(" ")
                };
                format!("| [{:^17}] |", contents)
            } else {
                "|                     |".to_string()
            };

            building.push_str(&format!(
                "{:<26}{}{:>26}\n",
                waiting.join(" "),
                cabin,
                delivered.join(" ")
            ));
            building.push_str(&"-".repeat(75));
            building.push('\n');
        }

        building
    }

    /// Print a summary of the world state
    pub fn print_summary(&self) {
        println!("=== Elevator Simulation Summary ===");
        println!("Ticks: {}", self.ticks);
        println!(
            "Elevator: floor {}, direction {:?}, occupants {}/{}",
            self.elevator.current_floor,
            self.elevator.direction,
            self.elevator.occupants.len(),
            MAX_OCCUPANCY
        );

        let mut requested: Vec<usize> = self.elevator.requests.iter().copied().collect();
        requested.sort_unstable();
        println!("Requested floors: {:?}", requested);

        println!("--- Riders ---");
        for rider in &self.riders {
            let status = if rider.finished {
                "delivered"
            } else if rider.in_elevator {
                "riding"
            } else {
                "waiting"
            };
            println!(
                "  Rider P{}: floor {} -> {}, {}",
                rider.id.0, rider.current_floor, rider.destination_floor, status
            );
        }
    }
}

fn validate_floor_count(floor_count: usize) -> Result<()> {
    if floor_count < MIN_FLOOR_COUNT {
        bail!(
            "Floor count must be at least {} so every rider can have a distinct destination",
            MIN_FLOOR_COUNT
        );
    }
    Ok(())
}

fn validate_rider_count(rider_count: usize) -> Result<()> {
    if rider_count < MIN_RIDER_COUNT {
        bail!("Minimum number of riders is {}", MIN_RIDER_COUNT);
    }
    if rider_count > MAX_RIDER_COUNT {
        bail!("Maximum number of riders is {}", MAX_RIDER_COUNT);
    }
    Ok(())
}
