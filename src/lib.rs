//! Elevator Simulation Library
//!
//! A single-elevator simulation that advances one discrete frame per tick.
//! The core logic is independent of any particular frontend and can be
//! driven headless via the console or embedded by another caller.

pub mod simulation;
