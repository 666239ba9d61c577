//! Core chain-movement simulation
//!
//! This module contains the simulation without any I/O or rendering
//! dependencies. Frame drivers own a [`Simulation`] and call it once per
//! frame with the elapsed time and the sampled directional intents.

pub mod action;
pub mod arbiter;
pub mod clock;
pub mod config;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use action::{Direction, DirectionalIntents};
pub use arbiter::InputArbiter;
pub use clock::MovementClock;
pub use config::SimConfig;
pub use engine::{BodyCollision, Simulation, UpdateOutcome};
pub use state::{ChainStatus, MoveOutcome, Position, Segment, SegmentChain};
