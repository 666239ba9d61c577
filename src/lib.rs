//! Snake Chain - a grid-based chain movement simulation
//!
//! This library provides:
//! - Core simulation (game module): steering arbitration, the fixed-cadence
//!   movement clock and the segment chain with self-collision detection
//! - Keyboard input mapping (input module)
//! - Session counters (metrics module)
//! - Frame drivers: live keyboard play, scripted replay, random autoplay
//!   (modes module)

pub mod error;
pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;

pub use error::ConfigError;
