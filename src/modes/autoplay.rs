use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

use crate::game::{Direction, DirectionalIntents, SimConfig, Simulation};
use crate::metrics::SessionMetrics;

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

/// Headless driver feeding random intents at a fixed frame interval.
///
/// Each collision ends the session and the chain is re-initialized.
pub struct AutoplayMode {
    config: SimConfig,
    sim: Simulation,
    metrics: SessionMetrics,
    rng: StdRng,
    frame_interval: Duration,
    /// Chance per frame that any intent is asserted
    steer_probability: f64,
}

impl AutoplayMode {
    pub fn new(config: SimConfig, frame_interval: Duration, seed: Option<u64>) -> Result<Self> {
        let mut sim = Simulation::new(&config).context("Invalid simulation config")?;
        sim.grow(config.initial_length - 1);

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            config,
            sim,
            metrics: SessionMetrics::new(),
            rng,
            frame_interval,
            steer_probability: 0.1,
        })
    }

    fn random_intents(&mut self) -> DirectionalIntents {
        if self.rng.gen_bool(self.steer_probability) {
            let direction = DIRECTIONS[self.rng.gen_range(0..DIRECTIONS.len())];
            DirectionalIntents::only(direction)
        } else {
            DirectionalIntents::NONE
        }
    }

    /// Run `frames` frames, restarting after each collision
    pub fn play(&mut self, frames: u64) -> &SessionMetrics {
        for _ in 0..frames {
            let intents = self.random_intents();
            let outcome = self.sim.update(self.frame_interval, intents);
            self.metrics.on_frame(&outcome, self.sim.len());

            if let Some(collision) = outcome.collision {
                log::info!(
                    "session {} ended at tick {} on ({}, {})",
                    self.metrics.sessions_played + 1,
                    collision.tick,
                    collision.cell.x,
                    collision.cell.y
                );
                self.metrics.on_session_end();
                self.sim.initialize(self.config.start(), self.config.stride);
                self.sim.grow(self.config.initial_length - 1);
            }
        }

        self.metrics.elapsed_time = simulated_time(self.frame_interval, frames);
        &self.metrics
    }

    pub fn run(&mut self, frames: u64) -> Result<()> {
        let summary = self.play(frames).summary();
        println!("{summary}");
        Ok(())
    }
}

/// Simulated time covered by `frames` frames, saturating at `u64::MAX` ms
fn simulated_time(frame_interval: Duration, frames: u64) -> Duration {
    let millis = u64::try_from(frame_interval.as_millis()).unwrap_or(u64::MAX);
    Duration::from_millis(millis.saturating_mul(frames))
}
