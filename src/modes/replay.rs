//! Headless replay of a scripted frame sequence.
//!
//! A script is a TOML document listing frames:
//!
//! ```toml
//! [[frames]]
//! elapsed_ms = 200
//!
//! [[frames]]
//! elapsed_ms = 200
//! intent = "down"
//! ```
//!
//! Each frame becomes one `Simulation::update` call. The report lists the
//! final segments and every collision with the frame that raised it.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::game::{
    BodyCollision, ChainStatus, Direction, DirectionalIntents, Segment, SimConfig, Simulation,
};

/// One scripted frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptFrame {
    pub elapsed_ms: u64,
    #[serde(default)]
    pub intent: Option<Direction>,
    /// Segments to grow by before this frame's update
    #[serde(default)]
    pub grow: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayScript {
    #[serde(default)]
    pub frames: Vec<ScriptFrame>,
}

impl ReplayScript {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).context("Failed to parse replay script")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read replay script {}", path.display()))?;
        Self::from_toml_str(&source)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameCollision {
    /// Index of the script frame whose update raised the collision
    pub frame: usize,
    #[serde(flatten)]
    pub collision: BodyCollision,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub frames: usize,
    pub moves: u64,
    pub status: ChainStatus,
    pub progress: f32,
    pub segments: Vec<Segment>,
    pub collisions: Vec<FrameCollision>,
}

pub struct ReplayMode {
    config: SimConfig,
    script: ReplayScript,
}

impl ReplayMode {
    pub fn new(config: SimConfig, script: ReplayScript) -> Self {
        Self { config, script }
    }

    /// Play the script through a fresh simulation
    pub fn play(&self) -> Result<ReplayReport> {
        let mut sim = Simulation::new(&self.config).context("Invalid simulation config")?;
        sim.grow(self.config.initial_length - 1);

        let mut collisions = Vec::new();

        for (index, frame) in self.script.frames.iter().enumerate() {
            sim.grow(frame.grow);

            let intents = DirectionalIntents::from(frame.intent);
            let outcome = sim.update(Duration::from_millis(frame.elapsed_ms), intents);

            if let Some(collision) = outcome.collision {
                log::info!(
                    "frame {index}: collision at ({}, {}) on tick {}",
                    collision.cell.x,
                    collision.cell.y,
                    collision.tick
                );
                collisions.push(FrameCollision {
                    frame: index,
                    collision,
                });
            }
        }

        Ok(ReplayReport {
            frames: self.script.frames.len(),
            moves: sim.ticks(),
            status: sim.status(),
            progress: sim.progress(),
            segments: sim.segments().copied().collect(),
            collisions,
        })
    }

    /// Play the script and print the report as JSON on stdout
    pub fn run(&self) -> Result<()> {
        let report = self.play()?;
        let json = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
        println!("{json}");
        Ok(())
    }
}
