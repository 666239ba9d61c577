use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::state::Position;
use crate::error::ConfigError;

/// Configuration for the simulation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Distance in world units covered by one tick
    pub stride: i32,
    /// Milliseconds between movement ticks
    pub tick_interval_ms: u64,
    /// Starting head position
    pub start_x: i32,
    pub start_y: i32,
    /// Segments a driver grows the chain to after initializing it
    pub initial_length: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            stride: 32,
            tick_interval_ms: 200,
            start_x: 0,
            start_y: 0,
            initial_length: 1,
        }
    }
}

impl SimConfig {
    /// Create a new configuration with custom stride and cadence
    pub fn new(stride: i32, tick_interval_ms: u64) -> Self {
        Self {
            stride,
            tick_interval_ms,
            ..Default::default()
        }
    }

    /// Cell-space movement: unit stride at 8 ticks per second
    pub fn cells() -> Self {
        Self::new(1, 125)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn start(&self) -> Position {
        Position::new(self.start_x, self.start_y)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stride <= 0 {
            return Err(ConfigError::InvalidStride(self.stride));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        if self.initial_length == 0 {
            return Err(ConfigError::ZeroInitialLength);
        }
        Ok(())
    }

    /// Parse and validate a TOML document; missing fields take defaults
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }
}
