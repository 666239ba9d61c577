//! Error types for configuring a simulation.
//!
//! The simulation itself never fails once constructed; only building it from
//! configuration can.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("stride must be positive, got {0}")]
    InvalidStride(i32),

    #[error("tick interval must be non-zero")]
    ZeroTickInterval,

    #[error("initial chain length must be at least 1")]
    ZeroInitialLength,
}
