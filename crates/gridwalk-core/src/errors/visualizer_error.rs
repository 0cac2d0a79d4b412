//! Top-level error aggregating subsystem errors via `From` conversions.

use super::error_code::GridwalkErrorCode;
use super::{ConfigError, GridError, RunnerError};

/// Errors surfaced to the UI/controller layer.
/// All variants are local, synchronous failures; nothing is retried here.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum VisualizerError {
    #[error("Grid error: {0}")]
    Grid(#[from] GridError),

    #[error("Runner error: {0}")]
    Runner(#[from] RunnerError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl GridwalkErrorCode for VisualizerError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Grid(e) => e.error_code(),
            Self::Runner(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
