//! Error handling for gridwalk.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod grid_error;
pub mod runner_error;
pub mod visualizer_error;

pub use config_error::ConfigError;
pub use error_code::GridwalkErrorCode;
pub use grid_error::GridError;
pub use runner_error::RunnerError;
pub use visualizer_error::VisualizerError;
