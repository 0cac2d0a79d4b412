//! Layered configuration for the visualizer core.

mod visualizer_config;

pub use visualizer_config::{
    GridSection, ResolvedSettings, RunSection, VisualizerConfig,
};
