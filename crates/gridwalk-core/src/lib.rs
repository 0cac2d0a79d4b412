//! gridwalk-core: grid graph model and frame-stepped traversal engine
//!
//! This crate provides the algorithmic core of the gridwalk visualizer:
//! - Grid: rectangular cell lattice with wall-aware adjacency
//! - Runner: one-step-per-tick BFS/DFS traversal with start/stop semantics
//! - Events: collaborator hooks for rendering layers (no pixels in here)
//! - Controller: edit/run lifecycle mediation and start/end designation
//! - Config: layered TOML configuration with env overrides
//!
//! Rendering, input handling, and the settings UI are external collaborators;
//! they observe the core through `GridEventHandler` and read-only grid access.

pub mod config;
pub mod constants;
pub mod controller;
pub mod errors;
pub mod events;
pub mod grid;
pub mod logging;
pub mod runner;

// Re-exports for convenience
pub use config::{GridSection, ResolvedSettings, RunSection, VisualizerConfig};
pub use controller::GridController;
pub use errors::{
    ConfigError, GridError, GridwalkErrorCode, RunnerError, VisualizerError,
};
pub use events::{
    CellVisitedEvent, EventDispatcher, GridEventHandler, RunStartedEvent,
    RunStoppedEvent,
};
pub use grid::{Cell, CellId, CellKind, GridGraph};
pub use runner::{
    Algorithm, Frontier, QueueFrontier, RunHandle, StackFrontier, TickDriver,
    TickStatus, TraversalRunner,
};
