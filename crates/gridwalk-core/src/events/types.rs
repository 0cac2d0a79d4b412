//! Event payload types.

use crate::grid::CellKind;
use crate::runner::{Algorithm, TickStatus};

/// Payload for `on_run_started`.
#[derive(Debug, Clone)]
pub struct RunStartedEvent {
    pub algorithm: Algorithm,
    pub start: (u32, u32),
    pub end: (u32, u32),
}

/// Payload for `on_run_stopped`. Emitted exactly once per run.
#[derive(Debug, Clone)]
pub struct RunStoppedEvent {
    pub status: TickStatus,
    pub visited_count: usize,
}

/// Payload for `on_cell_visited`. Emitted at most once per cell per run.
#[derive(Debug, Clone)]
pub struct CellVisitedEvent {
    pub row: u32,
    pub col: u32,
    pub kind: CellKind,
}
