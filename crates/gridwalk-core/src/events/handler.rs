//! GridEventHandler — collaborator-facing hook trait.

use super::types::*;

/// Hooks invoked by the core during a traversal run.
///
/// All methods have no-op defaults so a handler only implements what it
/// cares about. Handlers must be cheap: dispatch is synchronous and happens
/// inside the tick.
pub trait GridEventHandler: Send + Sync {
    fn on_run_started(&self, _event: &RunStartedEvent) {}

    fn on_run_stopped(&self, _event: &RunStoppedEvent) {}

    fn on_cell_visited(&self, _event: &CellVisitedEvent) {}
}
