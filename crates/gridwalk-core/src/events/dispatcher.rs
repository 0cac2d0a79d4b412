//! EventDispatcher — synchronous event dispatch with zero overhead when empty.

use std::sync::Arc;

use super::handler::GridEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
///
/// When no handlers are registered, `emit` iterates over an empty Vec —
/// effectively zero cost.
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn GridEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn GridEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers. A panicking handler is
    /// isolated; the remaining handlers still receive the event.
    fn emit<F: Fn(&dyn GridEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!("event handler panicked; skipping it for this event");
            }
        }
    }

    pub fn emit_run_started(&self, event: &RunStartedEvent) {
        self.emit(|h| h.on_run_started(event));
    }

    pub fn emit_run_stopped(&self, event: &RunStoppedEvent) {
        self.emit(|h| h.on_run_stopped(event));
    }

    pub fn emit_cell_visited(&self, event: &CellVisitedEvent) {
        self.emit(|h| h.on_cell_visited(event));
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
