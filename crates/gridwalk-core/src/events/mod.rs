//! Event system: how the core talks to rendering layers.
//!
//! The core never touches pixels, colors, or input devices. Collaborators
//! implement `GridEventHandler` and repaint in response to run lifecycle
//! and per-cell visitation events.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::GridEventHandler;
pub use types::{CellVisitedEvent, RunStartedEvent, RunStoppedEvent};
