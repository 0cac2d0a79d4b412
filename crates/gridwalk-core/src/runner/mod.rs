//! Traversal Runner Module
//!
//! Advances a search algorithm over the grid graph by exactly one logical
//! step per tick. The frontier discipline (stack vs queue) is the only
//! difference between depth-first and breadth-first; the stepping algorithm
//! lives once in `TraversalRunner`. Tick cadence is injected: the core
//! exposes `tick()` as a pure state transition and `TickDriver` as an
//! optional cooperative loop around it.

mod driver;
mod engine;
mod frontier;
mod handle;

pub use driver::TickDriver;
pub use engine::{Algorithm, TickStatus, TraversalRunner};
pub use frontier::{Frontier, QueueFrontier, StackFrontier};
pub use handle::RunHandle;
