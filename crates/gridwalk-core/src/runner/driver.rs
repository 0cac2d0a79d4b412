//! TickDriver — cooperative fixed-cadence scheduling around `tick()`.

use std::time::Duration;

use crate::grid::GridGraph;

use super::engine::{TickStatus, TraversalRunner};

/// Invokes `tick()` once per interval until the run finishes or its handle
/// is cancelled.
///
/// Ticks are strictly sequential: the next tick cannot start before the
/// previous one returns, which is what keeps the runner's visited-set
/// bookkeeping sound without synchronization. Between ticks the driver
/// sleeps and the graph is free for inspection.
#[derive(Debug, Clone)]
pub struct TickDriver {
    interval: Duration,
}

impl TickDriver {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// Drive a started runner to completion. Returns the final status.
    pub fn drive(&self, runner: &mut TraversalRunner, graph: &mut GridGraph) -> TickStatus {
        let handle = runner.handle();
        loop {
            if handle.is_cancelled() {
                runner.stop();
                return runner.last_status();
            }
            let status = runner.tick(graph);
            if runner.is_finished() {
                return status;
            }
            std::thread::sleep(self.interval);
        }
    }
}
