//! TraversalRunner — the shared one-step-per-tick search engine.

use std::sync::Arc;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::errors::RunnerError;
use crate::events::{CellVisitedEvent, EventDispatcher, RunStartedEvent, RunStoppedEvent};
use crate::grid::{CellId, GridGraph};

use super::frontier::{Frontier, QueueFrontier, StackFrontier};
use super::handle::RunHandle;

/// Which frontier discipline drives the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    BreadthFirst,
    DepthFirst,
}

impl Algorithm {
    /// Parse a user-supplied name. Accepts the short forms used in env
    /// overrides and the kebab-case serde names.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Some(Self::BreadthFirst),
            "dfs" | "depth-first" => Some(Self::DepthFirst),
            _ => None,
        }
    }

    fn make_frontier(self) -> Box<dyn Frontier> {
        match self {
            Self::BreadthFirst => Box::new(QueueFrontier::new()),
            Self::DepthFirst => Box::new(StackFrontier::new()),
        }
    }
}

/// Outcome of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickStatus {
    /// The frontier still has work.
    Continuing,
    /// The end cell was removed from the frontier.
    Reached,
    /// The frontier drained without meeting the end cell.
    Exhausted,
}

/// Drives one search over the grid, one logical step per `tick`.
///
/// The runner stores cell ids, not references: it borrows the graph per
/// call, so a rebuilt graph can never be observed through a stale runner —
/// the controller drops the runner before rebuilding.
///
/// Created per run, bound to the start/end designations current at creation
/// time, and discarded once finished or stopped.
pub struct TraversalRunner {
    algorithm: Algorithm,
    start: CellId,
    end: CellId,
    frontier: Box<dyn Frontier>,
    visited: FxHashSet<CellId>,
    started: bool,
    finished: bool,
    last_status: TickStatus,
    stop_emitted: bool,
    handle: RunHandle,
    dispatcher: Arc<EventDispatcher>,
}

impl TraversalRunner {
    pub fn new(
        algorithm: Algorithm,
        start: CellId,
        end: CellId,
        dispatcher: Arc<EventDispatcher>,
    ) -> Self {
        Self {
            algorithm,
            start,
            end,
            frontier: algorithm.make_frontier(),
            visited: FxHashSet::default(),
            started: false,
            finished: false,
            last_status: TickStatus::Continuing,
            stop_emitted: false,
            handle: RunHandle::new(),
            dispatcher,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Handle for cancelling this run from outside the tick cadence.
    pub fn handle(&self) -> RunHandle {
        self.handle.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn last_status(&self) -> TickStatus {
        self.last_status
    }

    /// Number of cells recorded in the visited set so far.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Seed the frontier with the start cell, emit `on_run_started`, and
    /// perform the first tick synchronously. Scheduling of further ticks is
    /// the caller's concern (see `TickDriver`).
    pub fn start(&mut self, graph: &mut GridGraph) -> Result<TickStatus, RunnerError> {
        if self.started {
            return Err(RunnerError::AlreadyRunning);
        }
        self.started = true;
        self.frontier.push(self.start);

        let start_cell = graph.cell_by_id(self.start);
        let end_cell = graph.cell_by_id(self.end);
        tracing::info!(
            algorithm = ?self.algorithm,
            start = ?(start_cell.row(), start_cell.col()),
            end = ?(end_cell.row(), end_cell.col()),
            "run started"
        );
        self.dispatcher.emit_run_started(&RunStartedEvent {
            algorithm: self.algorithm,
            start: (start_cell.row(), start_cell.col()),
            end: (end_cell.row(), end_cell.col()),
        });

        Ok(self.tick(graph))
    }

    /// Advance exactly one step. A no-op returning the last status once the
    /// run has finished.
    ///
    /// The visited-set check happens at removal time, not insertion time: a
    /// cell pushed by several predecessors is expanded at most once, and the
    /// extra frontier entries fall through as no-op ticks on their own turn.
    pub fn tick(&mut self, graph: &mut GridGraph) -> TickStatus {
        if self.finished {
            return self.last_status;
        }

        let Some(id) = self.frontier.next() else {
            return self.finish(TickStatus::Exhausted);
        };

        // Identity comparison; the end cell's kind is never overwritten.
        if id == self.end {
            return self.finish(TickStatus::Reached);
        }

        let first_visit = self.visited.insert(id);

        if id != self.start {
            let cell = graph.cell_by_id_mut(id);
            cell.mark_visited();
            if first_visit {
                let event = CellVisitedEvent {
                    row: cell.row(),
                    col: cell.col(),
                    kind: cell.kind(),
                };
                self.dispatcher.emit_cell_visited(&event);
            }
        }

        if first_visit {
            // Snapshot adjacency before pushing: edges may change between
            // ticks, and what was captured here stays captured.
            let neighbors: SmallVec<[CellId; 4]> =
                graph.cell_by_id(id).neighbors().iter().copied().collect();
            for n in neighbors {
                self.frontier.push(n);
            }
        }

        self.last_status = TickStatus::Continuing;
        TickStatus::Continuing
    }

    /// Cancel scheduled ticking and end the run. Idempotent; the completion
    /// event fires exactly once per run no matter how often this is called,
    /// or whether the run ended on its own.
    pub fn stop(&mut self) {
        self.handle.cancel();
        self.finished = true;
        if !self.stop_emitted {
            self.stop_emitted = true;
            tracing::info!(
                status = ?self.last_status,
                visited = self.visited.len(),
                "run stopped"
            );
            self.dispatcher.emit_run_stopped(&RunStoppedEvent {
                status: self.last_status,
                visited_count: self.visited.len(),
            });
        }
    }

    fn finish(&mut self, status: TickStatus) -> TickStatus {
        self.last_status = status;
        self.finished = true;
        self.stop();
        status
    }
}
