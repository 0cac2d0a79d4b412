//! GridController — mediates edits and the run lifecycle.
//!
//! Owns the graph, the start/end designations, and the active runner, so
//! selection state is explicit instead of process-wide, and a runner can
//! never outlive the graph it was bound to: `rebuild` stops and discards
//! the runner before the old graph is dropped.

use std::sync::Arc;

use crate::config::ResolvedSettings;
use crate::errors::{GridError, RunnerError, VisualizerError};
use crate::events::EventDispatcher;
use crate::grid::{CellId, CellKind, GridGraph};
use crate::runner::{Algorithm, TickStatus, TraversalRunner};

pub struct GridController {
    graph: GridGraph,
    dispatcher: Arc<EventDispatcher>,
    start: Option<CellId>,
    end: Option<CellId>,
    runner: Option<TraversalRunner>,
    tick_interval_ms: u64,
    default_algorithm: Algorithm,
}

impl GridController {
    pub fn new(
        rows: u32,
        cols: u32,
        dispatcher: Arc<EventDispatcher>,
    ) -> Result<Self, GridError> {
        Ok(Self {
            graph: GridGraph::build(rows, cols)?,
            dispatcher,
            start: None,
            end: None,
            runner: None,
            tick_interval_ms: crate::constants::DEFAULT_TICK_INTERVAL_MS,
            default_algorithm: Algorithm::BreadthFirst,
        })
    }

    pub fn from_settings(
        settings: &ResolvedSettings,
        dispatcher: Arc<EventDispatcher>,
    ) -> Result<Self, VisualizerError> {
        let mut controller = Self::new(settings.rows, settings.cols, dispatcher)?;
        controller.tick_interval_ms = settings.tick_interval_ms;
        controller.default_algorithm = settings.algorithm;
        Ok(controller)
    }

    /// Read access to the graph. Safe between ticks; mutation goes through
    /// the controller's edit operations.
    pub fn graph(&self) -> &GridGraph {
        &self.graph
    }

    pub fn tick_interval_ms(&self) -> u64 {
        self.tick_interval_ms
    }

    pub fn default_algorithm(&self) -> Algorithm {
        self.default_algorithm
    }

    pub fn start_designation(&self) -> Option<CellId> {
        self.start
    }

    pub fn end_designation(&self) -> Option<CellId> {
        self.end
    }

    pub fn is_running(&self) -> bool {
        self.runner.as_ref().is_some_and(|r| !r.is_finished())
    }

    /// Rebuild the grid with new dimensions. Any active runner is stopped
    /// and discarded first and all designations are cleared; prior cells do
    /// not survive a rebuild.
    pub fn rebuild(&mut self, rows: u32, cols: u32) -> Result<(), GridError> {
        let graph = GridGraph::build(rows, cols)?;
        self.discard_runner();
        self.start = None;
        self.end = None;
        self.graph = graph;
        tracing::debug!(rows, cols, "grid rebuilt");
        Ok(())
    }

    /// Designate the start cell, demoting any previous holder.
    pub fn set_start(&mut self, row: u32, col: u32) -> Result<(), GridError> {
        let id = self.graph.id_at(row, col)?;
        if let Some(prev) = self.start.take() {
            self.graph.cell_by_id_mut(prev).unmark_start();
        }
        self.graph.cell_by_id_mut(id).mark_start();
        self.start = Some(id);
        Ok(())
    }

    /// Designate the end cell, demoting any previous holder.
    pub fn set_end(&mut self, row: u32, col: u32) -> Result<(), GridError> {
        let id = self.graph.id_at(row, col)?;
        if let Some(prev) = self.end.take() {
            self.graph.cell_by_id_mut(prev).unmark_end();
        }
        self.graph.cell_by_id_mut(id).mark_end();
        self.end = Some(id);
        Ok(())
    }

    /// Wall-tool click: walls become clear, everything else becomes a wall.
    pub fn toggle_wall(&mut self, row: u32, col: u32) -> Result<(), GridError> {
        if self.graph.kind(row, col)? == CellKind::Wall {
            self.graph.clear_wall(row, col)
        } else {
            self.graph.set_wall(row, col)
        }
    }

    pub fn set_wall(&mut self, row: u32, col: u32) -> Result<(), GridError> {
        self.graph.set_wall(row, col)
    }

    pub fn clear_wall(&mut self, row: u32, col: u32) -> Result<(), GridError> {
        self.graph.clear_wall(row, col)
    }

    /// Start a traversal bound to the current designations. Clears the
    /// previous run's annotations first, then performs the first tick
    /// synchronously.
    pub fn start_run(&mut self, algorithm: Algorithm) -> Result<TickStatus, VisualizerError> {
        if self.is_running() {
            return Err(RunnerError::AlreadyRunning.into());
        }
        let start = self
            .start
            .ok_or(RunnerError::MissingDesignation { role: "start" })?;
        let end = self
            .end
            .ok_or(RunnerError::MissingDesignation { role: "end" })?;

        self.graph.reset_traversal();

        let mut runner =
            TraversalRunner::new(algorithm, start, end, Arc::clone(&self.dispatcher));
        let status = runner.start(&mut self.graph)?;
        self.runner = Some(runner);
        Ok(status)
    }

    /// Start a traversal with the configured default algorithm.
    pub fn start_default_run(&mut self) -> Result<TickStatus, VisualizerError> {
        self.start_run(self.default_algorithm)
    }

    /// Advance the active run by one step. `None` when no run is active.
    pub fn tick(&mut self) -> Option<TickStatus> {
        let runner = self.runner.as_mut()?;
        Some(runner.tick(&mut self.graph))
    }

    /// Stop the active run. Idempotent; harmless with no run.
    pub fn stop_run(&mut self) {
        if let Some(runner) = self.runner.as_mut() {
            runner.stop();
        }
    }

    /// Promote visited cells to Path, post-run. Cells that are not Visited
    /// are left as they are.
    pub fn annotate_path(&mut self, cells: &[(u32, u32)]) -> Result<(), GridError> {
        for &(row, col) in cells {
            self.graph.cell_mut(row, col)?.mark_path();
        }
        Ok(())
    }

    /// Return Visited/Path annotations to Clear.
    pub fn reset_traversal(&mut self) {
        self.graph.reset_traversal();
    }

    /// Clear every cell back to an open grid and vacate both designations.
    pub fn clear_grid(&mut self) {
        self.discard_runner();
        self.graph.clear_grid();
        self.start = None;
        self.end = None;
        tracing::debug!("grid cleared");
    }

    fn discard_runner(&mut self) {
        if let Some(runner) = self.runner.as_mut() {
            runner.stop();
        }
        self.runner = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(rows: u32, cols: u32) -> GridController {
        GridController::new(rows, cols, Arc::new(EventDispatcher::new())).unwrap()
    }

    #[test]
    fn at_most_one_start_and_end() {
        let mut c = controller(3, 3);
        c.set_start(0, 0).unwrap();
        c.set_start(1, 1).unwrap();
        c.set_end(2, 2).unwrap();
        c.set_end(0, 2).unwrap();

        let starts = c.graph().cells().filter(|x| x.kind() == CellKind::Start).count();
        let ends = c.graph().cells().filter(|x| x.kind() == CellKind::End).count();
        assert_eq!(starts, 1);
        assert_eq!(ends, 1);
        assert_eq!(c.graph().kind(1, 1).unwrap(), CellKind::Start);
        assert_eq!(c.graph().kind(0, 0).unwrap(), CellKind::Clear);
    }

    #[test]
    fn demotion_leaves_an_interim_wall_in_place() {
        let mut c = controller(3, 3);
        c.set_start(0, 0).unwrap();
        c.set_wall(0, 0).unwrap();
        c.set_start(1, 1).unwrap();
        assert_eq!(c.graph().kind(0, 0).unwrap(), CellKind::Wall);
    }

    #[test]
    fn start_run_requires_both_designations() {
        let mut c = controller(3, 3);
        assert_eq!(
            c.start_run(Algorithm::BreadthFirst),
            Err(RunnerError::MissingDesignation { role: "start" }.into())
        );
        c.set_start(0, 0).unwrap();
        assert_eq!(
            c.start_run(Algorithm::BreadthFirst),
            Err(RunnerError::MissingDesignation { role: "end" }.into())
        );
    }

    #[test]
    fn start_run_while_running_fails() {
        let mut c = controller(4, 4);
        c.set_start(0, 0).unwrap();
        c.set_end(3, 3).unwrap();
        c.start_run(Algorithm::BreadthFirst).unwrap();
        assert_eq!(
            c.start_run(Algorithm::DepthFirst),
            Err(RunnerError::AlreadyRunning.into())
        );
    }

    #[test]
    fn a_finished_run_can_be_restarted() {
        let mut c = controller(1, 2);
        c.set_start(0, 0).unwrap();
        c.set_end(0, 1).unwrap();
        c.start_run(Algorithm::BreadthFirst).unwrap();
        while c.tick() == Some(TickStatus::Continuing) {}
        assert!(!c.is_running());
        c.start_run(Algorithm::DepthFirst).unwrap();
    }

    #[test]
    fn rebuild_discards_runner_and_designations() {
        let mut c = controller(3, 3);
        c.set_start(0, 0).unwrap();
        c.set_end(2, 2).unwrap();
        c.start_run(Algorithm::BreadthFirst).unwrap();

        c.rebuild(5, 5).unwrap();
        assert!(!c.is_running());
        assert!(c.tick().is_none());
        assert_eq!(c.start_designation(), None);
        assert_eq!(c.end_designation(), None);
        assert_eq!(c.graph().cell_count(), 25);
    }

    #[test]
    fn failed_rebuild_leaves_prior_state() {
        let mut c = controller(3, 3);
        c.set_start(0, 0).unwrap();
        assert!(c.rebuild(0, 5).is_err());
        assert_eq!(c.graph().cell_count(), 9);
        assert_eq!(c.start_designation(), Some(CellId(0)));
    }

    #[test]
    fn restart_clears_previous_annotations() {
        let mut c = controller(1, 3);
        c.set_start(0, 0).unwrap();
        c.set_end(0, 2).unwrap();
        c.start_run(Algorithm::BreadthFirst).unwrap();
        while c.tick() == Some(TickStatus::Continuing) {}
        assert_eq!(c.graph().kind(0, 1).unwrap(), CellKind::Visited);

        c.start_run(Algorithm::BreadthFirst).unwrap();
        // First tick processes the start cell only; (0,1) was reset.
        assert_eq!(c.graph().kind(0, 1).unwrap(), CellKind::Clear);
    }

    #[test]
    fn from_settings_carries_tick_interval_and_algorithm() {
        let settings = ResolvedSettings {
            rows: 2,
            cols: 2,
            tick_interval_ms: 40,
            algorithm: Algorithm::DepthFirst,
        };
        let mut c =
            GridController::from_settings(&settings, Arc::new(EventDispatcher::new()))
                .unwrap();
        assert_eq!(c.tick_interval_ms(), 40);
        assert_eq!(c.default_algorithm(), Algorithm::DepthFirst);

        c.set_start(0, 0).unwrap();
        c.set_end(1, 1).unwrap();
        c.start_default_run().unwrap();
        assert!(c.is_running());
    }

    #[test]
    fn annotate_path_promotes_visited_cells_only() {
        let mut c = controller(1, 3);
        c.set_start(0, 0).unwrap();
        c.set_end(0, 2).unwrap();
        c.start_run(Algorithm::BreadthFirst).unwrap();
        while c.tick() == Some(TickStatus::Continuing) {}

        c.annotate_path(&[(0, 1), (0, 2)]).unwrap();
        assert_eq!(c.graph().kind(0, 1).unwrap(), CellKind::Path);
        // The end cell was never Visited, so it keeps its designation.
        assert_eq!(c.graph().kind(0, 2).unwrap(), CellKind::End);

        c.reset_traversal();
        assert_eq!(c.graph().kind(0, 1).unwrap(), CellKind::Clear);
    }

    #[test]
    fn clear_grid_vacates_everything() {
        let mut c = controller(3, 3);
        c.set_start(0, 0).unwrap();
        c.set_end(2, 2).unwrap();
        c.set_wall(1, 1).unwrap();
        c.clear_grid();

        assert!(c.graph().cells().all(|x| x.kind() == CellKind::Clear));
        assert_eq!(c.start_designation(), None);
        assert_eq!(c.end_designation(), None);
    }
}
