//! Cell state machine.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Row-major index of a cell within its grid. Cell identity for the whole
/// crate: two cells are the same cell iff their ids are equal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct CellId(pub u32);

/// Semantic kind of a cell.
///
/// `Path` is a post-run annotation applied by collaborators, never by the
/// runner itself. `Error` marks a wall cell that was visited anyway — a
/// consistency guard that only fires when a wall lands on a cell already
/// sitting in an active frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    Wall,
    Clear,
    Start,
    End,
    Visited,
    Path,
    Error,
}

/// One grid position: fixed lattice coordinates, a kind, and the set of
/// adjacent cell ids (mutual — if A adjoins B, B adjoins A).
#[derive(Debug, Clone)]
pub struct Cell {
    id: CellId,
    row: u32,
    col: u32,
    kind: CellKind,
    neighbors: SmallVec<[CellId; 4]>,
}

impl Cell {
    pub(crate) fn new(id: CellId, row: u32, col: u32) -> Self {
        Self {
            id,
            row,
            col,
            kind: CellKind::Clear,
            neighbors: SmallVec::new(),
        }
    }

    pub fn id(&self) -> CellId {
        self.id
    }

    pub fn row(&self) -> u32 {
        self.row
    }

    pub fn col(&self) -> u32 {
        self.col
    }

    pub fn kind(&self) -> CellKind {
        self.kind
    }

    pub fn is_wall(&self) -> bool {
        self.kind == CellKind::Wall
    }

    /// Current adjacency set. Empty for wall cells.
    pub fn neighbors(&self) -> &[CellId] {
        &self.neighbors
    }

    pub(crate) fn link(&mut self, other: CellId) {
        if !self.neighbors.contains(&other) {
            self.neighbors.push(other);
        }
    }

    pub(crate) fn unlink(&mut self, other: CellId) {
        self.neighbors.retain(|id| *id != other);
    }

    pub(crate) fn clear_links(&mut self) {
        self.neighbors.clear();
    }

    pub(crate) fn set_kind(&mut self, kind: CellKind) {
        self.kind = kind;
    }

    /// Mark this cell as visited by a traversal.
    ///
    /// Visiting a wall is a data-consistency violation and yields `Error`
    /// instead of `Visited`.
    pub fn mark_visited(&mut self) {
        if self.kind == CellKind::Wall {
            self.kind = CellKind::Error;
        } else {
            self.kind = CellKind::Visited;
        }
    }

    /// Post-run path annotation, applied by collaborators once a run has
    /// reached the end; the runner itself never backfills a path. Only a
    /// visited cell can be promoted.
    pub fn mark_path(&mut self) {
        if self.kind == CellKind::Visited {
            self.kind = CellKind::Path;
        }
    }

    pub fn mark_start(&mut self) {
        self.kind = CellKind::Start;
    }

    /// Demote from Start back to Clear. No-op unless currently Start, so a
    /// previous holder that was walled in the interim keeps its wall.
    pub fn unmark_start(&mut self) {
        if self.kind == CellKind::Start {
            self.kind = CellKind::Clear;
        }
    }

    pub fn mark_end(&mut self) {
        self.kind = CellKind::End;
    }

    /// Demote from End back to Clear. Same interim-wall rule as
    /// `unmark_start`.
    pub fn unmark_end(&mut self) {
        if self.kind == CellKind::End {
            self.kind = CellKind::Clear;
        }
    }

    /// Return traversal annotations (Visited, Path) to Clear.
    /// Wall/Start/End/Error are untouched.
    pub fn reset_traversal(&mut self) {
        if matches!(self.kind, CellKind::Visited | CellKind::Path) {
            self.kind = CellKind::Clear;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell() -> Cell {
        Cell::new(CellId(0), 0, 0)
    }

    #[test]
    fn new_cell_is_clear_with_no_neighbors() {
        let c = cell();
        assert_eq!(c.kind(), CellKind::Clear);
        assert!(c.neighbors().is_empty());
    }

    #[test]
    fn link_is_idempotent() {
        let mut c = cell();
        c.link(CellId(1));
        c.link(CellId(1));
        assert_eq!(c.neighbors(), &[CellId(1)]);
    }

    #[test]
    fn visiting_a_wall_yields_error() {
        let mut c = cell();
        c.set_kind(CellKind::Wall);
        c.mark_visited();
        assert_eq!(c.kind(), CellKind::Error);
    }

    #[test]
    fn unmark_start_only_demotes_a_current_start() {
        let mut c = cell();
        c.mark_start();
        c.unmark_start();
        assert_eq!(c.kind(), CellKind::Clear);

        // Walled in the interim: the wall survives, the role is vacated.
        c.mark_start();
        c.set_kind(CellKind::Wall);
        c.unmark_start();
        assert_eq!(c.kind(), CellKind::Wall);
    }

    #[test]
    fn cell_kinds_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&CellKind::Wall).unwrap(), "\"wall\"");
        assert_eq!(
            serde_json::to_string(&CellKind::Visited).unwrap(),
            "\"visited\""
        );
    }

    #[test]
    fn reset_traversal_clears_visited_and_path_only() {
        let mut c = cell();
        c.mark_visited();
        c.reset_traversal();
        assert_eq!(c.kind(), CellKind::Clear);

        c.set_kind(CellKind::Path);
        c.reset_traversal();
        assert_eq!(c.kind(), CellKind::Clear);

        c.set_kind(CellKind::Error);
        c.reset_traversal();
        assert_eq!(c.kind(), CellKind::Error);

        c.mark_end();
        c.reset_traversal();
        assert_eq!(c.kind(), CellKind::End);
    }
}
