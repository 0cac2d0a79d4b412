//! GridGraph — wall-aware lattice adjacency.

use smallvec::SmallVec;

use crate::errors::GridError;

use super::cell::{Cell, CellId, CellKind};

/// Undirected adjacency graph over a `rows x cols` cell lattice.
///
/// Cells live in a row-major `Vec`; adjacency is up/down/left/right only.
/// Wall edits mutate edges eagerly, in both directions, so the invariant
/// "a wall has no edges; everything else is linked to every non-wall
/// lattice neighbor" holds between any two public calls.
#[derive(Debug, Clone)]
pub struct GridGraph {
    rows: u32,
    cols: u32,
    cells: Vec<Cell>,
}

impl GridGraph {
    /// Build a fully linked grid of Clear cells.
    pub fn build(rows: u32, cols: u32) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimension { rows, cols });
        }

        let mut cells = Vec::with_capacity((rows * cols) as usize);
        for row in 0..rows {
            for col in 0..cols {
                let id = CellId(row * cols + col);
                cells.push(Cell::new(id, row, col));
            }
        }

        let mut graph = Self { rows, cols, cells };
        graph.link_full_lattice();
        Ok(graph)
    }

    pub fn row_count(&self) -> u32 {
        self.rows
    }

    pub fn column_count(&self) -> u32 {
        self.cols
    }

    pub fn cell_count(&self) -> u32 {
        self.rows * self.cols
    }

    /// Resolve coordinates to a cell id, bounds-checked.
    pub fn id_at(&self, row: u32, col: u32) -> Result<CellId, GridError> {
        if row >= self.rows || col >= self.cols {
            return Err(GridError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(CellId(row * self.cols + col))
    }

    pub fn cell(&self, row: u32, col: u32) -> Result<&Cell, GridError> {
        let id = self.id_at(row, col)?;
        Ok(&self.cells[id.0 as usize])
    }

    pub fn kind(&self, row: u32, col: u32) -> Result<CellKind, GridError> {
        Ok(self.cell(row, col)?.kind())
    }

    pub fn cell_mut(&mut self, row: u32, col: u32) -> Result<&mut Cell, GridError> {
        let id = self.id_at(row, col)?;
        Ok(&mut self.cells[id.0 as usize])
    }

    pub fn cell_by_id(&self, id: CellId) -> &Cell {
        &self.cells[id.0 as usize]
    }

    pub(crate) fn cell_by_id_mut(&mut self, id: CellId) -> &mut Cell {
        &mut self.cells[id.0 as usize]
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Current adjacency set of the cell at (row, col).
    pub fn neighbors_of(&self, row: u32, col: u32) -> Result<&[CellId], GridError> {
        Ok(self.cell(row, col)?.neighbors())
    }

    /// Turn the cell into a wall: drop every edge touching it, both
    /// directions. No-op if it is already a wall.
    pub fn set_wall(&mut self, row: u32, col: u32) -> Result<(), GridError> {
        let id = self.id_at(row, col)?;
        if self.cells[id.0 as usize].is_wall() {
            return Ok(());
        }

        for other in self.lattice_neighbors(row, col) {
            self.cells[id.0 as usize].unlink(other);
            self.cells[other.0 as usize].unlink(id);
        }
        self.cells[id.0 as usize].set_kind(CellKind::Wall);
        tracing::debug!(row, col, "wall set");
        Ok(())
    }

    /// Turn a wall back into a clear cell and restore edges to every
    /// lattice neighbor that is not itself a wall. No-op if not a wall.
    pub fn clear_wall(&mut self, row: u32, col: u32) -> Result<(), GridError> {
        let id = self.id_at(row, col)?;
        if !self.cells[id.0 as usize].is_wall() {
            return Ok(());
        }

        for other in self.lattice_neighbors(row, col) {
            if self.cells[other.0 as usize].is_wall() {
                continue;
            }
            self.cells[id.0 as usize].link(other);
            self.cells[other.0 as usize].link(id);
        }
        self.cells[id.0 as usize].set_kind(CellKind::Clear);
        tracing::debug!(row, col, "wall cleared");
        Ok(())
    }

    /// Return every cell to Clear and re-link the full lattice.
    pub fn clear_grid(&mut self) {
        for cell in &mut self.cells {
            cell.set_kind(CellKind::Clear);
        }
        self.link_full_lattice();
    }

    /// Return Visited and Path cells to Clear, leaving walls, designations,
    /// and Error markers in place.
    pub fn reset_traversal(&mut self) {
        for cell in &mut self.cells {
            cell.reset_traversal();
        }
    }

    /// Lattice neighbors by position alone, ignoring kind: up, left, down,
    /// right, bounds-checked.
    fn lattice_neighbors(&self, row: u32, col: u32) -> SmallVec<[CellId; 4]> {
        let mut out = SmallVec::new();
        if row > 0 {
            out.push(CellId((row - 1) * self.cols + col));
        }
        if col > 0 {
            out.push(CellId(row * self.cols + (col - 1)));
        }
        if row + 1 < self.rows {
            out.push(CellId((row + 1) * self.cols + col));
        }
        if col + 1 < self.cols {
            out.push(CellId(row * self.cols + (col + 1)));
        }
        out
    }

    fn link_full_lattice(&mut self) {
        for cell in &mut self.cells {
            cell.clear_links();
        }
        for row in 0..self.rows {
            for col in 0..self.cols {
                let id = CellId(row * self.cols + col);
                for other in self.lattice_neighbors(row, col) {
                    self.cells[id.0 as usize].link(other);
                    self.cells[other.0 as usize].link(id);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbor_set(graph: &GridGraph, row: u32, col: u32) -> Vec<CellId> {
        let mut n = graph.neighbors_of(row, col).unwrap().to_vec();
        n.sort();
        n
    }

    #[test]
    fn build_rejects_zero_dimensions() {
        assert_eq!(
            GridGraph::build(0, 5).unwrap_err(),
            GridError::InvalidDimension { rows: 0, cols: 5 }
        );
        assert!(GridGraph::build(5, 0).is_err());
    }

    #[test]
    fn build_allocates_every_cell_clear() {
        let graph = GridGraph::build(3, 4).unwrap();
        assert_eq!(graph.cell_count(), 12);
        assert!(graph.cells().all(|c| c.kind() == CellKind::Clear));
    }

    #[test]
    fn coordinates_out_of_range_fail() {
        let graph = GridGraph::build(2, 2).unwrap();
        assert_eq!(
            graph.cell(2, 0).unwrap_err(),
            GridError::OutOfRange { row: 2, col: 0, rows: 2, cols: 2 }
        );
        assert!(graph.cell(0, 2).is_err());
    }

    #[test]
    fn adjacency_is_symmetric() {
        let graph = GridGraph::build(4, 5).unwrap();
        for cell in graph.cells() {
            for &n in cell.neighbors() {
                assert!(
                    graph.cell_by_id(n).neighbors().contains(&cell.id()),
                    "asymmetric edge {:?} -> {:?}",
                    cell.id(),
                    n
                );
            }
        }
    }

    #[test]
    fn corner_edge_and_interior_degrees() {
        let graph = GridGraph::build(3, 3).unwrap();
        assert_eq!(graph.neighbors_of(0, 0).unwrap().len(), 2);
        assert_eq!(graph.neighbors_of(0, 1).unwrap().len(), 3);
        assert_eq!(graph.neighbors_of(1, 1).unwrap().len(), 4);
    }

    #[test]
    fn wall_cells_are_isolated() {
        let mut graph = GridGraph::build(3, 3).unwrap();
        graph.set_wall(1, 1).unwrap();

        assert!(graph.neighbors_of(1, 1).unwrap().is_empty());
        let wall_id = graph.id_at(1, 1).unwrap();
        for cell in graph.cells() {
            assert!(!cell.neighbors().contains(&wall_id));
        }
    }

    #[test]
    fn set_wall_twice_is_a_noop() {
        let mut graph = GridGraph::build(3, 3).unwrap();
        graph.set_wall(0, 0).unwrap();
        graph.set_wall(0, 0).unwrap();
        assert_eq!(graph.kind(0, 0).unwrap(), CellKind::Wall);
    }

    #[test]
    fn wall_toggle_round_trips_the_neighbor_set() {
        let mut graph = GridGraph::build(3, 3).unwrap();
        let before = neighbor_set(&graph, 1, 1);

        graph.set_wall(1, 1).unwrap();
        graph.clear_wall(1, 1).unwrap();

        assert_eq!(neighbor_set(&graph, 1, 1), before);
        assert_eq!(graph.kind(1, 1).unwrap(), CellKind::Clear);
    }

    #[test]
    fn clear_wall_skips_walled_neighbors() {
        let mut graph = GridGraph::build(3, 3).unwrap();
        graph.set_wall(0, 1).unwrap();
        graph.set_wall(1, 1).unwrap();
        graph.clear_wall(1, 1).unwrap();

        let restored = neighbor_set(&graph, 1, 1);
        assert!(!restored.contains(&graph.id_at(0, 1).unwrap()));
        assert_eq!(restored.len(), 3);
    }

    #[test]
    fn clear_wall_on_non_wall_is_a_noop() {
        let mut graph = GridGraph::build(2, 2).unwrap();
        graph.cell_by_id_mut(CellId(0)).mark_start();
        graph.clear_wall(0, 0).unwrap();
        assert_eq!(graph.kind(0, 0).unwrap(), CellKind::Start);
    }

    #[test]
    fn clear_grid_restores_full_lattice() {
        let mut graph = GridGraph::build(3, 3).unwrap();
        graph.set_wall(1, 1).unwrap();
        graph.set_wall(0, 0).unwrap();
        graph.cell_by_id_mut(CellId(8)).mark_end();

        graph.clear_grid();

        assert!(graph.cells().all(|c| c.kind() == CellKind::Clear));
        assert_eq!(graph.neighbors_of(1, 1).unwrap().len(), 4);
        assert_eq!(graph.neighbors_of(0, 0).unwrap().len(), 2);
    }
}
