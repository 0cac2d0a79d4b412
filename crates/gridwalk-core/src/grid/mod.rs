//! Grid Graph Module
//!
//! An undirected adjacency graph over a rectangular cell lattice.
//! Edges are removed/restored eagerly on wall toggles, so traversal
//! algorithms see a plain connectivity graph with no wall awareness.

mod cell;
mod graph;

pub use cell::{Cell, CellId, CellKind};
pub use graph::GridGraph;
