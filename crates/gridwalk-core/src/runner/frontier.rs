//! Frontier disciplines: the pending-work container driving a traversal.

use std::collections::VecDeque;

use crate::grid::CellId;

/// One capability: remove the next candidate, add new candidates.
///
/// Duplicates are admitted on purpose — a cell may be discovered by several
/// predecessors before it is ever removed. The runner filters them with its
/// visited set at removal time, not at insertion time.
pub trait Frontier {
    fn push(&mut self, id: CellId);

    fn next(&mut self) -> Option<CellId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// LIFO frontier: depth-first order.
#[derive(Debug, Default)]
pub struct StackFrontier {
    items: Vec<CellId>,
}

impl StackFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for StackFrontier {
    fn push(&mut self, id: CellId) {
        self.items.push(id);
    }

    fn next(&mut self) -> Option<CellId> {
        self.items.pop()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// FIFO frontier: breadth-first order.
#[derive(Debug, Default)]
pub struct QueueFrontier {
    items: VecDeque<CellId>,
}

impl QueueFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for QueueFrontier {
    fn push(&mut self, id: CellId) {
        self.items.push_back(id);
    }

    fn next(&mut self) -> Option<CellId> {
        self.items.pop_front()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
