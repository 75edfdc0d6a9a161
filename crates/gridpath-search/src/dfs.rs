use gridpath_core::Cell;

use crate::tables::SearchTables;
use crate::traits::Frontier;

/// LIFO frontier for depth-first search.
///
/// Marks neighbors visited when they are pushed, like
/// [`BreadthFirst`](crate::BreadthFirst). Finds some path if one exists, not
/// necessarily the shortest.
#[derive(Debug, Default)]
pub struct DepthFirst {
    stack: Vec<Cell>,
}

impl DepthFirst {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for DepthFirst {
    const MARKS_ON_DISCOVERY: bool = true;

    fn seed(&mut self, start: Cell, tables: &mut SearchTables) {
        tables.mark_visited(start);
        self.stack.push(start);
    }

    fn pop(&mut self) -> Option<Cell> {
        self.stack.pop()
    }

    fn discover(&mut self, from: Cell, to: Cell, tables: &mut SearchTables) {
        self.stack.push(to);
        tables.mark_visited(to);
        tables.set_predecessor(to, from);
    }
}
