use std::collections::VecDeque;

use gridpath_core::Cell;

use crate::tables::SearchTables;
use crate::traits::Frontier;

/// FIFO frontier for breadth-first search.
///
/// Neighbors are marked visited at discovery, which yields shortest paths
/// by step count on unit-cost grids.
#[derive(Debug, Default)]
pub struct BreadthFirst {
    queue: VecDeque<Cell>,
}

impl BreadthFirst {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for BreadthFirst {
    const MARKS_ON_DISCOVERY: bool = true;

    fn seed(&mut self, start: Cell, tables: &mut SearchTables) {
        tables.mark_visited(start);
        self.queue.push_back(start);
    }

    fn pop(&mut self) -> Option<Cell> {
        self.queue.pop_front()
    }

    fn discover(&mut self, from: Cell, to: Cell, tables: &mut SearchTables) {
        self.queue.push_back(to);
        tables.mark_visited(to);
        tables.set_predecessor(to, from);
    }
}

#[cfg(test)]
mod tests {
    use gridpath_core::GridSnapshot;

    use super::*;
    use crate::executor::explore;

    #[test]
    fn expands_in_layers() {
        let s = GridSnapshot::from_ascii("S..\n...\n..E").unwrap();
        let ex = explore(&s, BreadthFirst::new());
        assert!(ex.found);
        assert_eq!(
            ex.visited,
            vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(1, 0),
                Cell::new(0, 2),
                Cell::new(1, 1),
                Cell::new(2, 0),
                Cell::new(1, 2),
                Cell::new(2, 1),
                Cell::new(2, 2),
            ]
        );
    }

    #[test]
    fn predecessor_set_at_discovery() {
        let s = GridSnapshot::from_ascii("S.E").unwrap();
        let ex = explore(&s, BreadthFirst::new());
        assert_eq!(ex.predecessors.get(Cell::new(0, 1)), Some(Cell::new(0, 0)));
        assert_eq!(ex.predecessors.get(Cell::new(0, 2)), Some(Cell::new(0, 1)));
        assert_eq!(ex.predecessors.get(Cell::new(0, 0)), None);
    }
}
