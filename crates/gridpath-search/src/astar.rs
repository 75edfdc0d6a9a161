use std::collections::BinaryHeap;

use gridpath_core::{Cell, Dims};

use crate::distance::manhattan;
use crate::tables::{CostTable, NodeRef, SearchTables};
use crate::traits::Frontier;

/// Min-`f` frontier for A* search towards a fixed goal.
///
/// `f = g + h` where `g` is the step count from the start and `h` the
/// Manhattan distance to the goal. Equal `f` values pop in insertion order.
#[derive(Debug)]
pub struct AStar {
    goal: Cell,
    g: CostTable,
    f: CostTable,
    open: BinaryHeap<NodeRef>,
    seq: u64,
}

impl AStar {
    /// Create a frontier for a grid of the given size searching for `goal`.
    pub fn new(dims: Dims, goal: Cell) -> Self {
        Self {
            goal,
            g: CostTable::new(dims),
            f: CostTable::new(dims),
            open: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Best known cost from the start to `c`.
    pub fn g_score(&self, c: Cell) -> i32 {
        self.g.get(c)
    }

    /// Estimated total cost of the best known route through `c`.
    pub fn f_score(&self, c: Cell) -> i32 {
        self.f.get(c)
    }

    fn push(&mut self, cell: Cell, key: i32) {
        self.open.push(NodeRef {
            cell,
            key,
            seq: self.seq,
        });
        self.seq += 1;
    }
}

impl Frontier for AStar {
    const MARKS_ON_DISCOVERY: bool = false;

    fn seed(&mut self, start: Cell, _tables: &mut SearchTables) {
        let f = manhattan(start, self.goal);
        self.g.set(start, 0);
        self.f.set(start, f);
        self.push(start, f);
    }

    fn pop(&mut self) -> Option<Cell> {
        self.open.pop().map(|n| n.cell)
    }

    fn discover(&mut self, from: Cell, to: Cell, tables: &mut SearchTables) {
        let tentative = self.g.get(from) + 1;
        if tentative < self.g.get(to) {
            let f = tentative + manhattan(to, self.goal);
            self.g.set(to, tentative);
            self.f.set(to, f);
            tables.set_predecessor(to, from);
            self.push(to, f);
        }
    }
}
