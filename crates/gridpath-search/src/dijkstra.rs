use std::collections::BinaryHeap;

use gridpath_core::{Cell, Dims};

use crate::tables::{CostTable, NodeRef, SearchTables};
use crate::traits::Frontier;

/// Min-distance frontier for uniform-cost (Dijkstra) search.
///
/// Every step costs 1. Improved cells get a fresh heap entry; superseded
/// entries stay in the heap and are skipped by the executor once the cell is
/// finalized. Equal distances pop in insertion order.
#[derive(Debug)]
pub struct UniformCost {
    dist: CostTable,
    open: BinaryHeap<NodeRef>,
    seq: u64,
}

impl UniformCost {
    /// Create a frontier for a grid of the given size.
    pub fn new(dims: Dims) -> Self {
        Self {
            dist: CostTable::new(dims),
            open: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Best known distance from the start to `c`.
    pub fn distance(&self, c: Cell) -> i32 {
        self.dist.get(c)
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

impl Frontier for UniformCost {
    const MARKS_ON_DISCOVERY: bool = false;

    fn seed(&mut self, start: Cell, _tables: &mut SearchTables) {
        self.dist.set(start, 0);
        self.push(start, 0);
    }

    fn pop(&mut self) -> Option<Cell> {
        self.open.pop().map(|n| n.cell)
    }

    fn discover(&mut self, from: Cell, to: Cell, tables: &mut SearchTables) {
        let tentative = self.dist.get(from) + 1;
        if tentative < self.dist.get(to) {
            self.dist.set(to, tentative);
            tables.set_predecessor(to, from);
            self.push(to, tentative);
        }
    }
}
