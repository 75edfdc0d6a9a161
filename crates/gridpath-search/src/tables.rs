use std::cmp::Ordering;

use gridpath_core::{Cell, Dims};

/// Sentinel cost meaning "not reached yet".
pub const UNREACHED: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// Predecessor map
// ---------------------------------------------------------------------------

/// For every cell, the cell it was reached from.
///
/// The start cell and never-reached cells have no predecessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredecessorMap {
    dims: Dims,
    prev: Vec<Option<Cell>>,
}

impl PredecessorMap {
    /// Create an empty map for a grid of the given size.
    pub fn new(dims: Dims) -> Self {
        Self {
            dims,
            prev: vec![None; dims.len()],
        }
    }

    /// Grid dimensions the map covers.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// The predecessor of `c`, if any.
    #[inline]
    pub fn get(&self, c: Cell) -> Option<Cell> {
        self.dims.index(c).and_then(|i| self.prev[i])
    }

    /// Record that `c` was reached from `from`. Out-of-bounds cells are
    /// ignored.
    #[inline]
    pub fn set(&mut self, c: Cell, from: Cell) {
        if let Some(i) = self.dims.index(c) {
            self.prev[i] = Some(from);
        }
    }
}

// ---------------------------------------------------------------------------
// Shared traversal state
// ---------------------------------------------------------------------------

/// Visited flags and predecessors for one search invocation.
///
/// Order-based frontiers mark cells when they are discovered; cost-based
/// frontiers leave marking to the executor, which marks a cell when it is
/// finalized.
#[derive(Debug, Clone)]
pub struct SearchTables {
    visited: Vec<bool>,
    predecessors: PredecessorMap,
}

impl SearchTables {
    /// Fresh tables: nothing visited, no predecessors.
    pub fn new(dims: Dims) -> Self {
        Self {
            visited: vec![false; dims.len()],
            predecessors: PredecessorMap::new(dims),
        }
    }

    /// Grid dimensions the tables cover.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.predecessors.dims()
    }

    /// Whether `c` has been marked visited. Out-of-bounds cells never are.
    #[inline]
    pub fn is_visited(&self, c: Cell) -> bool {
        self.dims().index(c).is_some_and(|i| self.visited[i])
    }

    /// Mark `c` visited. Returns `false` if it already was.
    #[inline]
    pub fn mark_visited(&mut self, c: Cell) -> bool {
        match self.dims().index(c) {
            Some(i) if !self.visited[i] => {
                self.visited[i] = true;
                true
            }
            _ => false,
        }
    }

    /// The predecessor of `c`, if any.
    #[inline]
    pub fn predecessor(&self, c: Cell) -> Option<Cell> {
        self.predecessors.get(c)
    }

    /// Record that `c` was reached from `from`.
    #[inline]
    pub fn set_predecessor(&mut self, c: Cell, from: Cell) {
        self.predecessors.set(c, from);
    }

    /// Consume the tables, keeping only the predecessor map.
    pub fn into_predecessors(self) -> PredecessorMap {
        self.predecessors
    }
}

// ---------------------------------------------------------------------------
// Cost table
// ---------------------------------------------------------------------------

/// Per-cell accumulated cost, [`UNREACHED`] until relaxed.
#[derive(Debug, Clone)]
pub(crate) struct CostTable {
    dims: Dims,
    costs: Vec<i32>,
}

impl CostTable {
    pub(crate) fn new(dims: Dims) -> Self {
        Self {
            dims,
            costs: vec![UNREACHED; dims.len()],
        }
    }

    #[inline]
    pub(crate) fn get(&self, c: Cell) -> i32 {
        match self.dims.index(c) {
            Some(i) => self.costs[i],
            None => UNREACHED,
        }
    }

    #[inline]
    pub(crate) fn set(&mut self, c: Cell, cost: i32) {
        if let Some(i) = self.dims.index(c) {
            self.costs[i] = cost;
        }
    }
}

// ---------------------------------------------------------------------------
// Priority entries
// ---------------------------------------------------------------------------

/// A frontier entry ordered by `key`, then by insertion sequence.
///
/// `BinaryHeap` is a max-heap, so the ordering is reversed: the smallest key
/// pops first and, among equal keys, the earliest pushed entry pops first.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) cell: Cell,
    pub(crate) key: i32,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
