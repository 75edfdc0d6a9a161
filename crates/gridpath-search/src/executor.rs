//! The traversal loop shared by every algorithm.

use gridpath_core::{Cell, GridSnapshot};

use crate::neighbors::Neighbors;
use crate::path::reconstruct;
use crate::result::SearchResult;
use crate::tables::{PredecessorMap, SearchTables};
use crate::traits::Frontier;

/// Raw output of one traversal, before path reconstruction.
#[derive(Debug, Clone)]
pub struct Exploration {
    /// Cells in the order they were taken off the frontier and finalized.
    pub visited: Vec<Cell>,
    /// How each reached cell was reached.
    pub predecessors: PredecessorMap,
    /// Whether the end cell was reached.
    pub found: bool,
}

impl Exploration {
    /// Turn the traversal into a [`SearchResult`], reconstructing the route
    /// to `end` when it was found.
    pub fn into_result(self, end: Cell) -> SearchResult {
        let path = if self.found {
            reconstruct(&self.predecessors, end)
        } else {
            Vec::new()
        };
        SearchResult {
            visited: self.visited,
            path,
        }
    }
}

/// Run the search loop over `snapshot`, taking cells from `frontier`.
///
/// Stops as soon as the end cell is taken off the frontier, or when the
/// frontier runs dry. Every cell appears in `visited` at most once and, when
/// `found` is set, the last visited cell is the end cell.
pub fn explore<F: Frontier>(snapshot: &GridSnapshot, mut frontier: F) -> Exploration {
    let dims = snapshot.dims();
    let end = snapshot.end();
    let mut tables = SearchTables::new(dims);
    let mut visited = Vec::new();
    let mut nbrs = Neighbors::new();
    let mut found = false;

    frontier.seed(snapshot.start(), &mut tables);

    while let Some(cell) = frontier.pop() {
        if !F::MARKS_ON_DISCOVERY && !tables.mark_visited(cell) {
            // Stale entry for an already finalized cell.
            continue;
        }
        visited.push(cell);

        if cell == end {
            found = true;
            break;
        }

        let next = nbrs.cardinal(cell, |n| {
            dims.contains(n) && !snapshot.is_blocked(n) && !tables.is_visited(n)
        });
        for &n in next {
            frontier.discover(cell, n, &mut tables);
        }
    }

    Exploration {
        visited,
        predecessors: tables.into_predecessors(),
        found,
    }
}
