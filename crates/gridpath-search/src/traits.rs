use gridpath_core::Cell;

use crate::tables::SearchTables;

/// A traversal-order strategy plugged into the search executor.
///
/// The executor owns the loop; a frontier decides which cell comes out next
/// and what happens when a neighbor is discovered.
pub trait Frontier {
    /// `true` if cells are marked visited when they are discovered (BFS,
    /// DFS). `false` if they are marked when popped, in which case the
    /// frontier may yield stale duplicates that the executor skips.
    const MARKS_ON_DISCOVERY: bool;

    /// Insert the start cell.
    fn seed(&mut self, start: Cell, tables: &mut SearchTables);

    /// Remove and return the next cell to expand.
    fn pop(&mut self) -> Option<Cell>;

    /// Handle `to`, an open and not yet visited neighbor of the expanded
    /// cell `from`.
    fn discover(&mut self, from: Cell, to: Cell, tables: &mut SearchTables);
}
