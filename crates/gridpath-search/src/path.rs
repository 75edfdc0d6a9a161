use gridpath_core::Cell;

use crate::tables::PredecessorMap;

/// Walk `prev` back from `end` and return the route in travel order.
///
/// The start cell is excluded and `end` is included. The result is empty if
/// `end` has no predecessor. The walk is capped at one step per grid cell; a
/// map that would need more (a cycle) yields an empty route.
pub fn reconstruct(prev: &PredecessorMap, end: Cell) -> Vec<Cell> {
    let limit = prev.dims().len();
    let mut path = Vec::new();
    let mut cur = end;
    while let Some(p) = prev.get(cur) {
        if path.len() >= limit {
            log::warn!("predecessor chain from {end} exceeds {limit} cells, dropping path");
            return Vec::new();
        }
        path.push(cur);
        cur = p;
    }
    path.reverse();
    path
}
