use gridpath_core::Cell;

/// Orthogonal step offsets as `(drow, dcol)`: right, down, left, up.
///
/// The order decides tie-breaks between equally ranked frontier entries, so
/// changing it changes every visitation sequence.
pub const CARDINAL: [Cell; 4] = [
    Cell::new(0, 1),
    Cell::new(1, 0),
    Cell::new(0, -1),
    Cell::new(-1, 0),
];

/// Cached neighbor computation helper.
///
/// Enumerates the cardinal neighbors of a cell, filtered by a predicate,
/// into a reused buffer.
pub struct Neighbors {
    buf: Vec<Cell>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the 4-directional neighbors of `c` in [`CARDINAL`] order,
    /// keeping only those for which `keep` returns `true`.
    pub fn cardinal(&mut self, c: Cell, keep: impl Fn(Cell) -> bool) -> &[Cell] {
        self.buf.clear();
        for d in CARDINAL {
            let n = c + d;
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_order_is_right_down_left_up() {
        let mut nb = Neighbors::new();
        let c = Cell::new(5, 5);
        assert_eq!(
            nb.cardinal(c, |_| true),
            &[
                Cell::new(5, 6),
                Cell::new(6, 5),
                Cell::new(5, 4),
                Cell::new(4, 5)
            ]
        );
    }

    #[test]
    fn cardinal_filters() {
        let mut nb = Neighbors::new();
        let got = nb.cardinal(Cell::ZERO, |n| n.row >= 0 && n.col >= 0);
        assert_eq!(got, &[Cell::new(0, 1), Cell::new(1, 0)]);
    }
}
