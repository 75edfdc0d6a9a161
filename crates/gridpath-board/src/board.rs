//! The editable board: walls, markers and replay marks.

use std::fmt;

use gridpath_core::{Cell, Dims, GridSnapshot, Marker, ObstacleMask, SnapshotError};
use gridpath_search::{Algorithm, SearchResult, search};

/// Default number of rows.
pub const DEFAULT_ROWS: i32 = 25;
/// Default number of columns.
pub const DEFAULT_COLS: i32 = 50;

/// What a board cell currently shows.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum CellState {
    #[default]
    Empty,
    Wall,
    Start,
    End,
    Visited,
    Path,
}

impl CellState {
    /// Whether replay marks must leave this cell alone.
    #[inline]
    pub const fn is_fixed(self) -> bool {
        matches!(self, Self::Wall | Self::Start | Self::End)
    }

    /// Character used by the plain-text rendering.
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Wall => '#',
            Self::Start => 'S',
            Self::End => 'E',
            Self::Visited => 'o',
            Self::Path => '*',
        }
    }
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// A mutable grid of [`CellState`]s with exactly one start and one end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    dims: Dims,
    cells: Vec<CellState>,
    start: Cell,
    end: Cell,
}

impl Board {
    /// Create an empty board with the markers at their default positions.
    ///
    /// Needs at least one row and two columns so that start and end can
    /// occupy different cells.
    pub fn new(rows: i32, cols: i32) -> Result<Self, BoardError> {
        let dims = Dims::new(rows, cols);
        if rows < 1 || cols < 2 {
            return Err(BoardError::TooSmall(dims));
        }
        let (start, end) = Self::default_markers(dims);
        let mut board = Self {
            dims,
            cells: vec![CellState::Empty; dims.len()],
            start,
            end,
        };
        board.put(start, CellState::Start);
        board.put(end, CellState::End);
        Ok(board)
    }

    /// Default marker positions: middle row, ten columns in from each side,
    /// or a quarter of the width on narrow boards.
    pub fn default_markers(dims: Dims) -> (Cell, Cell) {
        let row = dims.rows / 2;
        let inset = 10.min(dims.cols / 4);
        let start = Cell::new(row, inset);
        let end = Cell::new(row, (dims.cols - inset).min(dims.cols - 1));
        (start, end)
    }

    /// Board dimensions.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// The start cell.
    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }

    /// The end cell.
    #[inline]
    pub fn end(&self) -> Cell {
        self.end
    }

    /// State of `c`, or `None` if out of bounds.
    #[inline]
    pub fn state(&self, c: Cell) -> Option<CellState> {
        self.dims.index(c).map(|i| self.cells[i])
    }

    /// Row-major iterator over every cell and its state.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, CellState)> + '_ {
        self.dims.iter().zip(self.cells.iter().copied())
    }

    /// Number of cells in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    fn index(&self, c: Cell) -> Result<usize, BoardError> {
        self.dims.index(c).ok_or(BoardError::OutOfBounds {
            cell: c,
            dims: self.dims,
        })
    }

    fn put(&mut self, c: Cell, state: CellState) {
        if let Some(i) = self.dims.index(c) {
            self.cells[i] = state;
        }
    }

    /// Move the start marker to `c`. A wall there is removed.
    pub fn set_start(&mut self, c: Cell) -> Result<(), BoardError> {
        self.move_marker(Marker::Start, c)
    }

    /// Move the end marker to `c`. A wall there is removed.
    pub fn set_end(&mut self, c: Cell) -> Result<(), BoardError> {
        self.move_marker(Marker::End, c)
    }

    fn move_marker(&mut self, marker: Marker, c: Cell) -> Result<(), BoardError> {
        let i = self.index(c)?;
        let (old, other, state) = match marker {
            Marker::Start => (self.start, self.end, CellState::Start),
            Marker::End => (self.end, self.start, CellState::End),
        };
        if c == other {
            return Err(BoardError::Occupied { cell: c, marker });
        }
        self.put(old, CellState::Empty);
        self.cells[i] = state;
        match marker {
            Marker::Start => self.start = c,
            Marker::End => self.end = c,
        }
        log::debug!("{marker} moved {old} -> {c}");
        Ok(())
    }

    /// Flip `c` between empty and wall and return its new state.
    ///
    /// Markers and replay marks are left unchanged.
    pub fn toggle_wall(&mut self, c: Cell) -> Result<CellState, BoardError> {
        let i = self.index(c)?;
        let next = match self.cells[i] {
            CellState::Empty => CellState::Wall,
            CellState::Wall => CellState::Empty,
            other => other,
        };
        self.cells[i] = next;
        Ok(next)
    }

    /// Force `c` to wall or empty. Markers are left unchanged.
    pub(crate) fn set_wall(&mut self, c: Cell, wall: bool) {
        if let Some(i) = self.dims.index(c) {
            if !matches!(self.cells[i], CellState::Start | CellState::End) {
                self.cells[i] = if wall { CellState::Wall } else { CellState::Empty };
            }
        }
    }

    /// Mark `c` as explored unless it is a wall or marker. Returns whether
    /// the cell changed.
    pub fn mark_visited(&mut self, c: Cell) -> bool {
        self.mark(c, CellState::Visited)
    }

    /// Mark `c` as part of the route unless it is a wall or marker. Returns
    /// whether the cell changed.
    pub fn mark_path(&mut self, c: Cell) -> bool {
        self.mark(c, CellState::Path)
    }

    fn mark(&mut self, c: Cell, state: CellState) -> bool {
        match self.dims.index(c) {
            Some(i) if !self.cells[i].is_fixed() => {
                self.cells[i] = state;
                true
            }
            _ => false,
        }
    }

    /// Erase every visited and path mark.
    pub fn clear_path(&mut self) {
        for s in self.cells.iter_mut() {
            if matches!(s, CellState::Visited | CellState::Path) {
                *s = CellState::Empty;
            }
        }
        self.put(self.start, CellState::Start);
        self.put(self.end, CellState::End);
    }

    /// Remove all walls and marks and put the markers back at their default
    /// positions.
    pub fn reset(&mut self) {
        let (start, end) = Self::default_markers(self.dims);
        self.cells.fill(CellState::Empty);
        self.start = start;
        self.end = end;
        self.put(start, CellState::Start);
        self.put(end, CellState::End);
    }

    /// Freeze the current walls and markers into a search input.
    pub fn snapshot(&self) -> Result<GridSnapshot, SnapshotError> {
        let mask = ObstacleMask::from_fn(self.dims, |c| self.state(c) == Some(CellState::Wall));
        GridSnapshot::new(mask, self.start, self.end)
    }

    /// Clear old marks and run `algorithm` on the current board.
    ///
    /// The board itself is not marked; feed the result through a
    /// [`Replay`](crate::Replay) and [`apply`](Self::apply) to do that.
    pub fn visualize(&mut self, algorithm: Algorithm) -> Result<SearchResult, SnapshotError> {
        self.clear_path();
        let snapshot = self.snapshot()?;
        Ok(search(algorithm, &snapshot))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, s) in self.cells.iter().enumerate() {
            if i > 0 && i % self.dims.cols as usize == 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", s.glyph())?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from board edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Fewer than one row or two columns.
    TooSmall(Dims),
    /// The cell is not on the board.
    OutOfBounds { cell: Cell, dims: Dims },
    /// A marker cannot be placed on the other marker.
    Occupied { cell: Cell, marker: Marker },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooSmall(dims) => {
                write!(f, "board: {dims} is too small (need at least 1x2)")
            }
            Self::OutOfBounds { cell, dims } => {
                write!(f, "board: {cell} is outside the {dims} board")
            }
            Self::Occupied { cell, marker } => {
                write!(f, "board: cannot place {marker} on the other marker at {cell}")
            }
        }
    }
}

impl std::error::Error for BoardError {}
