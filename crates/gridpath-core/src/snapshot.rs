//! Immutable search input: [`ObstacleMask`] and [`GridSnapshot`].
//!
//! A snapshot is validated when it is built, so a search never starts from a
//! grid whose start or end marker is out of bounds or sits on a wall.

use std::fmt;

use crate::geom::{Cell, Dims};

/// Which of the two markers an error refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Marker {
    Start,
    End,
}

impl Marker {
    /// Character used for this marker in ASCII maps.
    pub const fn glyph(self) -> char {
        match self {
            Self::Start => 'S',
            Self::End => 'E',
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
        }
    }
}

// ---------------------------------------------------------------------------
// ObstacleMask
// ---------------------------------------------------------------------------

/// Row-major blocked flags for every cell of a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ObstacleMask {
    dims: Dims,
    blocked: Vec<bool>,
}

impl ObstacleMask {
    /// Create a mask with every cell open.
    pub fn new(dims: Dims) -> Self {
        Self {
            dims,
            blocked: vec![false; dims.len()],
        }
    }

    /// Create a mask by asking `is_blocked` about every cell.
    pub fn from_fn(dims: Dims, is_blocked: impl Fn(Cell) -> bool) -> Self {
        Self {
            dims,
            blocked: dims.iter().map(is_blocked).collect(),
        }
    }

    /// Dimensions of the mask.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Whether `c` is blocked. Cells outside the grid count as blocked.
    #[inline]
    pub fn is_blocked(&self, c: Cell) -> bool {
        match self.dims.index(c) {
            Some(i) => self.blocked[i],
            None => true,
        }
    }

    /// Set the blocked flag of `c`. Returns `false` if `c` is out of bounds.
    pub fn set(&mut self, c: Cell, blocked: bool) -> bool {
        match self.dims.index(c) {
            Some(i) => {
                self.blocked[i] = blocked;
                true
            }
            None => false,
        }
    }

    /// Number of blocked cells.
    pub fn count_blocked(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }
}

// ---------------------------------------------------------------------------
// GridSnapshot
// ---------------------------------------------------------------------------

/// A validated, read-only view of the grid at the moment a search begins.
///
/// Invariants: the grid is non-empty, `start` and `end` are in bounds and
/// neither is blocked.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GridSnapshot {
    mask: ObstacleMask,
    start: Cell,
    end: Cell,
}

impl GridSnapshot {
    /// Build a snapshot from an obstacle mask and the two markers.
    pub fn new(mask: ObstacleMask, start: Cell, end: Cell) -> Result<Self, SnapshotError> {
        let dims = mask.dims();
        if dims.is_empty() {
            return Err(SnapshotError::EmptyGrid(dims));
        }
        for (marker, cell) in [(Marker::Start, start), (Marker::End, end)] {
            if !dims.contains(cell) {
                return Err(SnapshotError::OutOfBounds { marker, cell, dims });
            }
            if mask.is_blocked(cell) {
                return Err(SnapshotError::Blocked { marker, cell });
            }
        }
        Ok(Self { mask, start, end })
    }

    /// Build a snapshot from a blocked-cell predicate.
    pub fn from_fn(
        dims: Dims,
        start: Cell,
        end: Cell,
        is_blocked: impl Fn(Cell) -> bool,
    ) -> Result<Self, SnapshotError> {
        Self::new(ObstacleMask::from_fn(dims, is_blocked), start, end)
    }

    /// Build a snapshot of a grid with no walls.
    pub fn open(dims: Dims, start: Cell, end: Cell) -> Result<Self, SnapshotError> {
        Self::new(ObstacleMask::new(dims), start, end)
    }

    /// Parse an ASCII map.
    ///
    /// `.` is open, `#` is a wall, `S` and `E` mark start and end (exactly
    /// one of each). Leading and trailing whitespace of the whole text is
    /// trimmed; every line must have the same width.
    pub fn from_ascii(s: &str) -> Result<Self, SnapshotError> {
        let s = s.trim();
        let lines: Vec<&str> = s.lines().map(|l| l.trim_end_matches('\r')).collect();
        let cols = lines.first().map_or(0, |l| l.chars().count());
        let dims = Dims::new(lines.len() as i32, cols as i32);
        if dims.is_empty() {
            return Err(SnapshotError::EmptyGrid(dims));
        }

        let mut blocked = Vec::with_capacity(dims.len());
        let mut start = None;
        let mut end = None;

        for (row, line) in lines.iter().enumerate() {
            let width = line.chars().count();
            if width != cols {
                return Err(SnapshotError::InconsistentWidth {
                    row: row as i32,
                    expected: cols,
                    found: width,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let cell = Cell::new(row as i32, col as i32);
                let marker = match ch {
                    '.' => None,
                    '#' => {
                        blocked.push(true);
                        continue;
                    }
                    'S' => Some((Marker::Start, &mut start)),
                    'E' => Some((Marker::End, &mut end)),
                    _ => return Err(SnapshotError::InvalidChar { ch, cell }),
                };
                if let Some((marker, slot)) = marker {
                    if slot.is_some() {
                        return Err(SnapshotError::DuplicateMarker { marker, cell });
                    }
                    *slot = Some(cell);
                }
                blocked.push(false);
            }
        }

        let start = start.ok_or(SnapshotError::MissingMarker(Marker::Start))?;
        let end = end.ok_or(SnapshotError::MissingMarker(Marker::End))?;
        Self::new(ObstacleMask { dims, blocked }, start, end)
    }

    /// Grid dimensions.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.mask.dims()
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.mask.dims().rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.mask.dims().cols
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

    /// Whether `c` is blocked. Cells outside the grid count as blocked.
    #[inline]
    pub fn is_blocked(&self, c: Cell) -> bool {
        self.mask.is_blocked(c)
    }

    /// The underlying obstacle mask.
    #[inline]
    pub fn mask(&self) -> &ObstacleMask {
        &self.mask
    }
}

impl fmt::Display for GridSnapshot {
    /// Render in the format accepted by [`GridSnapshot::from_ascii`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dims = self.dims();
        for row in 0..dims.rows {
            if row > 0 {
                f.write_str("\n")?;
            }
            for col in 0..dims.cols {
                let c = Cell::new(row, col);
                let ch = if c == self.start {
                    Marker::Start.glyph()
                } else if c == self.end {
                    Marker::End.glyph()
                } else if self.is_blocked(c) {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Reasons a snapshot is refused before any search runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// The grid has no cells.
    EmptyGrid(Dims),
    /// A marker lies outside the grid.
    OutOfBounds { marker: Marker, cell: Cell, dims: Dims },
    /// A marker sits on a wall.
    Blocked { marker: Marker, cell: Cell },
    /// ASCII map lines have different widths.
    InconsistentWidth {
        row: i32,
        expected: usize,
        found: usize,
    },
    /// ASCII map contains an unknown character.
    InvalidChar { ch: char, cell: Cell },
    /// ASCII map has no start or no end marker.
    MissingMarker(Marker),
    /// ASCII map has more than one start or end marker.
    DuplicateMarker { marker: Marker, cell: Cell },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid(dims) => write!(f, "snapshot: empty grid ({dims})"),
            Self::OutOfBounds { marker, cell, dims } => {
                write!(f, "snapshot: {marker} {cell} is outside the {dims} grid")
            }
            Self::Blocked { marker, cell } => {
                write!(f, "snapshot: {marker} {cell} is on a wall")
            }
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "snapshot: line {row} has width {found}, expected {expected}"
            ),
            Self::InvalidChar { ch, cell } => {
                write!(f, "snapshot: invalid character \u{201c}{ch}\u{201d} at {cell}")
            }
            Self::MissingMarker(marker) => write!(f, "snapshot: no {marker} marker"),
            Self::DuplicateMarker { marker, cell } => {
                write!(f, "snapshot: second {marker} marker at {cell}")
            }
        }
    }
}

impl std::error::Error for SnapshotError {}
