//! **gridpath-board**: the editable board behind the visualizer.
//!
//! A [`Board`] holds walls and the start/end markers, produces the
//! [`GridSnapshot`](gridpath_core::GridSnapshot) a search runs on, and takes
//! the replay marks a [`Replay`] yields from a search result.

pub mod board;
pub mod maze;
pub mod replay;

pub use board::{Board, BoardError, CellState, DEFAULT_COLS, DEFAULT_ROWS};
pub use maze::DEFAULT_WALL_DENSITY;
pub use replay::{Replay, Step, Summary};
