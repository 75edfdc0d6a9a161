//! **gridpath-core**: core types for the grid pathfinding visualizer.
//!
//! This crate provides the geometry primitives ([`Cell`], [`Dims`]) and the
//! validated, immutable search input ([`GridSnapshot`]) shared by the search
//! engine, the board model and the terminal front end.

pub mod geom;
pub mod snapshot;

pub use geom::{Cell, Dims, DimsIter};
pub use snapshot::{GridSnapshot, Marker, ObstacleMask, SnapshotError};
