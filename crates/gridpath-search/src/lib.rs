//! Search algorithms over grids with obstacles.
//!
//! Four algorithms share one traversal loop ([`explore`]) and differ only in
//! the [`Frontier`] that decides which cell is expanded next:
//!
//! | Algorithm | Frontier | Shortest path |
//! |---|---|---|
//! | BFS | [`BreadthFirst`] (FIFO queue) | yes |
//! | DFS | [`DepthFirst`] (LIFO stack) | no |
//! | Dijkstra | [`UniformCost`] (min distance) | yes |
//! | A* | [`AStar`] (min `g + h`, Manhattan `h`) | yes |
//!
//! Movement is 4-directional with unit cost. Neighbors are always tried in
//! the order right, down, left, up, and equal priorities pop in insertion
//! order, so every run on the same snapshot produces the same sequences.
//!
//! Use [`search`] with an [`Algorithm`], or [`run`] with an algorithm name.

mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod engine;
mod executor;
mod neighbors;
mod path;
mod result;
mod tables;
mod traits;

#[cfg(test)]
mod properties;

pub use astar::AStar;
pub use bfs::BreadthFirst;
pub use dfs::DepthFirst;
pub use dijkstra::UniformCost;
pub use distance::manhattan;
pub use engine::{Algorithm, UnknownAlgorithm, run, search};
pub use executor::{Exploration, explore};
pub use neighbors::{CARDINAL, Neighbors};
pub use path::reconstruct;
pub use result::{Outcome, SearchResult};
pub use tables::{PredecessorMap, SearchTables, UNREACHED};
pub use traits::Frontier;
