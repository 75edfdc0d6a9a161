//! Algorithm selection: the typed [`search`] entry point and the
//! name-based [`run`] facade.

use std::fmt;
use std::str::FromStr;

use gridpath_core::GridSnapshot;

use crate::astar::AStar;
use crate::bfs::BreadthFirst;
use crate::dfs::DepthFirst;
use crate::dijkstra::UniformCost;
use crate::executor::{Exploration, explore};
use crate::result::SearchResult;

/// The closed set of supported search algorithms.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    Astar,
}

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Algorithm; 4] = [Self::Bfs, Self::Dfs, Self::Dijkstra, Self::Astar];

    /// The name accepted by [`run`] and [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Dijkstra => "dijkstra",
            Self::Astar => "astar",
        }
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bfs => "Breadth-first search",
            Self::Dfs => "Depth-first search",
            Self::Dijkstra => "Dijkstra",
            Self::Astar => "A*",
        }
    }

    /// Whether the returned path is always a shortest one.
    pub const fn is_optimal(self) -> bool {
        !matches!(self, Self::Dfs)
    }

    /// The next algorithm in [`ALL`](Self::ALL), wrapping around.
    pub fn cycle(self) -> Self {
        let i = Self::ALL.iter().position(|&a| a == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    fn explore(self, snapshot: &GridSnapshot) -> Exploration {
        match self {
            Self::Bfs => explore(snapshot, BreadthFirst::new()),
            Self::Dfs => explore(snapshot, DepthFirst::new()),
            Self::Dijkstra => explore(snapshot, UniformCost::new(snapshot.dims())),
            Self::Astar => explore(snapshot, AStar::new(snapshot.dims(), snapshot.end())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

/// A name that does not match any [`Algorithm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm \u{201c}{}\u{201d} (expected one of: bfs, dfs, dijkstra, astar)",
            self.0
        )
    }
}

impl std::error::Error for UnknownAlgorithm {}

/// Run `algorithm` on `snapshot` to completion.
pub fn search(algorithm: Algorithm, snapshot: &GridSnapshot) -> SearchResult {
    let result = algorithm.explore(snapshot).into_result(snapshot.end());
    log::debug!(
        "{algorithm}: {} -> {} on {}, visited {}, path {}",
        snapshot.start(),
        snapshot.end(),
        snapshot.dims(),
        result.visited.len(),
        result.path.len()
    );
    result
}

/// Run the algorithm called `name` on `snapshot`.
///
/// Accepted names are `"bfs"`, `"dfs"`, `"dijkstra"` and `"astar"`. Any other
/// name yields an empty result (both sequences empty), which callers can
/// tell apart from "ran, no path" where `visited` is non-empty.
pub fn run(name: &str, snapshot: &GridSnapshot) -> SearchResult {
    match name.parse::<Algorithm>() {
        Ok(algorithm) => search(algorithm, snapshot),
        Err(e) => {
            log::warn!("{e}; returning an empty result");
            SearchResult::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use gridpath_core::{Cell, Dims};

    use super::*;
    use crate::distance::manhattan;
    use crate::result::Outcome;

    #[test]
    fn names_round_trip() {
        for a in Algorithm::ALL {
            assert_eq!(a.name().parse::<Algorithm>(), Ok(a));
            assert_eq!(a.to_string(), a.name());
        }
        assert_eq!(
            "bogus".parse::<Algorithm>(),
            Err(UnknownAlgorithm("bogus".into()))
        );
        assert!("BFS".parse::<Algorithm>().is_err());
    }

    #[test]
    fn cycle_wraps() {
        assert_eq!(Algorithm::Bfs.cycle(), Algorithm::Dfs);
        assert_eq!(Algorithm::Astar.cycle(), Algorithm::Bfs);
    }

    #[test]
    fn unknown_name_returns_empty_result() {
        let s = GridSnapshot::from_ascii("S.E").unwrap();
        let r = run("greedy", &s);
        assert!(r.is_empty());
        assert_eq!(r.outcome(), Outcome::NotRun);
    }

    #[test]
    fn open_5x5_bfs() {
        let s = GridSnapshot::open(Dims::new(5, 5), Cell::new(0, 0), Cell::new(4, 4)).unwrap();
        let r = run("bfs", &s);
        assert_eq!(r.visited.first(), Some(&Cell::new(0, 0)));
        assert_eq!(r.visited.last(), Some(&Cell::new(4, 4)));
        assert_eq!(r.path.len(), 8);
        // (4, 4) is the only cell at distance 8, so it is dequeued last.
        assert_eq!(r.visited.len(), 25);
    }

    #[test]
    fn start_equals_end() {
        let s = GridSnapshot::open(Dims::new(4, 4), Cell::new(2, 1), Cell::new(2, 1)).unwrap();
        for a in Algorithm::ALL {
            let r = search(a, &s);
            assert_eq!(r.visited, vec![Cell::new(2, 1)], "{a}");
            assert!(r.path.is_empty(), "{a}");
        }
    }

    #[test]
    fn single_row_corridor() {
        for n in [2, 3, 10] {
            let s = GridSnapshot::open(Dims::new(1, n), Cell::new(0, 0), Cell::new(0, n - 1))
                .unwrap();
            for a in Algorithm::ALL {
                let r = search(a, &s);
                assert_eq!(r.path.len(), (n - 1) as usize, "{a} n={n}");
                assert_eq!(r.visited.len(), n as usize, "{a} n={n}");
            }
        }
    }

    #[test]
    fn open_grid_bfs_path_is_manhattan() {
        let dims = Dims::new(6, 9);
        for (start, end) in [
            (Cell::new(0, 0), Cell::new(5, 8)),
            (Cell::new(3, 7), Cell::new(1, 0)),
            (Cell::new(5, 2), Cell::new(5, 6)),
        ] {
            let s = GridSnapshot::open(dims, start, end).unwrap();
            let r = search(Algorithm::Bfs, &s);
            assert_eq!(r.path.len() as i32, manhattan(start, end));
        }
    }

    #[test]
    fn path_excludes_start_and_ends_at_end() {
        let s = GridSnapshot::from_ascii(
            "\
S..#....
.#.#.##.
.#...#..
.####.#.
......#E",
        )
        .unwrap();
        for a in Algorithm::ALL {
            let r = search(a, &s);
            assert_eq!(r.outcome(), Outcome::Found, "{a}");
            assert!(!r.path.contains(&s.start()), "{a}");
            assert_eq!(r.path.last(), Some(&s.end()), "{a}");
            assert_eq!(manhattan(s.start(), r.path[0]), 1, "{a}");
            for w in r.path.windows(2) {
                assert_eq!(manhattan(w[0], w[1]), 1, "{a}");
                assert!(!s.is_blocked(w[1]), "{a}");
            }
        }
    }

    #[test]
    fn optimal_algorithms_agree_on_length() {
        let s = GridSnapshot::from_ascii(
            "\
S..#....
.#.#.##.
.#...#..
.####.#.
......#E",
        )
        .unwrap();
        let lens: Vec<usize> = Algorithm::ALL
            .into_iter()
            .filter(|a| a.is_optimal())
            .map(|a| search(a, &s).path.len())
            .collect();
        assert!(lens.windows(2).all(|w| w[0] == w[1]), "{lens:?}");
    }

    #[test]
    fn unreachable_end_has_no_path() {
        let s = GridSnapshot::from_ascii("S.#..\n..#.E\n..#..").unwrap();
        for a in Algorithm::ALL {
            let r = search(a, &s);
            assert_eq!(r.outcome(), Outcome::NoPath, "{a}");
            assert_eq!(r.visited.len(), 6, "{a}");
        }
    }

    #[test]
    fn deterministic() {
        let s = GridSnapshot::from_ascii("S...#\n.#...\n...#E").unwrap();
        for a in Algorithm::ALL {
            assert_eq!(search(a, &s), search(a, &s), "{a}");
        }
    }
}
