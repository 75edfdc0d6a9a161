//! Turning a [`SearchResult`] into an ordered list of board marks.

use std::fmt;

use gridpath_core::Cell;
use gridpath_search::{Outcome, SearchResult};

use crate::board::Board;

/// One animation frame: mark a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// The cell was explored.
    Visit(Cell),
    /// The cell lies on the final route.
    Path(Cell),
}

impl Step {
    /// The cell this step marks.
    pub fn cell(self) -> Cell {
        match self {
            Self::Visit(c) | Self::Path(c) => c,
        }
    }
}

/// Iterator over every visited cell, then every path cell.
///
/// Pacing is up to the caller; the replay only fixes the order.
#[derive(Debug, Clone)]
pub struct Replay<'a> {
    result: &'a SearchResult,
    pos: usize,
}

impl<'a> Replay<'a> {
    pub fn new(result: &'a SearchResult) -> Self {
        Self { result, pos: 0 }
    }

    /// Summary to show once the replay has finished.
    pub fn summary(&self) -> Summary {
        Summary::of(self.result)
    }
}

impl Iterator for Replay<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let visited = &self.result.visited;
        let step = if self.pos < visited.len() {
            Step::Visit(visited[self.pos])
        } else {
            Step::Path(*self.result.path.get(self.pos - visited.len())?)
        };
        self.pos += 1;
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let total = self.result.visited.len() + self.result.path.len();
        let n = total.saturating_sub(self.pos);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Replay<'_> {}

impl Board {
    /// Apply one replay step. Returns whether the cell changed.
    pub fn apply(&mut self, step: Step) -> bool {
        match step {
            Step::Visit(c) => self.mark_visited(c),
            Step::Path(c) => self.mark_path(c),
        }
    }
}

/// Counts reported after a run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub steps: usize,
    pub path: usize,
    pub outcome: Outcome,
}

impl Summary {
    pub fn of(result: &SearchResult) -> Self {
        Self {
            steps: result.visited.len(),
            path: result.path.len(),
            outcome: result.outcome(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Outcome::NotRun => f.write_str("Nothing ran."),
            Outcome::NoPath => write!(f, "Steps: {}, no path found.", self.steps),
            Outcome::Found => write!(f, "Steps: {}, Path: {}", self.steps, self.path),
        }
    }
}

#[cfg(test)]
mod tests {
    use gridpath_search::Algorithm;

    use super::*;
    use crate::board::CellState;

    fn result() -> SearchResult {
        SearchResult {
            visited: vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)],
            path: vec![Cell::new(0, 1), Cell::new(0, 2)],
        }
    }

    #[test]
    fn visits_then_path() {
        let r = result();
        let steps: Vec<Step> = Replay::new(&r).collect();
        assert_eq!(
            steps,
            vec![
                Step::Visit(Cell::new(0, 0)),
                Step::Visit(Cell::new(0, 1)),
                Step::Visit(Cell::new(0, 2)),
                Step::Path(Cell::new(0, 1)),
                Step::Path(Cell::new(0, 2)),
            ]
        );
    }

    #[test]
    fn exact_len() {
        let r = result();
        let mut replay = Replay::new(&r);
        assert_eq!(replay.len(), 5);
        replay.next();
        assert_eq!(replay.len(), 4);
        assert_eq!(Replay::new(&SearchResult::default()).len(), 0);
    }

    #[test]
    fn summaries() {
        assert_eq!(Summary::of(&result()).to_string(), "Steps: 3, Path: 2");
        assert_eq!(Summary::of(&SearchResult::default()).to_string(), "Nothing ran.");
        let none = SearchResult {
            visited: vec![Cell::ZERO],
            path: vec![],
        };
        assert_eq!(Summary::of(&none).to_string(), "Steps: 1, no path found.");
    }

    #[test]
    fn full_replay_marks_board() {
        let mut b = Board::new(3, 8).unwrap();
        let r = b.visualize(Algorithm::Astar).unwrap();
        for step in Replay::new(&r) {
            b.apply(step);
        }
        // Start and end keep their markers; every other path cell shows the
        // route.
        assert_eq!(b.count(CellState::Path), r.path.len() - 1);
        assert_eq!(b.state(b.start()), Some(CellState::Start));
        assert_eq!(b.state(b.end()), Some(CellState::End));
        assert_eq!(
            b.count(CellState::Visited) + b.count(CellState::Path),
            r.visited.len() - 2
        );
    }
}
