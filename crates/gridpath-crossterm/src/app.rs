//! Interactive state and how each [`Action`] changes it.

use std::fmt;
use std::time::Duration;

use gridpath_board::{Board, BoardError, Summary};
use gridpath_core::Cell;
use gridpath_search::{Algorithm, SearchResult};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::Config;
use crate::input::Action;

/// Longest replay delay reachable with `-`.
const MAX_DELAY: Duration = Duration::from_millis(1000);

/// What [`Action::Apply`] does at the cursor.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Wall,
    Start,
    End,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Wall => "toggle wall",
            Self::Start => "place start",
            Self::End => "place end",
        })
    }
}

/// What the terminal loop must do after an update.
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    Redraw,
    Animate(SearchResult),
    Quit,
}

#[derive(Debug)]
pub struct App {
    pub(crate) board: Board,
    pub(crate) cursor: Cell,
    pub(crate) mode: Mode,
    pub(crate) algorithm: Algorithm,
    pub(crate) delay: Duration,
    pub(crate) status: String,
    density: f64,
    rng: StdRng,
}

impl App {
    pub fn new(board: Board, algorithm: Algorithm, delay: Duration, density: f64, seed: u64) -> Self {
        Self {
            cursor: board.start(),
            board,
            mode: Mode::Wall,
            algorithm,
            delay,
            status: String::from("Press enter to run."),
            density,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Build the initial state from command-line options.
    pub fn from_config(config: &Config, algorithm: Algorithm, seed: u64) -> Result<Self, BoardError> {
        let mut app = Self::new(
            Board::new(config.rows, config.cols)?,
            algorithm,
            config.delay(),
            config.density,
            seed,
        );
        if !config.empty {
            app.board.randomize_walls(&mut app.rng, app.density);
        }
        Ok(app)
    }

    /// Apply `action`.
    pub fn update(&mut self, action: Action) -> Effect {
        match action {
            Action::Move(dr, dc) => {
                let next = self.cursor.shift(dr, dc);
                if !self.board.dims().contains(next) {
                    return Effect::None;
                }
                self.cursor = next;
            }
            Action::Apply => self.apply_mode(self.cursor),
            Action::Click(c) => {
                self.cursor = c;
                self.apply_mode(c);
            }
            Action::ArmStart => self.arm(Mode::Start),
            Action::ArmEnd => self.arm(Mode::End),
            Action::Select(a) => self.algorithm = a,
            Action::CycleAlgorithm => self.algorithm = self.algorithm.cycle(),
            Action::Visualize => match self.board.visualize(self.algorithm) {
                Ok(result) => {
                    self.status = format!("Running {}...", self.algorithm.label());
                    return Effect::Animate(result);
                }
                Err(e) => self.status = e.to_string(),
            },
            Action::ClearPath => self.board.clear_path(),
            Action::Reset => {
                self.board.reset();
                self.mode = Mode::Wall;
                self.status = String::from("Board reset.");
            }
            Action::RandomMaze => {
                let walls = self.board.randomize_walls(&mut self.rng, self.density);
                self.status = format!("Random maze with {walls} walls.");
            }
            Action::Faster => {
                self.delay = if self.delay <= Duration::from_millis(1) {
                    Duration::ZERO
                } else {
                    self.delay / 2
                };
            }
            Action::Slower => {
                self.delay = (self.delay * 2).max(Duration::from_millis(1)).min(MAX_DELAY);
            }
            Action::Redraw => {}
            Action::Quit => return Effect::Quit,
        }
        Effect::Redraw
    }

    /// Record the end of a replay.
    pub fn finish(&mut self, result: &SearchResult) {
        let summary = Summary::of(result);
        log::info!("{} finished: {summary}", self.algorithm.name());
        self.status = summary.to_string();
    }

    fn arm(&mut self, mode: Mode) {
        self.mode = if self.mode == mode { Mode::Wall } else { mode };
    }

    fn apply_mode(&mut self, c: Cell) {
        // Old marks no longer match the edited board.
        self.board.clear_path();
        let res = match self.mode {
            Mode::Wall => self.board.toggle_wall(c).map(|_| ()),
            Mode::Start => self.board.set_start(c),
            Mode::End => self.board.set_end(c),
        };
        match res {
            Ok(()) => {
                if self.mode != Mode::Wall {
                    log::info!("{} placed at {c}", self.mode);
                    self.mode = Mode::Wall;
                }
            }
            Err(e) => self.status = e.to_string(),
        }
    }
}
