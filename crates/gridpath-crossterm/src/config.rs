use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use gridpath_board::{DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_WALL_DENSITY};
use gridpath_search::{Algorithm, UnknownAlgorithm};

#[derive(Parser, Debug, Clone)]
#[command(name = "gridpath")]
#[command(about = "Paint walls on a grid and watch BFS, DFS, Dijkstra and A* find a path")]
pub struct Config {
    /// Number of board rows
    #[arg(long, default_value_t = DEFAULT_ROWS, value_parser = clap::value_parser!(i32).range(1..=500))]
    pub rows: i32,

    /// Number of board columns
    #[arg(long, default_value_t = DEFAULT_COLS, value_parser = clap::value_parser!(i32).range(2..=500))]
    pub cols: i32,

    /// Search algorithm: bfs, dfs, dijkstra or astar
    #[arg(short, long, default_value = "bfs")]
    pub algorithm: String,

    /// Delay between replay frames, in milliseconds
    #[arg(short, long, value_name = "MS", default_value_t = 20)]
    pub delay_ms: u64,

    /// Share of cells turned into walls by the random maze (0.0-1.0)
    #[arg(long, default_value_t = DEFAULT_WALL_DENSITY)]
    pub density: f64,

    /// Seed for the random maze generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start with an empty board instead of a random maze
    #[arg(long)]
    pub empty: bool,

    /// Run once without a UI and print the marked board
    #[arg(long)]
    pub headless: bool,

    /// With --headless, print the search result as JSON
    #[arg(long, requires = "headless")]
    pub json: bool,

    /// Write log output to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// The selected algorithm.
    pub fn algorithm(&self) -> Result<Algorithm, UnknownAlgorithm> {
        self.algorithm.parse()
    }

    /// The selected algorithm, or a usage error naming the valid choices.
    ///
    /// The interactive UI needs a real algorithm; headless runs pass the
    /// raw name to the search engine instead.
    pub fn interactive_algorithm(&self) -> Result<Algorithm, clap::Error> {
        self.algorithm()
            .map_err(|e| Self::command().error(ErrorKind::InvalidValue, e))
    }

    /// Replay frame delay.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Install the global logger.
    ///
    /// Logs go to `--log-file` when given. Otherwise they go to stderr, which
    /// the interactive UI would overwrite, so only headless runs log by
    /// default there. `RUST_LOG` overrides the default filter either way.
    pub fn init_logging(&self) -> io::Result<()> {
        let default_filter = match (&self.log_file, self.headless) {
            (Some(_), _) => "info",
            (None, true) => "warn",
            (None, false) => "off",
        };
        let mut builder =
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
        if let Some(path) = &self.log_file {
            builder.target(env_logger::Target::Pipe(Box::new(File::create(path)?)));
        }
        builder.init();
        Ok(())
    }
}
