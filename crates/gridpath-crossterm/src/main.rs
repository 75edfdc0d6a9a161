//! `gridpath`: watch grid search algorithms explore a board in the terminal.

mod app;
mod config;
mod input;
mod render;
mod terminal;

use std::error::Error;

use clap::Parser;
use gridpath_board::{Board, Replay, Summary};
use gridpath_search::run;
use rand::RngExt;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::app::App;
use crate::config::Config;
use crate::terminal::Terminal;

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::parse();
    config.init_logging()?;

    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("maze seed {seed}");

    if config.headless {
        return headless(&config, seed);
    }

    let algorithm = config.interactive_algorithm().unwrap_or_else(|e| e.exit());
    let mut app = App::from_config(&config, algorithm, seed)?;
    let mut term = Terminal::init(true)?;
    term.run(&mut app)?;
    Ok(())
}

/// Run the configured algorithm once and print the outcome.
fn headless(config: &Config, seed: u64) -> Result<(), Box<dyn Error>> {
    println!("{}", headless_report(config, seed)?);
    Ok(())
}

/// The marked board and summary, or the result as JSON with `--json`.
///
/// The algorithm is looked up by name, so an unknown name reports an empty
/// result instead of failing.
fn headless_report(config: &Config, seed: u64) -> Result<String, Box<dyn Error>> {
    let mut board = Board::new(config.rows, config.cols)?;
    if !config.empty {
        board.randomize_walls(&mut StdRng::seed_from_u64(seed), config.density);
    }
    let result = run(&config.algorithm, &board.snapshot()?);
    if config.json {
        return Ok(serde_json::to_string_pretty(&result)?);
    }
    for step in Replay::new(&result) {
        board.apply(step);
    }
    Ok(format!("{board}\n{}", Summary::of(&result)))
}
