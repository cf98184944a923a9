//! Command-line front end: reads a board, applies the configured limits and
//! runs the engine.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use bounded_life::{BoardState, Error, Grid, config, logging, settle};
use clap::{Parser, Subcommand};

/// Command succeeded.
const OK: i32 = 0;
/// Invalid board, arguments or config.
const INVALID: i32 = 1;
/// `final` ran out of generations.
const NOT_STABILIZED: i32 = 2;

#[derive(Parser)]
#[command(
    name = "bounded-life",
    version,
    about = "Conway's Game of Life on a bounded board"
)]
struct Cli {
    /// Limits file (TOML). Defaults apply when it does not exist.
    #[arg(long, default_value = "bounded-life.toml")]
    config: PathBuf,

    /// Board as JSON `{"cells": [[0, 1], ...]}`. Read from stdin when absent.
    #[arg(long)]
    board: Option<PathBuf>,

    /// Print the board as text (`o` alive, `.` dead) instead of JSON.
    #[arg(long)]
    text: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the board unchanged.
    Show,
    /// Advance one generation.
    Next,
    /// Advance a number of generations.
    Advance { generations: usize },
    /// Run until the board reaches a fixed point or a cycle.
    Final,
}

fn main() {
    logging::init();
    let code = match run() {
        Ok(()) => OK,
        Err(err) => {
            eprintln!("{:#}", err);
            match err.downcast_ref::<Error>() {
                Some(Error::NotStabilized { .. }) => NOT_STABILIZED,
                _ => INVALID,
            }
        }
    };
    std::process::exit(code);
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load_config(&cli.config)?;
    let state = read_board(cli.board.as_deref())?;
    let (width, height) = state.dimensions();
    config.check_dimensions(width, height)?;
    let board = Grid::try_from(&state).context("board data cannot be empty")?;

    let result = match cli.command {
        Command::Show => board,
        Command::Next => board.step(),
        Command::Advance { generations } => {
            if generations == 0 {
                bail!("number of generations must be a positive integer");
            }
            config.check_generations(generations)?;
            board.advance(generations)
        }
        Command::Final => {
            let settled = settle(&board, config.max_generations_to_final_state)?;
            eprintln!(
                "settled after {} generations with period {}",
                settled.generation, settled.period
            );
            settled.grid
        }
    };
    print_board(&result, cli.text)
}

fn read_board(path: Option<&Path>) -> Result<BoardState> {
    let raw = match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?
        }
        None => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context("read board from stdin")?;
            raw
        }
    };
    serde_json::from_str(&raw).context("parse board JSON")
}

fn print_board(grid: &Grid, text: bool) -> Result<()> {
    if text {
        println!("{grid}");
    } else {
        let json = serde_json::to_string(&BoardState::from(grid)).context("encode board")?;
        println!("{json}");
    }
    Ok(())
}
