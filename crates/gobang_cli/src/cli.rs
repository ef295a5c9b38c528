//! Command-line interface for gobang.

use clap::{Parser, Subcommand};
use gobang::Stone;
use std::path::PathBuf;

/// Gobang - five-in-a-row in the terminal
#[derive(Parser, Debug)]
#[command(name = "gobang")]
#[command(about = "Play or replay five-in-a-row games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand for building a game.
#[derive(clap::Args, Debug, Clone)]
pub struct GameArgs {
    /// Path to a TOML game config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Board side length (overrides config)
    #[arg(long)]
    pub size: Option<usize>,

    /// Color that moves first: black or white (overrides config)
    #[arg(long)]
    pub first: Option<Stone>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, reading `row col` lines from stdin
    Play {
        #[command(flatten)]
        game: GameArgs,
    },

    /// Apply a list of moves and report the judged outcome
    Replay {
        #[command(flatten)]
        game: GameArgs,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Moves as `row,col`, alternating colors from the first turn
        #[arg(value_parser = parse_move, allow_hyphen_values = true)]
        moves: Vec<(i32, i32)>,
    },
}

/// Parses `row,col` or `row col`.
pub fn parse_move(s: &str) -> Result<(i32, i32), String> {
    let mut parts = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty());
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("expected `row,col`, got `{}`", s));
    };
    let row = row
        .parse::<i32>()
        .map_err(|e| format!("bad row `{}`: {}", row, e))?;
    let col = col
        .parse::<i32>()
        .map_err(|e| format!("bad column `{}`: {}", col, e))?;
    Ok((row, col))
}
