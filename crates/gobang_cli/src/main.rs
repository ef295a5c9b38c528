//! Gobang - terminal host for the five-in-a-row rules engine.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, GameArgs, parse_move};
use gobang::{GameConfig, Gameplay, Judgement, Stone};
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { game } => run_play(&game),
        Command::Replay { game, json, moves } => run_replay(&game, json, &moves),
    }
}

/// Builds a game from the config file (if any) and command-line overrides.
#[instrument]
fn build_game(args: &GameArgs) -> Result<Gameplay> {
    let mut config = match &args.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    if let Some(size) = args.size {
        config = config.with_board_size(size);
    }
    if let Some(first) = args.first {
        config = config.with_first_turn(first);
    }
    debug!(?config, "Game config resolved");
    Ok(Gameplay::from_config(&config)?)
}

/// Summary printed after a replay.
#[derive(Debug, Serialize)]
struct ReplayReport {
    moves_applied: usize,
    turn: Stone,
    judgement: Judgement,
}

/// Builds the game and applies every move in order.
#[instrument(skip(moves), fields(moves = moves.len()))]
fn replay(args: &GameArgs, moves: &[(i32, i32)]) -> Result<Gameplay> {
    let mut game = build_game(args)?;
    for (i, &(row, col)) in moves.iter().enumerate() {
        game.make_move(row, col)
            .with_context(|| format!("Move {} at ({}, {}) rejected", i + 1, row, col))?;
    }
    Ok(game)
}

/// Judges a replayed game.
fn replay_report(game: &Gameplay, moves_applied: usize) -> ReplayReport {
    ReplayReport {
        moves_applied,
        turn: game.turn(),
        judgement: game.judge(),
    }
}

/// Applies every move, then prints the board and judged outcome.
#[instrument(skip(moves), fields(moves = moves.len()))]
fn run_replay(args: &GameArgs, json: bool, moves: &[(i32, i32)]) -> Result<()> {
    let game = replay(args, moves)?;
    let report = replay_report(&game, moves.len());
    info!(outcome = %report.judgement.outcome(), "Replay finished");

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", game.board());
        print_judgement(&report.judgement);
    }
    Ok(())
}

fn print_judgement(judgement: &Judgement) {
    println!("Outcome: {}", judgement.outcome());
    if !judgement.winning_positions().is_empty() {
        let line = judgement
            .winning_positions()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        println!("Winning positions: {}", line);
    }
}

/// Interactive loop: one `row col` per line, `reset` to start over, `quit` to leave.
#[instrument]
fn run_play(args: &GameArgs) -> Result<()> {
    let mut game = build_game(args)?;
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    print!("{}", game.board());
    loop {
        print!("{} to move> ", game.turn());
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        match line.trim() {
            "" => continue,
            "quit" | "exit" => break,
            "reset" => {
                game.reset();
                print!("{}", game.board());
                continue;
            }
            input => {
                let (row, col) = match parse_move(input) {
                    Ok(mv) => mv,
                    Err(e) => {
                        println!("{}", e);
                        continue;
                    }
                };
                if let Err(e) = game.make_move(row, col) {
                    println!("{}", e);
                    continue;
                }
            }
        }

        print!("{}", game.board());
        let judgement = game.judge();
        if judgement.is_decided() {
            print_judgement(&judgement);
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(size: Option<usize>, first: Option<Stone>) -> GameArgs {
        GameArgs {
            config: None,
            size,
            first,
        }
    }

    #[test]
    fn test_replay_horizontal_win_json() {
        let moves = [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2), (0, 3), (1, 3), (0, 4)];
        let game = replay(&args(None, None), &moves).expect("Replay failed");
        let report = replay_report(&game, moves.len());

        let value = serde_json::to_value(&report).expect("Serialize");
        assert_eq!(value["moves_applied"], 9);
        assert_eq!(value["turn"], "white");
        assert_eq!(value["judgement"]["outcome"]["Won"], "black");
        let positions: Vec<(i64, i64)> = value["judgement"]["winning_positions"]
            .as_array()
            .expect("Positions array")
            .iter()
            .map(|p| (p["row"].as_i64().unwrap(), p["col"].as_i64().unwrap()))
            .collect();
        assert_eq!(positions, vec![(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]);
    }

    #[test]
    fn test_replay_rejected_move_has_context() {
        let err = replay(&args(None, None), &[(3, 3), (3, 3)]).unwrap_err();
        assert_eq!(err.to_string(), "Move 2 at (3, 3) rejected");
        assert!(matches!(
            err.downcast_ref::<gobang::MoveError>(),
            Some(gobang::MoveError::Occupied(_))
        ));
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("gobang.toml");
        fs::write(&path, "board_size = 19\nfirst_turn = \"black\"\n").expect("Failed to write TOML");

        let from_file = GameArgs {
            config: Some(path.clone()),
            size: None,
            first: None,
        };
        let game = replay(&from_file, &[]).expect("Replay failed");
        assert_eq!(game.board().size(), 19);
        assert_eq!(game.turn(), Stone::Black);

        let overridden = GameArgs {
            config: Some(path),
            size: Some(9),
            first: Some(Stone::White),
        };
        let game = replay(&overridden, &[(8, 8)]).expect("Replay failed");
        assert_eq!(game.board().size(), 9);
        assert_eq!(game.board().get(8, 8), Some(gobang::Cell::Occupied(Stone::White)));
        assert!(replay(&overridden, &[(9, 0)]).is_err());
    }

    #[test]
    fn test_oversized_board_is_an_error() {
        let err = replay(&args(Some(2_000_000_000), None), &[]).unwrap_err();
        assert!(err.to_string().contains("exceeds the maximum"));
    }
}
