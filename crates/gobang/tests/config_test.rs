//! Tests for loading game configuration from disk.

use gobang::{GameConfig, Gameplay, Stone};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_from_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("gobang.toml");
    fs::write(&path, "board_size = 19\nfirst_turn = \"white\"\n").expect("Failed to write TOML");

    let config = GameConfig::from_file(&path).expect("Load failed");
    assert_eq!(*config.board_size(), 19);

    let game = Gameplay::from_config(&config).expect("Valid config");
    assert_eq!(game.board().size(), 19);
    assert_eq!(game.turn(), Stone::White);
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_invalid_toml() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "this is not valid toml !!!@@@").expect("Write failed");
    assert!(GameConfig::from_file(&path).is_err());
}
