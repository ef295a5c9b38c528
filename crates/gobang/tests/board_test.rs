//! Tests for board storage.

use gobang::{Board, BoardError, Cell, Stone};

#[test]
fn test_out_of_range_write_leaves_board_untouched() {
    let mut board = Board::new(15).expect("Valid size");
    board.set(7, 7, Cell::Occupied(Stone::White));
    let before = board.clone();

    for (row, col) in [(-1, 7), (7, -1), (15, 7), (7, 15), (15, 15)] {
        board.set(row, col, Cell::Occupied(Stone::Black));
        assert_eq!(board.get(row, col), None);
    }
    assert_eq!(board, before);
}

#[test]
fn test_reset_empties_all() {
    let mut board = Board::new(6).expect("Valid size");
    for row in 0..6 {
        for col in 0..6 {
            board.set(row, col, Cell::Occupied(Stone::Black));
        }
    }
    board.reset();
    for row in 0..6 {
        for col in 0..6 {
            assert_eq!(board.get(row, col), Some(Cell::Empty));
        }
    }
}

#[test]
fn test_size_limits() {
    assert_eq!(Board::new(0), Err(BoardError::ZeroSize));
    assert_eq!(Board::new(1).expect("Valid size").size(), 1);
}

#[test]
fn test_serde_roundtrip_preserves_stones() {
    let mut board = Board::new(5).expect("Valid size");
    board.set(2, 3, Cell::Occupied(Stone::White));
    let json = serde_json::to_string(&board).expect("Serialize");
    let back: Board = serde_json::from_str(&json).expect("Deserialize");
    assert_eq!(back, board);
}

#[test]
fn test_deserialize_rejects_short_grid() {
    let err = serde_json::from_str::<Board>(r#"{"size":2,"cells":["Empty"]}"#).unwrap_err();
    assert!(err.to_string().contains("Expected 4 cells, found 1"));
}
