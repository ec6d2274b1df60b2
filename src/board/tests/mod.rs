//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece generation and move counts for known positions
//! - `apply.rs` - Move application and its error cases
//! - `edge_cases.rs` - Board edges, wrap detection and inherited quirks
//! - `proptest.rs` - Property-based tests over random boards

mod movegen;

use crate::board::{Board, Color, MoveBuffer, Square};

/// Square from printed coordinates: file letter, then row counted up from the
/// bottom printed row ("a1" = 56, "h8" = 7). Test-only convenience.
pub(super) fn sq(name: &str) -> Square {
    let bytes = name.as_bytes();
    let file = bytes[0] - b'a';
    let row_from_bottom = bytes[1] - b'1';
    Square::from_coords(7 - row_from_bottom, file).unwrap()
}

pub(super) fn board(rows: [&str; 8]) -> Board {
    Board::from_rows(&rows).unwrap()
}

/// Targets generated for the piece on `from`, in generation order.
pub(super) fn targets_from(board: &Board, side: Color, from: Square) -> Vec<Square> {
    let mut moves = MoveBuffer::new();
    board.generate_moves(side, &mut moves);
    moves
        .iter()
        .filter(|mv| mv.from() == from)
        .map(|mv| mv.to())
        .collect()
}

pub(super) fn sorted(mut squares: Vec<Square>) -> Vec<Square> {
    squares.sort();
    squares
}

pub(super) fn squares(names: &[&str]) -> Vec<Square> {
    names.iter().map(|name| sq(name)).collect()
}
