//! Board representation and pseudo-legal move logic.
//!
//! A board is a flat array of 64 piece codes. Move generation follows fixed
//! per-piece rules and ignores king safety entirely.
//!
//! # Example
//! ```
//! use minichess::board::{Board, Color, MoveBuffer};
//!
//! let board = Board::new();
//! let mut moves = MoveBuffer::new();
//! let count = board.generate_moves(Color::White, &mut moves);
//! println!("Starting position has {count} pseudo-legal moves");
//! ```

mod apply;
mod attack_tables;
mod builder;
mod error;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{
    status_code, ApplyError, EncodingError, STATUS_EMPTY_SOURCE, STATUS_OK, STATUS_OUT_OF_RANGE,
};
pub use state::Board;
pub use types::{
    Color, Move, MoveBuffer, PieceCode, PieceKind, Square, BOARD_SQUARES, EMPTY_BYTE,
    MOVE_BUFFER_CAPACITY, MOVE_WIRE_SIZE,
};
