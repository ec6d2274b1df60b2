//! Core board types.
//!
//! - `PieceKind`, `Color` and `PieceCode` - square contents
//! - `Square` - bounds-checked square index (u8)
//! - `Move` and `MoveBuffer` - generated moves

mod moves;
mod piece;
mod square;

pub use moves::{Move, MoveBuffer, MOVE_BUFFER_CAPACITY, MOVE_WIRE_SIZE};
pub use piece::{Color, PieceCode, PieceKind, EMPTY_BYTE};
pub use square::{Square, BOARD_SQUARES};
