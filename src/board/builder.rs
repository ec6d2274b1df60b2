//! Fluent builder for constructing board positions.
//!
//! Allows creating positions piece by piece rather than writing out rows.
//!
//! # Example
//! ```
//! use minichess::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square::new(36).unwrap(), Color::White, PieceKind::King)
//!     .piece(Square::new(4).unwrap(), Color::Black, PieceKind::King)
//!     .build();
//! assert_eq!(board.pieces().count(), 2);
//! ```

use super::{Board, Color, PieceCode, PieceKind, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    board: Board,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a builder over an empty board.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            board: Board::empty(),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            board: Board::starting_position(),
        }
    }

    /// Place a piece, replacing any existing occupant.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.board.set_piece(square, PieceCode::new(color, kind));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.clear_square(square);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        self.board
    }
}
