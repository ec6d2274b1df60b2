use std::fmt;
use std::ops::{Index, IndexMut};

use super::{Color, EncodingError, PieceCode, PieceKind, Square, BOARD_SQUARES};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// 64 squares, index-addressed. Nothing else: no side to move, no history.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) squares: [PieceCode; BOARD_SQUARES],
}

impl Board {
    /// Standard starting layout
    #[must_use]
    pub fn new() -> Self {
        Board::starting_position()
    }

    /// A board with every square empty
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [PieceCode::Empty; BOARD_SQUARES],
        }
    }

    /// Black on ranks 0-1, White on ranks 6-7, empty in between.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut board = Board::empty();
        board.reset();
        board
    }

    /// Overwrite all 64 squares with the starting layout.
    pub fn reset(&mut self) {
        self.squares = [PieceCode::Empty; BOARD_SQUARES];
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            self.squares[file] = PieceCode::new(Color::Black, kind);
            self.squares[8 + file] = PieceCode::new(Color::Black, PieceKind::Pawn);
            self.squares[48 + file] = PieceCode::new(Color::White, PieceKind::Pawn);
            self.squares[56 + file] = PieceCode::new(Color::White, kind);
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> PieceCode {
        self.squares[square.index()]
    }

    #[inline]
    pub fn set_piece(&mut self, square: Square, code: PieceCode) {
        self.squares[square.index()] = code;
    }

    #[inline]
    pub fn clear_square(&mut self, square: Square) {
        self.set_piece(square, PieceCode::Empty);
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_empty()
    }

    #[must_use]
    pub fn squares(&self) -> &[PieceCode; BOARD_SQUARES] {
        &self.squares
    }

    /// Direct write access to every square.
    pub fn squares_mut(&mut self) -> &mut [PieceCode; BOARD_SQUARES] {
        &mut self.squares
    }

    /// Occupied squares with their pieces, in index order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, PieceKind)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            PieceCode::Piece(color, kind) => Some((sq, color, kind)),
            PieceCode::Empty => None,
        })
    }

    /// Wire form: one letter per square.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; BOARD_SQUARES] {
        let mut bytes = [0u8; BOARD_SQUARES];
        for (byte, code) in bytes.iter_mut().zip(self.squares.iter()) {
            *byte = code.to_byte();
        }
        bytes
    }

    /// Decode a 64-byte wire board.
    ///
    /// # Errors
    /// Fails on a length other than 64 or on any byte that is not a piece letter or `.`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EncodingError> {
        if bytes.len() != BOARD_SQUARES {
            return Err(EncodingError::InvalidLength { len: bytes.len() });
        }
        let mut board = Board::empty();
        for (code, &byte) in board.squares.iter_mut().zip(bytes) {
            *code = PieceCode::from_byte(byte)?;
        }
        Ok(board)
    }

    /// Build a board from 8 printed rows, first row = rank 0.
    ///
    /// # Errors
    /// Fails unless there are 8 rows of 8 valid bytes each.
    pub fn from_rows(rows: &[&str]) -> Result<Self, EncodingError> {
        if rows.len() != 8 {
            return Err(EncodingError::InvalidRowCount { rows: rows.len() });
        }
        let mut bytes = Vec::with_capacity(BOARD_SQUARES);
        for (row, text) in rows.iter().enumerate() {
            if text.len() != 8 {
                return Err(EncodingError::InvalidRowLength {
                    row,
                    len: text.len(),
                });
            }
            bytes.extend_from_slice(text.as_bytes());
        }
        Board::from_bytes(&bytes)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Index<Square> for Board {
    type Output = PieceCode;

    fn index(&self, square: Square) -> &Self::Output {
        &self.squares[square.index()]
    }
}

impl IndexMut<Square> for Board {
    fn index_mut(&mut self, square: Square) -> &mut Self::Output {
        &mut self.squares[square.index()]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.to_bytes().chunks(8) {
            for &byte in row {
                write!(f, "{}", byte as char)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        write!(f, "{self}")?;
        write!(f, "}}")
    }
}
