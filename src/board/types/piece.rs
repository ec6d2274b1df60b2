//! Piece, color and per-square piece code types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::EncodingError;

/// Wire byte for an empty square.
pub const EMPTY_BYTE: u8 = b'.';

/// Color-independent piece types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds in wire-letter order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Parse a piece kind from a letter of either case (p, n, b, r, q, k)
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Lowercase letter for this kind
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

/// Side colors. White pieces start on ranks 6-7 and move toward index 0.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Map the boundary's `is_white` flag to a color.
    #[inline]
    #[must_use]
    pub const fn from_is_white(is_white: bool) -> Color {
        if is_white {
            Color::White
        } else {
            Color::Black
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_white(self) -> bool {
        matches!(self, Color::White)
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Index delta of a single pawn step (-8 for White, +8 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_step(self) -> i8 {
        match self {
            Color::White => -8,
            Color::Black => 8,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Contents of one board square.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceCode {
    #[default]
    Empty,
    Piece(Color, PieceKind),
}

impl PieceCode {
    #[inline]
    #[must_use]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        PieceCode::Piece(color, kind)
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, PieceCode::Empty)
    }

    /// Color of the occupant, if any
    #[inline]
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            PieceCode::Empty => None,
            PieceCode::Piece(color, _) => Some(color),
        }
    }

    /// Normalized kind of the occupant, if any
    #[inline]
    #[must_use]
    pub const fn kind(self) -> Option<PieceKind> {
        match self {
            PieceCode::Empty => None,
            PieceCode::Piece(_, kind) => Some(kind),
        }
    }

    /// Returns true if the square holds a piece of the opposite color to `side`
    #[inline]
    #[must_use]
    pub fn is_opponent_of(self, side: Color) -> bool {
        matches!(self, PieceCode::Piece(color, _) if color != side)
    }

    /// Returns true if the square is empty or holds an opposing piece
    #[inline]
    #[must_use]
    pub fn is_enterable_by(self, side: Color) -> bool {
        self.is_empty() || self.is_opponent_of(side)
    }

    /// Wire letter: uppercase for White, lowercase for Black, `.` for empty.
    #[must_use]
    pub fn to_byte(self) -> u8 {
        match self {
            PieceCode::Empty => EMPTY_BYTE,
            PieceCode::Piece(Color::White, kind) => kind.to_char().to_ascii_uppercase() as u8,
            PieceCode::Piece(Color::Black, kind) => kind.to_char() as u8,
        }
    }

    /// Decode a wire letter.
    ///
    /// # Errors
    /// Returns [`EncodingError::InvalidPiece`] for anything other than `.` or
    /// one of `pnbrqk` in either case.
    pub fn from_byte(byte: u8) -> Result<Self, EncodingError> {
        if byte == EMPTY_BYTE {
            return Ok(PieceCode::Empty);
        }
        let kind =
            PieceKind::from_char(byte as char).ok_or(EncodingError::InvalidPiece { byte })?;
        let color = if byte.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Ok(PieceCode::Piece(color, kind))
    }
}

impl fmt::Display for PieceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_byte() as char)
    }
}

impl TryFrom<u8> for PieceCode {
    type Error = EncodingError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        PieceCode::from_byte(byte)
    }
}

impl From<PieceCode> for u8 {
    fn from(code: PieceCode) -> Self {
        code.to_byte()
    }
}
