//! Error types for board operations.

use std::fmt;

use super::Square;

/// Status code for a successful apply.
pub const STATUS_OK: i32 = 0;
/// Status code for a source or target square outside `0..64`.
pub const STATUS_OUT_OF_RANGE: i32 = -1;
/// Status code for an empty source square.
pub const STATUS_EMPTY_SOURCE: i32 = -2;

/// Error type for rejected move applications. The board is never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyError {
    /// `from` or `to` is not a square index
    OutOfRange { from: u8, to: u8 },
    /// Nothing stands on the source square
    EmptySource { square: Square },
}

impl ApplyError {
    /// Boundary status code for this error
    #[must_use]
    pub const fn status_code(self) -> i32 {
        match self {
            ApplyError::OutOfRange { .. } => STATUS_OUT_OF_RANGE,
            ApplyError::EmptySource { .. } => STATUS_EMPTY_SOURCE,
        }
    }
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplyError::OutOfRange { from, to } => {
                write!(f, "Move {from}->{to} is off the board (squares are 0-63)")
            }
            ApplyError::EmptySource { square } => {
                write!(f, "No piece on source square {square}")
            }
        }
    }
}

impl std::error::Error for ApplyError {}

/// Boundary status code for an apply result: 0, -1 or -2.
#[must_use]
pub fn status_code(result: &Result<(), ApplyError>) -> i32 {
    match result {
        Ok(()) => STATUS_OK,
        Err(err) => err.status_code(),
    }
}

/// Error type for decoding the byte-level board and move encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// Byte is not `.` or a piece letter
    InvalidPiece { byte: u8 },
    /// Square index outside `0..64`
    InvalidSquare { index: u8 },
    /// Byte board is not exactly 64 bytes
    InvalidLength { len: usize },
    /// Row layout does not have exactly 8 rows
    InvalidRowCount { rows: usize },
    /// A row is not exactly 8 bytes
    InvalidRowLength { row: usize, len: usize },
}

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodingError::InvalidPiece { byte } => {
                write!(f, "Invalid piece byte 0x{byte:02x}")
            }
            EncodingError::InvalidSquare { index } => {
                write!(f, "Square index {index} out of bounds (must be 0-63)")
            }
            EncodingError::InvalidLength { len } => {
                write!(f, "Board must be 64 bytes, found {len}")
            }
            EncodingError::InvalidRowCount { rows } => {
                write!(f, "Board requires 8 rows, found {rows}")
            }
            EncodingError::InvalidRowLength { row, len } => {
                write!(f, "Row {row} must be 8 bytes, found {len}")
            }
        }
    }
}

impl std::error::Error for EncodingError {}
