//! Move record and the fixed-capacity move buffer.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::PieceCode;
use super::square::Square;
use crate::board::error::EncodingError;

/// Size of a move on the wire: `[from, to, captured]`.
pub const MOVE_WIRE_SIZE: usize = 3;

/// A generated move.
///
/// `captured` is a snapshot of the target square taken when the move was
/// generated. Applying a move never consults it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    captured: PieceCode,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square, captured: PieceCode) -> Self {
        Move { from, to, captured }
    }

    /// Create a null/empty move (used for initialization)
    #[inline]
    #[must_use]
    pub const fn null() -> Self {
        Move {
            from: SQUARE_ZERO,
            to: SQUARE_ZERO,
            captured: PieceCode::Empty,
        }
    }

    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Occupant of the target square at generation time
    #[inline]
    #[must_use]
    pub const fn captured(self) -> PieceCode {
        self.captured
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        !self.captured.is_empty()
    }

    /// Packed boundary form: `[from, to, captured letter]`.
    #[must_use]
    pub fn to_wire(self) -> [u8; MOVE_WIRE_SIZE] {
        [self.from.as_u8(), self.to.as_u8(), self.captured.to_byte()]
    }

    /// Decode the packed boundary form.
    ///
    /// # Errors
    /// Fails if either square is outside `0..64` or the captured byte is not a
    /// piece letter. A zero captured byte is read as empty, the way hosts pad
    /// unset entries.
    pub fn from_wire(bytes: [u8; MOVE_WIRE_SIZE]) -> Result<Self, EncodingError> {
        let [from, to, captured] = bytes;
        let captured = match captured {
            0 => PieceCode::Empty,
            byte => PieceCode::from_byte(byte)?,
        };
        Ok(Move {
            from: Square::try_from(from)?,
            to: Square::try_from(to)?,
            captured,
        })
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}->{}", self.from, self.to)?;
        if self.is_capture() {
            write!(f, " x{}", self.captured)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

const SQUARE_ZERO: Square = match Square::new(0) {
    Some(sq) => sq,
    None => unreachable!(),
};

/// Capacity of the move buffer. Part of the boundary contract.
pub const MOVE_BUFFER_CAPACITY: usize = 256;
pub(crate) const EMPTY_MOVE: Move = Move::null();

/// Ordered moves from the latest generation, backed by a fixed-size array.
///
/// Pushing past [`MOVE_BUFFER_CAPACITY`] drops the move and sets the
/// truncation flag; the buffer never grows.
#[derive(Clone, Debug)]
pub struct MoveBuffer {
    moves: [Move; MOVE_BUFFER_CAPACITY],
    len: usize,
    truncated: bool,
}

impl MoveBuffer {
    #[must_use]
    pub fn new() -> Self {
        MoveBuffer {
            moves: [EMPTY_MOVE; MOVE_BUFFER_CAPACITY],
            len: 0,
            truncated: false,
        }
    }

    /// Reset the logical length. Stored entries are left in place.
    pub fn clear(&mut self) {
        self.len = 0;
        self.truncated = false;
    }

    /// Append a move. Returns false (and records truncation) when full.
    pub fn push(&mut self, mv: Move) -> bool {
        if self.len >= MOVE_BUFFER_CAPACITY {
            self.truncated = true;
            return false;
        }
        self.moves[self.len] = mv;
        self.len += 1;
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        MOVE_BUFFER_CAPACITY
    }

    /// True if at least one move was dropped since the last `clear`.
    #[must_use]
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.as_slice().get(idx).copied()
    }

    /// Concatenated wire form of the stored moves.
    #[must_use]
    pub fn to_wire(&self) -> Vec<u8> {
        self.iter().flat_map(|mv| mv.to_wire()).collect()
    }
}

impl Default for MoveBuffer {
    fn default() -> Self {
        MoveBuffer::new()
    }
}

impl<'a> IntoIterator for &'a MoveBuffer {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Index<usize> for MoveBuffer {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveBuffer index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}
