//! Square index type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::EncodingError;

/// Number of squares on the board.
pub const BOARD_SQUARES: usize = 64;

/// A square index in `0..64`, `index = rank * 8 + file`.
///
/// Rank 0 is the first printed row (Black's back rank in the starting layout),
/// file 0 is the leftmost column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    /// Create a square with bounds checking
    #[inline]
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < BOARD_SQUARES {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Create a square from rank and file (both 0-7)
    #[must_use]
    pub const fn from_coords(rank: u8, file: u8) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square(rank * 8 + file))
        } else {
            None
        }
    }

    /// All 64 squares in index order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SQUARES as u8).map(Square)
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Column, 0-7
    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Row in print order, 0-7
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Raw index arithmetic: the square `delta` steps away, if still inside `0..64`.
    ///
    /// Only the index range is checked; callers detect file wrap themselves.
    #[inline]
    #[must_use]
    pub const fn offset(self, delta: i8) -> Option<Square> {
        let target = self.0 as i16 + delta as i16;
        if target >= 0 && target < BOARD_SQUARES as i16 {
            Some(Square(target as u8))
        } else {
            None
        }
    }

    /// Absolute (file, rank) distance to another square
    #[inline]
    #[must_use]
    pub const fn distance(self, other: Square) -> (u8, u8) {
        (
            self.file().abs_diff(other.file()),
            self.rank().abs_diff(other.rank()),
        )
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Square {
    type Error = EncodingError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Square::new(index).ok_or(EncodingError::InvalidSquare { index })
    }
}

impl From<Square> for u8 {
    fn from(square: Square) -> Self {
        square.0
    }
}

impl From<Square> for usize {
    fn from(square: Square) -> Self {
        square.index()
    }
}
