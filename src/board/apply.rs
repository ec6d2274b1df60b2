use super::{ApplyError, Board, Move, PieceCode, Square};

impl Board {
    /// Move whatever stands on `from` to `to` and empty `from`.
    ///
    /// The target is overwritten unconditionally, own pieces included. There
    /// is no turn or legality check and nothing is recorded for undo.
    ///
    /// # Errors
    /// [`ApplyError::OutOfRange`] if either index is 64 or more,
    /// [`ApplyError::EmptySource`] if `from` is empty. The board is unchanged
    /// on error.
    pub fn apply_move(&mut self, from: u8, to: u8) -> Result<(), ApplyError> {
        let (Some(from_sq), Some(to_sq)) = (Square::new(from), Square::new(to)) else {
            return Err(ApplyError::OutOfRange { from, to });
        };

        let moving = self.piece_at(from_sq);
        if moving.is_empty() {
            return Err(ApplyError::EmptySource { square: from_sq });
        }

        self.set_piece(to_sq, moving);
        self.set_piece(from_sq, PieceCode::Empty);
        Ok(())
    }

    /// Apply a generated move. `mv.captured()` is not consulted.
    ///
    /// # Errors
    /// [`ApplyError::EmptySource`] if the move is stale and its source is now empty.
    pub fn make_move(&mut self, mv: Move) -> Result<(), ApplyError> {
        self.apply_move(mv.from().as_u8(), mv.to().as_u8())
    }
}
