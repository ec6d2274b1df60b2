use super::super::{Board, Color, MoveBuffer, Square};

impl Board {
    /// Single step onto an empty square plus the two diagonal captures.
    ///
    /// Capture wrap is detected from the target file alone: the left capture
    /// may not land on file 7, the right one may not land on file 0.
    pub(crate) fn generate_pawn_moves(&self, from: Square, side: Color, moves: &mut MoveBuffer) {
        let step = side.pawn_step();

        if let Some(to) = from.offset(step) {
            if self.is_empty(to) {
                self.push_move(from, to, moves);
            }
        }

        if let Some(to) = from.offset(step - 1) {
            if to.file() != 7 && self.piece_at(to).is_opponent_of(side) {
                self.push_move(from, to, moves);
            }
        }

        if let Some(to) = from.offset(step + 1) {
            if to.file() != 0 && self.piece_at(to).is_opponent_of(side) {
                self.push_move(from, to, moves);
            }
        }
    }
}
