use super::super::attack_tables::KING_TARGETS;
use super::super::{Board, Color, MoveBuffer, Square};

impl Board {
    pub(crate) fn generate_king_moves(&self, from: Square, side: Color, moves: &mut MoveBuffer) {
        for &to in &KING_TARGETS[from.index()] {
            if self.piece_at(to).is_enterable_by(side) {
                self.push_move(from, to, moves);
            }
        }
    }
}
