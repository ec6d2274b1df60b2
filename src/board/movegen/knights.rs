use super::super::attack_tables::KNIGHT_TARGETS;
use super::super::{Board, Color, MoveBuffer, Square};

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, side: Color, moves: &mut MoveBuffer) {
        for &to in &KNIGHT_TARGETS[from.index()] {
            if self.piece_at(to).is_enterable_by(side) {
                self.push_move(from, to, moves);
            }
        }
    }
}
