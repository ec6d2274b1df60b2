mod kings;
mod knights;
mod pawns;
mod sliders;

use sliders::SliderType;

use super::{Board, Color, Move, MoveBuffer, PieceCode, PieceKind, Square};

impl Board {
    /// Fill `moves` with every pseudo-legal move for `side` and return how many were stored.
    ///
    /// The buffer is cleared first. Squares are scanned in index order and each
    /// piece appends its moves in its fixed direction order, so the result is
    /// deterministic. Moves beyond the buffer capacity are dropped.
    pub fn generate_moves(&self, side: Color, moves: &mut MoveBuffer) -> usize {
        moves.clear();
        for from in Square::all() {
            let PieceCode::Piece(color, kind) = self.piece_at(from) else {
                continue;
            };
            if color != side {
                continue;
            }
            self.generate_piece_moves(from, side, kind, moves);
        }
        moves.len()
    }

    pub(crate) fn generate_piece_moves(
        &self,
        from: Square,
        side: Color,
        kind: PieceKind,
        moves: &mut MoveBuffer,
    ) {
        match kind {
            PieceKind::Pawn => self.generate_pawn_moves(from, side, moves),
            PieceKind::Knight => self.generate_knight_moves(from, side, moves),
            PieceKind::Bishop => self.generate_slider_moves(from, side, SliderType::Bishop, moves),
            PieceKind::Rook => self.generate_slider_moves(from, side, SliderType::Rook, moves),
            PieceKind::King => self.generate_king_moves(from, side, moves),
            // Inherited behavior: queens have no movement rule and generate nothing.
            PieceKind::Queen => {}
        }
    }

    /// Record `from -> to`, snapshotting the current occupant of `to`.
    #[inline]
    fn push_move(&self, from: Square, to: Square, moves: &mut MoveBuffer) {
        moves.push(Move::new(from, to, self.piece_at(to)));
    }
}
