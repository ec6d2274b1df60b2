use super::super::{Board, Color, MoveBuffer, PieceCode, Square};

/// Type of sliding piece for move generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
}

impl SliderType {
    /// Ray directions in generation order
    pub(crate) const fn directions(self) -> [i8; 4] {
        match self {
            SliderType::Bishop => [-9, -7, 7, 9],
            SliderType::Rook => [-8, 8, -1, 1],
        }
    }

    /// Whether one step from `current` to `target` stays on the ray instead of wrapping.
    fn step_stays_on_ray(self, current: Square, target: Square, direction: i8) -> bool {
        match self {
            SliderType::Bishop => current.file().abs_diff(target.file()) == 1,
            SliderType::Rook => direction.abs() != 1 || current.rank() == target.rank(),
        }
    }
}

impl Board {
    /// Cast each ray one step at a time until it leaves the board, wraps, or
    /// meets a piece. An opposing piece is recorded as a capture; an own piece is not.
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        side: Color,
        slider: SliderType,
        moves: &mut MoveBuffer,
    ) {
        for direction in slider.directions() {
            let mut current = from;
            while let Some(target) = current.offset(direction) {
                if !slider.step_stays_on_ray(current, target, direction) {
                    break;
                }
                match self.piece_at(target) {
                    PieceCode::Empty => {
                        self.push_move(from, target, moves);
                        current = target;
                    }
                    occupant => {
                        if occupant.is_opponent_of(side) {
                            self.push_move(from, target, moves);
                        }
                        break;
                    }
                }
            }
        }
    }
}
