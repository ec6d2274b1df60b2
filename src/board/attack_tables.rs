use once_cell::sync::Lazy;

use super::{Square, BOARD_SQUARES};

/// Knight jumps in generation order.
pub(crate) const KNIGHT_DELTAS: [i8; 8] = [17, 15, 10, 6, -17, -15, -10, -6];

/// King steps in generation order.
pub(crate) const KING_DELTAS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

/// On-board jump targets per square, in `KNIGHT_DELTAS` order.
///
/// An in-range index delta can still land on a wrapped square, so each
/// candidate must also show a true (1,2) or (2,1) file/rank displacement.
pub(crate) static KNIGHT_TARGETS: Lazy<[Vec<Square>; BOARD_SQUARES]> = Lazy::new(|| {
    targets_by_delta(&KNIGHT_DELTAS, |file_diff, rank_diff| {
        matches!((file_diff, rank_diff), (1, 2) | (2, 1))
    })
});

/// On-board step targets per square, in `KING_DELTAS` order.
pub(crate) static KING_TARGETS: Lazy<[Vec<Square>; BOARD_SQUARES]> = Lazy::new(|| {
    targets_by_delta(&KING_DELTAS, |file_diff, rank_diff| {
        file_diff <= 1 && rank_diff <= 1
    })
});

fn targets_by_delta(
    deltas: &[i8],
    displacement_ok: impl Fn(u8, u8) -> bool,
) -> [Vec<Square>; BOARD_SQUARES] {
    std::array::from_fn(|idx| {
        let Some(from) = Square::new(idx as u8) else {
            return Vec::new();
        };
        deltas
            .iter()
            .filter_map(|&delta| from.offset(delta))
            .filter(|&to| {
                let (file_diff, rank_diff) = from.distance(to);
                displacement_ok(file_diff, rank_diff)
            })
            .collect()
    })
}
