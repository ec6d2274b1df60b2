//! Move generation against hand-checked positions.

use super::{board, sorted, sq, squares, targets_from};
use crate::board::{Board, Color, MoveBuffer, PieceCode, PieceKind};

struct TestPosition {
    name: &'static str,
    rows: [&'static str; 8],
    white: usize,
    black: usize,
}

const TEST_POSITIONS: &[TestPosition] = &[
    TestPosition {
        name: "Initial Position",
        rows: [
            "rnbqkbnr", "pppppppp", "........", "........", "........", "........", "PPPPPPPP",
            "RNBQKBNR",
        ],
        white: 12,
        black: 12,
    },
    TestPosition {
        name: "King Ring",
        rows: [
            "........", "........", "........", "...pr...", "....KP..", "...B....", "........",
            "........",
        ],
        white: 15,
        black: 9,
    },
    TestPosition {
        name: "Rook Cross",
        rows: [
            "........", "........", "...N....", "........", ".P.R..b.", "........", "...p....",
            "........",
        ],
        white: 16,
        black: 10,
    },
    TestPosition {
        name: "Bishop Diagonals",
        rows: [
            "........", ".....r..", "........", "........", "..B.....", "........", "p...P...",
            "........",
        ],
        white: 9,
        black: 15,
    },
];

#[test]
fn test_move_counts() {
    let mut moves = MoveBuffer::new();
    for pos in TEST_POSITIONS {
        let board = board(pos.rows);
        assert_eq!(
            board.generate_moves(Color::White, &mut moves),
            pos.white,
            "white count for {}",
            pos.name
        );
        assert_eq!(
            board.generate_moves(Color::Black, &mut moves),
            pos.black,
            "black count for {}",
            pos.name
        );
    }
}

#[test]
fn test_opening_move_order() {
    let board = Board::starting_position();
    let mut moves = MoveBuffer::new();
    board.generate_moves(Color::White, &mut moves);
    let pairs: Vec<(u8, u8)> = moves
        .iter()
        .map(|mv| (mv.from().as_u8(), mv.to().as_u8()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            (48, 40),
            (49, 41),
            (50, 42),
            (51, 43),
            (52, 44),
            (53, 45),
            (54, 46),
            (55, 47),
            (57, 40),
            (57, 42),
            (62, 45),
            (62, 47),
        ]
    );

    board.generate_moves(Color::Black, &mut moves);
    let pairs: Vec<(u8, u8)> = moves
        .iter()
        .map(|mv| (mv.from().as_u8(), mv.to().as_u8()))
        .collect();
    assert_eq!(&pairs[..4], &[(1, 18), (1, 16), (6, 23), (6, 21)]);
    assert_eq!(pairs[4..].len(), 8);
    assert!(moves.iter().all(|mv| !mv.is_capture()));
}

#[test]
fn test_king_covers_adjacent_squares_and_captures() {
    let board = board([
        "........", "........", "........", "...pr...", "....KP..", "...B....", "........",
        "........",
    ]);
    let targets = targets_from(&board, Color::White, sq("e4"));
    assert_eq!(targets, squares(&["d5", "e5", "f5", "d4", "e3", "f3"]));
}

#[test]
fn test_rook_slides_and_captures() {
    let board = board([
        "........", "........", "...N....", "........", ".P.R..b.", "........", "...p....",
        "........",
    ]);
    let targets = targets_from(&board, Color::White, sq("d4"));
    assert_eq!(
        targets,
        squares(&["d5", "d3", "d2", "c4", "e4", "f4", "g4"])
    );
}

#[test]
fn test_bishop_slides_and_captures() {
    let board = board([
        "........", ".....r..", "........", "........", "..B.....", "........", "p...P...",
        "........",
    ]);
    let targets = targets_from(&board, Color::White, sq("c4"));
    assert_eq!(
        sorted(targets),
        sorted(squares(&["a2", "a6", "b3", "b5", "d3", "d5", "e6", "f7"]))
    );
}

#[test]
fn test_pawn_captures_both_diagonals() {
    let board = board([
        "........", "........", "........", "...n.b..", "....P...", "........", "........",
        "........",
    ]);
    let targets = targets_from(&board, Color::White, sq("e4"));
    assert_eq!(targets, squares(&["e5", "d5", "f5"]));
}

#[test]
fn test_pawn_blocked_and_no_double_step() {
    let board = board([
        "........", "........", "........", "........", "........", "....p...", "....P...",
        "........",
    ]);
    assert!(targets_from(&board, Color::White, sq("e2")).is_empty());

    let open = Board::starting_position();
    assert_eq!(targets_from(&open, Color::White, sq("e2")), squares(&["e3"]));
}

#[test]
fn test_pawn_does_not_capture_forward_or_own() {
    let board = board([
        "........", "........", "........", "...PpP..", "....P...", "........", "........",
        "........",
    ]);
    assert!(targets_from(&board, Color::White, sq("e4")).is_empty());
}

#[test]
fn test_black_pawn_moves_down() {
    let board = board([
        "........", "...p....", "..N.R...", "........", "........", "........", "........",
        "........",
    ]);
    let targets = targets_from(&board, Color::Black, sq("d7"));
    assert_eq!(targets, squares(&["d6", "c6", "e6"]));
}

#[test]
fn test_knight_jumps_over_pieces() {
    let board = Board::starting_position();
    let targets = targets_from(&board, Color::White, sq("b1"));
    assert_eq!(targets, squares(&["a3", "c3"]));
}

#[test]
fn test_captured_is_snapshot_of_target() {
    let board = board([
        "........", "........", ".....q..", "........", "....N...", "........", "........",
        "........",
    ]);
    let mut moves = MoveBuffer::new();
    assert_eq!(board.generate_moves(Color::White, &mut moves), 8);
    let capture = moves.iter().find(|mv| mv.is_capture()).copied().unwrap();
    assert_eq!(capture.to(), sq("f6"));
    assert_eq!(
        capture.captured(),
        PieceCode::new(Color::Black, PieceKind::Queen)
    );
    assert!(moves
        .iter()
        .filter(|mv| mv.to() != sq("f6"))
        .all(|mv| mv.captured() == PieceCode::Empty));
}

#[test]
fn test_generation_overwrites_previous_buffer() {
    let board = Board::starting_position();
    let mut moves = MoveBuffer::new();
    board.generate_moves(Color::White, &mut moves);
    let lonely = super::board([
        "........", "........", "........", "........", "........", "........", "........",
        "K.......",
    ]);
    assert_eq!(lonely.generate_moves(Color::White, &mut moves), 3);
    assert_eq!(moves.len(), 3);
    assert!(moves.iter().all(|mv| mv.from() == sq("a1")));
}

#[test]
fn test_side_filter() {
    let board = Board::starting_position();
    let mut moves = MoveBuffer::new();
    board.generate_moves(Color::Black, &mut moves);
    for mv in &moves {
        assert_eq!(board.piece_at(mv.from()).color(), Some(Color::Black));
    }
}
