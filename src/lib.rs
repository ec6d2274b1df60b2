//! Minimal pseudo-legal chess position engine.
//!
//! Holds a 64-square board, generates pseudo-legal moves for a side, applies
//! moves, and can play a uniformly random candidate move from a seeded source.
//! There is no check detection, castling, en passant or promotion.

pub mod board;
pub mod engine;

pub use board::{ApplyError, Board, Color, Move, MoveBuffer, PieceCode, PieceKind, Square};
pub use engine::{Engine, EngineConfig, SharedEngine};
