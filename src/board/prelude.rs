//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use minichess::board::prelude::*;
//! ```

pub use super::{
    ApplyError, Board, BoardBuilder, Color, EncodingError, Move, MoveBuffer, PieceCode, PieceKind,
    Square,
};
pub use crate::engine::{Engine, EngineConfig, SharedEngine};
