//! Engine session: board, move buffer and random source behind one owner.
//!
//! This is the surface a host boundary wraps: reset, generate, inspect,
//! apply and random selection, all run to completion on the caller's thread.

mod config;
mod controller;
mod shared;

pub use config::{EngineConfig, DEFAULT_SEED};
pub use controller::Engine;
pub use shared::SharedEngine;
