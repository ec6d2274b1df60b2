//! Serialized access to one engine session from several threads.

use std::sync::Arc;

use parking_lot::Mutex;

use super::controller::Engine;
use super::config::EngineConfig;
use crate::board::{ApplyError, Board, Color, Move};

/// A cloneable handle to one [`Engine`] behind a mutex.
///
/// Every method holds the lock for exactly one operation. Use [`SharedEngine::with`]
/// when a generate must be read back before anyone else touches the buffer.
#[derive(Clone, Debug, Default)]
pub struct SharedEngine {
    inner: Arc<Mutex<Engine>>,
}

impl SharedEngine {
    #[must_use]
    pub fn new(engine: Engine) -> Self {
        SharedEngine {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        SharedEngine::new(Engine::with_config(config))
    }

    /// Run `f` with exclusive access to the engine.
    pub fn with<T>(&self, f: impl FnOnce(&mut Engine) -> T) -> T {
        let mut engine = self.inner.lock();
        f(&mut engine)
    }

    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    /// Copy of the current board.
    #[must_use]
    pub fn board(&self) -> Board {
        self.inner.lock().board().clone()
    }

    /// Generate for `side` and return a copy of the resulting moves.
    #[must_use]
    pub fn generate_moves(&self, side: Color) -> Vec<Move> {
        let mut engine = self.inner.lock();
        engine.generate_moves(side);
        engine.moves().to_vec()
    }

    /// # Errors
    /// See [`Engine::apply_move`].
    pub fn apply_move(&self, from: u8, to: u8) -> Result<(), ApplyError> {
        self.inner.lock().apply_move(from, to)
    }

    pub fn random_ai(&self, side: Color) -> usize {
        self.inner.lock().random_ai(side)
    }
}
