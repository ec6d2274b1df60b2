//! Engine session implementation.

use log::{debug, trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use super::config::EngineConfig;
use crate::board::{ApplyError, Board, Color, Move, MoveBuffer};

/// One engine session: the board, the moves from the latest generation, and
/// the seeded random source used by [`Engine::random_ai`].
///
/// The random source is a type parameter so callers can inject any seedable
/// generator; `reset` always reseeds it from the configured seed.
#[derive(Clone, Debug)]
pub struct Engine<R = StdRng> {
    board: Board,
    moves: MoveBuffer,
    rng: R,
    config: EngineConfig,
}

impl Engine<StdRng> {
    /// Create a session with the default seed, already reset.
    #[must_use]
    pub fn new() -> Self {
        Engine::with_config(EngineConfig::default())
    }
}

impl Default for Engine<StdRng> {
    fn default() -> Self {
        Engine::new()
    }
}

impl<R: RngCore + SeedableRng> Engine<R> {
    /// Create a session with the given settings, already reset.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Engine::with_rng(R::seed_from_u64(config.seed), config)
    }

    /// Restore the starting layout and reseed the random source.
    pub fn reset(&mut self) {
        self.board.reset();
        self.moves.clear();
        self.rng = R::seed_from_u64(self.config.seed);
        debug!("engine reset (seed {})", self.config.seed);
    }
}

impl<R: RngCore> Engine<R> {
    /// Create a session around an existing random source. The board starts
    /// reset; the source is used as given until the first `reset`.
    #[must_use]
    pub fn with_rng(rng: R, config: EngineConfig) -> Self {
        Engine {
            board: Board::starting_position(),
            moves: MoveBuffer::new(),
            rng,
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The live board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The live board, writable. No copy is taken.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Regenerate the move buffer for `side` and return the number of moves stored.
    pub fn generate_moves(&mut self, side: Color) -> usize {
        let count = self.board.generate_moves(side, &mut self.moves);
        trace!("generated {count} moves for {side}");
        if self.moves.truncated() {
            warn!(
                "move buffer full at {} entries, further moves for {side} dropped",
                self.moves.capacity()
            );
        }
        count
    }

    /// Moves from the latest generation. Stale once the board changes.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        self.moves.as_slice()
    }

    #[must_use]
    pub fn move_buffer(&self) -> &MoveBuffer {
        &self.moves
    }

    /// Move the piece on `from` to `to`.
    ///
    /// # Errors
    /// See [`Board::apply_move`]. The board is unchanged on error.
    pub fn apply_move(&mut self, from: u8, to: u8) -> Result<(), ApplyError> {
        match self.board.apply_move(from, to) {
            Ok(()) => {
                debug!("applied {from}->{to}");
                Ok(())
            }
            Err(err) => {
                debug!("rejected {from}->{to}: {err}");
                Err(err)
            }
        }
    }

    /// Generate for `side`, then apply one of the moves chosen uniformly at random.
    ///
    /// Returns the number of candidates. Zero means there was nothing to play;
    /// the board is left untouched and no random number is drawn.
    pub fn random_ai(&mut self, side: Color) -> usize {
        let count = self.generate_moves(side);
        if count == 0 {
            debug!("no moves available for {side}");
            return 0;
        }

        let choice = self.rng.gen_range(0..count);
        let mv = self.moves[choice];
        debug!("random pick {choice}/{count} for {side}: {mv:?}");
        if let Err(err) = self.board.make_move(mv) {
            warn!("freshly generated move {mv} was rejected: {err}");
        }
        count
    }
}
