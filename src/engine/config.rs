//! Engine configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Seed applied by every reset unless configured otherwise.
pub const DEFAULT_SEED: u64 = 42;

/// Settings fixed for the lifetime of an engine session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Seed the random source is reset to
    pub seed: u64,
}

impl EngineConfig {
    #[must_use]
    pub const fn new() -> Self {
        EngineConfig { seed: DEFAULT_SEED }
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig::new()
    }
}
