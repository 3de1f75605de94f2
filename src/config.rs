//! Headless runner configuration.
//!
//! Precedence: built-in defaults, then `FALLING_BLOCKS_*` environment
//! variables, then command-line flags.

use std::env;
use std::str::FromStr;

/// Settings for a batch of unattended games
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Seed of the first game; game `n` uses `seed + n`
    pub seed: u64,
    pub games: u32,
    /// Stop a game after this many locked pieces even if it is still alive
    pub max_pieces: u32,
    /// Simulated milliseconds per driver tick
    pub tick_ms: u32,
    /// Hard-drop every piece instead of wandering randomly
    pub drop_only: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            games: 1,
            max_pieces: 500,
            tick_ms: 50,
            drop_only: false,
        }
    }
}

impl RunnerConfig {
    /// Defaults overridden by `FALLING_BLOCKS_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`RunnerConfig::from_env`] with a caller-supplied lookup.
    ///
    /// Unparseable values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            seed: parsed(&lookup, "FALLING_BLOCKS_SEED").unwrap_or(defaults.seed),
            games: parsed(&lookup, "FALLING_BLOCKS_GAMES").unwrap_or(defaults.games),
            max_pieces: parsed(&lookup, "FALLING_BLOCKS_MAX_PIECES")
                .unwrap_or(defaults.max_pieces),
            tick_ms: parsed::<u32>(&lookup, "FALLING_BLOCKS_TICK_MS")
                .filter(|&ms| ms > 0)
                .unwrap_or(defaults.tick_ms),
            drop_only: lookup("FALLING_BLOCKS_DROP_ONLY")
                .map(|s| matches!(s.trim(), "1" | "true" | "yes"))
                .unwrap_or(defaults.drop_only),
        }
    }

    /// Seed for the `index`-th game of the batch
    pub fn game_seed(&self, index: u32) -> u64 {
        self.seed.wrapping_add(u64::from(index))
    }
}

fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}
