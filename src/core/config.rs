//! Engine configuration.
//!
//! The defaults reproduce the classic game: reach 2048 to win, spawned tiles
//! are 4 one time in ten, and a new game starts with two tiles. Hosts can
//! build a different `EngineConfig` or deserialize one from their own
//! settings file.

use serde::{Deserialize, Serialize};

use super::board::{is_valid_tile, CELLS};
use super::error::ConfigError;

/// Tile value that wins the classic game.
pub const DEFAULT_WIN_TILE: u32 = 2048;

/// Chance that a spawned tile is a 4 instead of a 2.
pub const DEFAULT_FOUR_PROBABILITY: f64 = 0.1;

/// Tiles placed by `start`.
pub const DEFAULT_START_TILES: usize = 2;

/// Tunable rules for a `GameEngine`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Reaching this tile ends the game with a win.
    pub win_tile: u32,

    /// Probability that a spawned tile is a 4.
    pub four_probability: f64,

    /// Number of random tiles seeded by `start`.
    pub start_tiles: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            win_tile: DEFAULT_WIN_TILE,
            four_probability: DEFAULT_FOUR_PROBABILITY,
            start_tiles: DEFAULT_START_TILES,
        }
    }
}

impl EngineConfig {
    /// Create the classic configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the winning tile.
    #[must_use]
    pub fn with_win_tile(mut self, tile: u32) -> Self {
        self.win_tile = tile;
        self
    }

    /// Set the probability of spawning a 4.
    #[must_use]
    pub fn with_four_probability(mut self, probability: f64) -> Self {
        self.four_probability = probability;
        self
    }

    /// Set how many tiles `start` seeds.
    #[must_use]
    pub fn with_start_tiles(mut self, count: usize) -> Self {
        self.start_tiles = count;
        self
    }

    /// Check that the engine can run with this configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.win_tile < 4 || !is_valid_tile(self.win_tile) {
            return Err(ConfigError::InvalidWinTile(self.win_tile));
        }
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(ConfigError::InvalidFourProbability(self.four_probability));
        }
        if self.start_tiles > CELLS {
            return Err(ConfigError::TooManyStartTiles(self.start_tiles));
        }
        Ok(())
    }

    /// Value of a spawned tile given a uniform draw in `[0, 1)`.
    #[must_use]
    pub fn spawn_value(&self, draw: f64) -> u32 {
        if draw < 1.0 - self.four_probability {
            2
        } else {
            4
        }
    }
}
