//! Core types: board, directions, randomness, configuration, errors.
//!
//! Nothing here knows the rules of a move. The `rules` module builds the
//! game on top of these.

pub mod board;
pub mod config;
pub mod error;
pub mod rng;

pub use board::{is_valid_tile, Board, Direction, EmptyCells, Line, CELLS, SIZE};
pub use config::EngineConfig;
pub use error::{BoardError, ConfigError};
pub use rng::{GameRng, GameRngState, RandomSource, SequenceSource};
