//! # rust-2048
//!
//! Rules engine for the 4×4 sliding-tile merge puzzle.
//!
//! ## Design Principles
//!
//! 1. **One owner**: `GameEngine` holds the board, score and status. There is
//!    no global game; the presentation layer owns an engine and calls into it.
//!
//! 2. **One merge routine**: every direction reads its lines so that tiles
//!    slide toward index 0, runs them through `merge_line`, and writes them
//!    back.
//!
//! 3. **Injected randomness**: spawns draw from a `RandomSource`. The
//!    default is a seeded ChaCha8 stream; tests script exact values.
//!
//! ## Modules
//!
//! - `core`: Board, directions, RNG, configuration, errors
//! - `rules`: Line merge, status evaluation, the engine
//! - `python`: PyO3 bindings (feature `python`)
//!
//! ## Example
//!
//! ```
//! use rust_2048::{Direction, GameEngine, GameStatus};
//!
//! let mut engine = GameEngine::with_seed(None, 42);
//! engine.start();
//!
//! while engine.status() == GameStatus::Playing {
//!     let before = engine.score();
//!     for direction in Direction::ALL {
//!         if engine.apply_move(direction).changed {
//!             break;
//!         }
//!     }
//!     assert!(engine.score() >= before);
//! }
//! assert!(engine.status().is_terminal());
//! ```

pub mod core;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardError, ConfigError, Direction, EngineConfig,
    GameRng, GameRngState, RandomSource, SequenceSource,
};

pub use crate::rules::{merge_line, GameEngine, GameStatus, LineMerge, MoveOutcome, Spawn};
