//! Game rules: line merging, terminal evaluation and the engine.
//!
//! - `merge`: the single "slide toward the front" routine every move uses
//! - `status`: `GameStatus` and win/lose evaluation
//! - `engine`: `GameEngine`, which owns a game and applies moves

pub mod engine;
pub mod merge;
pub mod status;

pub use engine::{GameEngine, MoveOutcome, Spawn};
pub use merge::{merge_line, LineMerge};
pub use status::{evaluate, GameStatus};
