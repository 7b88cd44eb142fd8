//! Game status and terminal evaluation.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::Board;

/// Where a game is in its lifecycle.
///
/// Transitions only go forward: `Idle` → `Playing` → `Win` | `Lose`.
/// `Win` and `Lose` hold until the engine is restarted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// Not started, or just restarted.
    #[default]
    Idle,
    /// Accepting moves.
    Playing,
    /// The winning tile was reached.
    Win,
    /// The board is full and no merge is possible.
    Lose,
}

impl GameStatus {
    /// `Win` or `Lose`.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Win | GameStatus::Lose)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GameStatus::Idle => "idle",
            GameStatus::Playing => "playing",
            GameStatus::Win => "win",
            GameStatus::Lose => "lose",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Evaluate a board after an effective move.
///
/// Returns `Some(Win)` if any cell equals `win_tile`, `Some(Lose)` if the
/// board is full with no equal neighbours, and `None` if play continues.
#[must_use]
pub fn evaluate(board: &Board, win_tile: u32) -> Option<GameStatus> {
    if board.contains(win_tile) {
        return Some(GameStatus::Win);
    }
    if !board.is_full() || board.has_adjacent_pair() {
        return None;
    }
    Some(GameStatus::Lose)
}
