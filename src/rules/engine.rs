//! The game engine: board, score and status behind one owner.
//!
//! `GameEngine` is a plain value. There is no global instance; whoever
//! drives the game (a UI event loop, a test, a Python script) owns one and
//! calls into it:
//!
//! ```
//! use rust_2048::{Board, GameEngine, GameStatus};
//!
//! let board = Board::from_rows([
//!     [2, 2, 0, 0],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 4],
//! ]).unwrap();
//!
//! let mut engine = GameEngine::with_seed(Some(board), 7);
//! assert_eq!(engine.status(), GameStatus::Idle);
//!
//! // Moves are ignored until the game starts.
//! assert!(!engine.move_left().changed);
//!
//! engine.start();
//! let outcome = engine.move_left();
//! assert!(outcome.changed);
//! assert!(engine.score() >= 4);
//! assert_eq!(engine.state().get(0, 0), 4);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::merge::merge_line;
use super::status::{evaluate, GameStatus};
use crate::core::{
    Board, BoardError, ConfigError, Direction, EngineConfig, GameRng, RandomSource, SIZE,
};

/// A tile placed by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spawn {
    pub row: usize,
    pub col: usize,
    pub value: u32,
}

/// What a move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub direction: Direction,
    /// At least one line changed. Only then is a tile spawned.
    pub changed: bool,
    /// Points added to the score by this move.
    pub gained: u64,
    /// Tile spawned after an effective move.
    pub spawned: Option<Spawn>,
    /// Status after the move.
    pub status: GameStatus,
}

/// Board, score and status of one game, plus the randomness that drives it.
///
/// `R` is the source of spawn randomness. The default `GameRng` is a seeded
/// ChaCha8 stream; tests substitute a `SequenceSource` or a closure to pin
/// spawns down exactly.
#[derive(Clone, Debug)]
pub struct GameEngine<R = GameRng> {
    board: Board,
    initial: Option<Board>,
    score: u64,
    status: GameStatus,
    config: EngineConfig,
    rng: R,
}

impl GameEngine<GameRng> {
    /// Create an engine with an entropy-seeded RNG.
    ///
    /// `initial` is used as the starting board and remembered for
    /// `restart`. Without one the board starts empty.
    #[must_use]
    pub fn new(initial: Option<Board>) -> Self {
        Self::with_rng(initial, GameRng::from_entropy())
    }

    /// Create an engine whose spawns are reproducible from `seed`.
    #[must_use]
    pub fn with_seed(initial: Option<Board>, seed: u64) -> Self {
        Self::with_rng(initial, GameRng::new(seed))
    }

    /// Create an engine from an untyped grid.
    ///
    /// Fails if the grid is not 4×4 or holds a value that is neither 0 nor
    /// a power of two >= 2.
    pub fn from_rows<T: AsRef<[u32]>>(rows: &[T]) -> Result<Self, BoardError> {
        Ok(Self::new(Some(Board::from_slices(rows)?)))
    }
}

impl<R: RandomSource> GameEngine<R> {
    /// Create an engine with the classic rules and the given random source.
    #[must_use]
    pub fn with_rng(initial: Option<Board>, rng: R) -> Self {
        Self {
            board: initial.unwrap_or_default(),
            initial,
            score: 0,
            status: GameStatus::Idle,
            config: EngineConfig::default(),
            rng,
        }
    }

    /// Create an engine with custom rules.
    pub fn with_config(
        initial: Option<Board>,
        config: EngineConfig,
        rng: R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut engine = Self::with_rng(initial, rng);
        engine.config = config;
        Ok(engine)
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Copy of the current board.
    #[must_use]
    pub fn state(&self) -> Board {
        self.board
    }

    /// Copy of the current board as plain arrays.
    #[must_use]
    pub fn rows(&self) -> [[u32; SIZE]; SIZE] {
        self.board.rows()
    }

    /// Current lifecycle status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The board `restart` returns to, if one was given.
    #[must_use]
    pub fn initial_state(&self) -> Option<Board> {
        self.initial
    }

    /// Rules this engine was built with.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The random source, e.g. to checkpoint a `GameRng`.
    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Largest tile on the board.
    #[must_use]
    pub fn max_tile(&self) -> u32 {
        self.board.max_tile()
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.board.empty_count()
    }

    // ========================================================================
    // LIFECYCLE
    // ========================================================================

    /// Begin play and seed the starting tiles.
    ///
    /// Always switches to `Playing` and seeds onto whatever board is
    /// present, so calling it twice without `restart` adds extra tiles.
    pub fn start(&mut self) {
        self.status = GameStatus::Playing;
        for _ in 0..self.config.start_tiles {
            self.add_random_tile();
        }
        debug!(empty = self.board.empty_count(), "game started");
    }

    /// Reset to `Idle` with score 0.
    ///
    /// `Some(board)` replaces the remembered initial board; `None` keeps the
    /// one given at construction or the last restart. The working board
    /// becomes a copy of the remembered board, or empty if there is none.
    pub fn restart(&mut self, initial: Option<Board>) {
        if initial.is_some() {
            self.initial = initial;
        }
        self.reset();
    }

    /// Reset to `Idle` and forget the remembered initial board.
    pub fn restart_empty(&mut self) {
        self.initial = None;
        self.reset();
    }

    /// Restart from an untyped grid.
    ///
    /// On error the engine is left exactly as it was.
    pub fn restart_from_rows<T: AsRef<[u32]>>(&mut self, rows: &[T]) -> Result<(), BoardError> {
        let board = Board::from_slices(rows)?;
        self.restart(Some(board));
        Ok(())
    }

    fn reset(&mut self) {
        self.board = self.initial.unwrap_or_default();
        self.score = 0;
        self.status = GameStatus::Idle;
        debug!(from_initial = self.initial.is_some(), "game restarted");
    }

    // ========================================================================
    // MOVES
    // ========================================================================

    /// Slide and merge toward column 0.
    pub fn move_left(&mut self) -> MoveOutcome {
        self.apply_move(Direction::Left)
    }

    /// Slide and merge toward column 3.
    pub fn move_right(&mut self) -> MoveOutcome {
        self.apply_move(Direction::Right)
    }

    /// Slide and merge toward row 0.
    pub fn move_up(&mut self) -> MoveOutcome {
        self.apply_move(Direction::Up)
    }

    /// Slide and merge toward row 3.
    pub fn move_down(&mut self) -> MoveOutcome {
        self.apply_move(Direction::Down)
    }

    /// Apply the move bound to a key name (`"ArrowLeft"`, `"left"`, ...).
    ///
    /// Keys that are not a direction are ignored and return `None`.
    pub fn handle_key(&mut self, key: &str) -> Option<MoveOutcome> {
        Direction::from_key(key).map(|direction| self.apply_move(direction))
    }

    /// Slide and merge every line toward `direction`.
    ///
    /// Does nothing unless the game is `Playing`. If any line changed, one
    /// random tile is spawned and the status is re-evaluated.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.status != GameStatus::Playing {
            return MoveOutcome {
                direction,
                changed: false,
                gained: 0,
                spawned: None,
                status: self.status,
            };
        }

        let mut changed = false;
        let mut gained = 0;

        for index in 0..SIZE {
            let original = self.board.line(direction, index);
            let merged = merge_line(original);
            gained += merged.gained;
            if merged.changed_from(&original) {
                self.board.set_line(direction, index, merged.line);
                changed = true;
            }
        }

        // A merge always empties a cell, so points imply a change.
        debug_assert!(changed || gained == 0);
        self.score += gained;

        let mut spawned = None;
        if changed {
            spawned = self.add_random_tile();
            self.check_game_status();
            trace!(%direction, gained, score = self.score, "move applied");
        }

        MoveOutcome {
            direction,
            changed,
            gained,
            spawned,
            status: self.status,
        }
    }

    /// Place a 2 or 4 on a uniformly chosen empty cell.
    ///
    /// Returns `None` without touching the board if it is full.
    pub fn add_random_tile(&mut self) -> Option<Spawn> {
        let empty = self.board.empty_cells();
        if empty.is_empty() {
            return None;
        }

        let pick = (self.rng.next_f64() * empty.len() as f64) as usize;
        let (row, col) = empty[pick.min(empty.len() - 1)];
        let value = self.config.spawn_value(self.rng.next_f64());

        self.board.set(row, col, value);
        trace!(row, col, value, "tile spawned");
        Some(Spawn { row, col, value })
    }

    /// Re-evaluate win/lose and return the resulting status.
    ///
    /// Only a `Playing` game can end; any other status is returned as is.
    /// Win takes precedence over lose. If neither applies the status is
    /// left as it is.
    pub fn check_game_status(&mut self) -> GameStatus {
        if self.status != GameStatus::Playing {
            return self.status;
        }
        if let Some(status) = evaluate(&self.board, self.config.win_tile) {
            if status != self.status {
                debug!(%status, score = self.score, max_tile = self.board.max_tile(), "game over");
            }
            self.status = status;
        }
        self.status
    }
}
