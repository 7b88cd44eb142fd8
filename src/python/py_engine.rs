//! Engine bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Board, BoardError};
use crate::rules::{GameEngine, MoveOutcome};

fn to_py_err(err: BoardError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn parse_board(rows: Option<Vec<Vec<u32>>>) -> PyResult<Option<Board>> {
    rows.map(Board::try_from).transpose().map_err(to_py_err)
}

/// Python wrapper for MoveOutcome.
#[pyclass(name = "MoveOutcome")]
#[derive(Clone, Debug)]
pub struct PyMoveOutcome(pub MoveOutcome);

#[pymethods]
impl PyMoveOutcome {
    #[getter]
    fn direction(&self) -> String {
        self.0.direction.to_string()
    }

    /// Whether the move changed the board.
    #[getter]
    fn changed(&self) -> bool {
        self.0.changed
    }

    /// Points scored by the move.
    #[getter]
    fn gained(&self) -> u64 {
        self.0.gained
    }

    /// `(row, col, value)` of the spawned tile, if any.
    #[getter]
    fn spawned(&self) -> Option<(usize, usize, u32)> {
        self.0.spawned.map(|s| (s.row, s.col, s.value))
    }

    #[getter]
    fn status(&self) -> &'static str {
        self.0.status.as_str()
    }

    fn __repr__(&self) -> String {
        format!(
            "MoveOutcome(direction={}, changed={}, gained={}, status={})",
            self.0.direction, self.0.changed, self.0.gained, self.0.status
        )
    }
}

/// Python wrapper for GameEngine.
#[pyclass(name = "GameEngine")]
pub struct PyGameEngine {
    engine: GameEngine,
}

#[pymethods]
impl PyGameEngine {
    /// Create a new engine.
    ///
    /// # Arguments
    /// - initial_state: optional 4x4 list of ints used as the starting board
    /// - seed: RNG seed for reproducible spawns (random if omitted)
    #[new]
    #[pyo3(signature = (initial_state = None, seed = None))]
    fn new(initial_state: Option<Vec<Vec<u32>>>, seed: Option<u64>) -> PyResult<Self> {
        let initial = parse_board(initial_state)?;
        let engine = match seed {
            Some(seed) => GameEngine::with_seed(initial, seed),
            None => GameEngine::new(initial),
        };
        Ok(Self { engine })
    }

    /// Start the game and seed two tiles.
    fn start(&mut self) {
        self.engine.start();
    }

    /// Reset to idle. Passing `initial_state` replaces the remembered board.
    #[pyo3(signature = (initial_state = None))]
    fn restart(&mut self, initial_state: Option<Vec<Vec<u32>>>) -> PyResult<()> {
        let initial = parse_board(initial_state)?;
        self.engine.restart(initial);
        Ok(())
    }

    /// Reset to idle with an empty board, forgetting the remembered one.
    fn restart_empty(&mut self) {
        self.engine.restart_empty();
    }

    fn move_left(&mut self) -> PyMoveOutcome {
        PyMoveOutcome(self.engine.move_left())
    }

    fn move_right(&mut self) -> PyMoveOutcome {
        PyMoveOutcome(self.engine.move_right())
    }

    fn move_up(&mut self) -> PyMoveOutcome {
        PyMoveOutcome(self.engine.move_up())
    }

    fn move_down(&mut self) -> PyMoveOutcome {
        PyMoveOutcome(self.engine.move_down())
    }

    /// Apply the move bound to a key name ("ArrowLeft", "left", ...).
    ///
    /// Other keys are ignored and return None.
    fn handle_key(&mut self, key: &str) -> Option<PyMoveOutcome> {
        self.engine.handle_key(key).map(PyMoveOutcome)
    }

    /// Copy of the board as a list of rows.
    fn get_state(&self) -> Vec<Vec<u32>> {
        self.engine.state().into()
    }

    fn get_score(&self) -> u64 {
        self.engine.score()
    }

    /// One of "idle", "playing", "win", "lose".
    fn get_status(&self) -> &'static str {
        self.engine.status().as_str()
    }

    fn __repr__(&self) -> String {
        format!(
            "GameEngine(score={}, status={}, max_tile={})",
            self.engine.score(),
            self.engine.status(),
            self.engine.max_tile()
        )
    }

    fn __str__(&self) -> String {
        self.engine.state().to_string()
    }
}
