//! Python bindings for the rust-2048 engine.
//!
//! A Python presentation layer (a terminal UI, a notebook, a web handler)
//! owns a `GameEngine` and forwards input to it.
//!
//! # Quick Start
//!
//! ```python
//! import rust_2048
//!
//! game = rust_2048.GameEngine(seed=42)
//! game.start()
//!
//! game.handle_key("ArrowLeft")
//! print(game.get_state(), game.get_score(), game.get_status())
//!
//! game.restart()
//! ```

use pyo3::prelude::*;

mod py_engine;

pub use py_engine::*;

/// rust-2048: rules engine for the 4x4 sliding-tile merge puzzle.
#[pymodule]
fn rust_2048(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGameEngine>()?;
    m.add_class::<PyMoveOutcome>()?;

    Ok(())
}
