//! Python bindings for the match-3 engine.
//!
//! # Quick Start
//!
//! ```python
//! import match3_engine as m3
//!
//! session = m3.Session(rows=8, cols=8, num_styles=7, moves=20, seed=42)
//!
//! row, col = session.hint()
//! session.select(row, col)
//! outcome = session.select(row + 1, col)
//! print(outcome.kind, session.score, session.moves_remaining)
//!
//! board = session.board_numpy()  # int16 [rows, cols], -1 for empty
//! ```

use pyo3::prelude::*;

mod py_outcome;
mod py_session;

pub use py_outcome::*;
pub use py_session::*;

/// match3_engine: a headless tile-matching board engine.
#[pymodule]
fn match3_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySession>()?;
    m.add_class::<PySelectionOutcome>()?;
    m.add_class::<PyGameOver>()?;

    Ok(())
}
