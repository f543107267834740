//! Session bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::prelude::*;

use crate::core::{EngineConfig, EngineError, Position};
use crate::session::Session;

use super::py_outcome::{PyGameOver, PySelectionOutcome};

fn engine_err(e: EngineError) -> PyErr {
    match e {
        EngineError::OutOfBounds { .. } => {
            PyErr::new::<pyo3::exceptions::PyIndexError, _>(e.to_string())
        }
        EngineError::GameOver => PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string()),
    }
}

/// Python wrapper for Session.
#[pyclass(name = "Session")]
pub struct PySession {
    inner: Session,
}

#[pymethods]
impl PySession {
    /// Start a new game.
    ///
    /// # Arguments
    /// - rows, cols: Board size
    /// - num_styles: Number of distinct tile styles (2-254)
    /// - min_chain_length: Shortest run that clears (at least 3)
    /// - moves: Move budget
    /// - seed: RNG seed for deterministic games
    #[new]
    #[pyo3(signature = (
        rows = 8,
        cols = 8,
        num_styles = 7,
        min_chain_length = 3,
        moves = 20,
        seed = 42
    ))]
    fn new(
        rows: usize,
        cols: usize,
        num_styles: u8,
        min_chain_length: usize,
        moves: u32,
        seed: u64,
    ) -> PyResult<Self> {
        let config = EngineConfig::default()
            .with_size(rows, cols)
            .with_num_styles(num_styles)
            .with_min_chain_length(min_chain_length)
            .with_moves(moves);
        let inner = Session::from_seed(config, seed)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Select a cell.
    fn select(&mut self, row: usize, col: usize) -> PyResult<PySelectionOutcome> {
        self.inner
            .attempt_select(Position::new(row, col))
            .map(PySelectionOutcome)
            .map_err(engine_err)
    }

    /// A cell with a chain-forming swap, as `(row, col)`.
    fn hint(&mut self) -> Option<(usize, usize)> {
        self.inner.request_hint().map(|p| (p.row, p.col))
    }

    /// The terminal record, or None while the game is running.
    fn game_over(&self) -> Option<PyGameOver> {
        self.inner.is_game_over().map(PyGameOver)
    }

    /// End the game now and return `(score, moves_used)`.
    fn end_game(&mut self) -> (u32, u32) {
        let summary = self.inner.end_game_early();
        (summary.score, summary.moves_used)
    }

    #[getter]
    fn score(&self) -> u32 {
        self.inner.score()
    }

    #[getter]
    fn moves_remaining(&self) -> u32 {
        self.inner.moves_remaining()
    }

    /// The selected cell, if any.
    #[getter]
    fn selected(&self) -> Option<(usize, usize)> {
        self.inner.selection().selected().map(|p| (p.row, p.col))
    }

    /// Board styles as an int16 array of shape [rows, cols]; -1 is empty.
    fn board_numpy<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<i16>>> {
        let board = self.inner.board();
        let flat: Vec<i16> = board.positions().map(|p| board[p].to_i16()).collect();
        PyArray1::from_vec_bound(py, flat)
            .reshape([board.rows(), board.cols()])
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", e)))
    }

    fn __repr__(&self) -> String {
        let status = if self.inner.is_game_over().is_some() {
            "over"
        } else {
            "running"
        };
        format!(
            "Session(score={}, moves_remaining={}, status={})",
            self.inner.score(),
            self.inner.moves_remaining(),
            status
        )
    }
}
