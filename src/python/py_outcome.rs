//! Outcome bindings for Python.

use pyo3::prelude::*;

use crate::session::{GameOver, GameOverReason, SelectionOutcome};

/// Result of one selection.
///
/// `kind` is one of `"first_selected"`, `"deselected"`, `"rejected"` or
/// `"resolved"`. Move fields are only set for `"resolved"`.
#[pyclass(name = "SelectionOutcome")]
#[derive(Clone, Debug)]
pub struct PySelectionOutcome(pub SelectionOutcome);

#[pymethods]
impl PySelectionOutcome {
    #[getter]
    fn kind(&self) -> &'static str {
        match self.0 {
            SelectionOutcome::FirstSelected(_) => "first_selected",
            SelectionOutcome::Deselected(_) => "deselected",
            SelectionOutcome::Rejected(_) => "rejected",
            SelectionOutcome::Resolved(_) => "resolved",
        }
    }

    /// The selected or deselected cell as `(row, col)`.
    #[getter]
    fn position(&self) -> Option<(usize, usize)> {
        match self.0 {
            SelectionOutcome::FirstSelected(p) | SelectionOutcome::Deselected(p) => {
                Some((p.row, p.col))
            }
            _ => None,
        }
    }

    /// Why the move was refused.
    #[getter]
    fn rejection(&self) -> Option<String> {
        match &self.0 {
            SelectionOutcome::Rejected(reason) => Some(reason.to_string()),
            _ => None,
        }
    }

    #[getter]
    fn trigger_chain_length(&self) -> Option<u32> {
        match &self.0 {
            SelectionOutcome::Resolved(m) => Some(m.trigger_chain_length),
            _ => None,
        }
    }

    #[getter]
    fn cascade_chain_length(&self) -> Option<u32> {
        match &self.0 {
            SelectionOutcome::Resolved(m) => Some(m.cascade_chain_length),
            _ => None,
        }
    }

    /// Every cleared cell as `(row, col)`, pass by pass.
    fn cleared_cells(&self) -> Vec<(usize, usize)> {
        match &self.0 {
            SelectionOutcome::Resolved(m) => m.cleared_cells().map(|p| (p.row, p.col)).collect(),
            _ => Vec::new(),
        }
    }

    fn __repr__(&self) -> String {
        match &self.0 {
            SelectionOutcome::Resolved(m) => format!(
                "SelectionOutcome(resolved, trigger={}, cascade={}, score={})",
                m.trigger_chain_length, m.cascade_chain_length, m.score_after
            ),
            _ => format!("SelectionOutcome({})", self.kind()),
        }
    }
}

/// Terminal record of a session.
#[pyclass(name = "GameOver")]
#[derive(Clone, Debug)]
pub struct PyGameOver(pub GameOver);

#[pymethods]
impl PyGameOver {
    /// `"out_of_moves"`, `"no_legal_move"` or `"ended_early"`.
    #[getter]
    fn reason(&self) -> &'static str {
        match self.0.reason {
            GameOverReason::OutOfMoves => "out_of_moves",
            GameOverReason::NoLegalMove => "no_legal_move",
            GameOverReason::EndedEarly => "ended_early",
        }
    }

    #[getter]
    fn score(&self) -> u32 {
        self.0.score
    }

    #[getter]
    fn moves_used(&self) -> u32 {
        self.0.moves_used
    }

    fn __repr__(&self) -> String {
        format!(
            "GameOver(reason={}, score={}, moves_used={})",
            self.reason(),
            self.0.score,
            self.0.moves_used
        )
    }
}
