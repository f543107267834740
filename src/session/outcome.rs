//! Outcomes reported to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::core::Position;
use crate::resolver::{ClearPass, Refill};

/// Why a second selection did not produce a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rejection {
    /// The two cells are not orthogonal neighbours.
    NotAdjacent,
    /// The swap formed no chain and was undone.
    InvalidSwap,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::NotAdjacent => write!(f, "cells are not adjacent"),
            Rejection::InvalidSwap => write!(f, "swap forms no chain"),
        }
    }
}

/// An accepted move, fully resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    /// Chain length formed by the swap itself.
    pub trigger_chain_length: u32,
    /// Chain length formed by chain reactions (0 if none).
    pub cascade_chain_length: u32,
    /// Score after this move.
    pub score_after: u32,
    /// Moves left after this move.
    pub moves_remaining_after: u32,
    /// Clearing passes in order: the trigger first, then each chain reaction.
    pub passes: Vec<ClearPass>,
}

impl MoveResult {
    /// Check whether falling tiles set off at least one chain reaction.
    #[must_use]
    pub fn had_chain_reaction(&self) -> bool {
        self.passes.len() > 1
    }

    /// Every cleared cell, pass by pass.
    pub fn cleared_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.passes.iter().flat_map(|p| p.cleared.iter().copied())
    }

    /// Every refill, in the order the tiles were drawn.
    pub fn refill_events(&self) -> impl Iterator<Item = &Refill> {
        self.passes.iter().flat_map(|p| p.refills.iter())
    }
}

/// Result of [`Session::attempt_select`](super::Session::attempt_select).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionOutcome {
    /// The cell is now selected; waiting for a second cell.
    FirstSelected(Position),
    /// The selected cell was picked again; selection cleared.
    Deselected(Position),
    /// The move was refused; board, score and moves are unchanged.
    Rejected(Rejection),
    /// The move was accepted and resolved.
    Resolved(MoveResult),
}

/// Why the session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOverReason {
    /// Every allotted move was used.
    OutOfMoves,
    /// No swap on the board can form a chain.
    NoLegalMove,
    /// The player ended the game.
    EndedEarly,
}

/// Final score and moves used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub score: u32,
    pub moves_used: u32,
}

/// Terminal record of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOver {
    pub reason: GameOverReason,
    pub score: u32,
    pub moves_used: u32,
}

impl GameOver {
    /// Score and moves used, without the reason.
    #[must_use]
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            score: self.score,
            moves_used: self.moves_used,
        }
    }
}
