//! Two-click selection state machine.

use serde::{Deserialize, Serialize};

use crate::core::Position;

/// Where the player is in the two-click swap protocol.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionState {
    /// No cell selected.
    #[default]
    AwaitingFirstSelection,
    /// One cell selected; the next click completes or cancels the swap.
    AwaitingSecondSelection(Position),
}

impl SelectionState {
    /// The selected cell, if any.
    #[must_use]
    pub fn selected(&self) -> Option<Position> {
        match self {
            SelectionState::AwaitingFirstSelection => None,
            SelectionState::AwaitingSecondSelection(pos) => Some(*pos),
        }
    }
}
