//! Structured results produced while resolving a move.
//!
//! The engine never draws anything itself. Each clearing pass is returned
//! as data so a presentation layer can animate clears, falls and refills in
//! order.

use serde::{Deserialize, Serialize};

use crate::chain::Run;
use crate::core::{Position, Tile};

/// A tile that moved down during gravity-fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fall {
    pub col: usize,
    pub from_row: usize,
    pub to_row: usize,
}

/// A fresh tile placed during gravity-fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Refill {
    pub position: Position,
    pub tile: Tile,
}

/// Everything gravity-fill did to the board.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillReport {
    /// Tiles that fell, column by column, bottom-most first.
    pub falls: Vec<Fall>,
    /// New tiles in the order they were drawn.
    pub refills: Vec<Refill>,
}

/// One clear followed by one gravity-fill.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearPass {
    /// Chain length credited for this pass.
    pub chain_length: u32,
    /// Qualifying runs, in detection order.
    pub runs: Vec<Run>,
    /// Distinct cells set to `EMPTY`, in clearing order.
    pub cleared: Vec<Position>,
    /// Tiles that fell afterwards.
    pub falls: Vec<Fall>,
    /// Fresh tiles placed afterwards.
    pub refills: Vec<Refill>,
}

impl ClearPass {
    pub(crate) fn with_fill(mut self, fill: FillReport) -> Self {
        self.falls = fill.falls;
        self.refills = fill.refills;
        self
    }
}

/// A candidate swap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swap {
    pub from: Position,
    pub to: Position,
}

/// Result of an accepted swap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResolution {
    /// The pass triggered directly by the swap.
    pub trigger: ClearPass,
    /// Chain reactions caused by falling tiles, in order.
    pub cascades: Vec<ClearPass>,
}

impl MoveResolution {
    /// Chain length of the swap itself.
    #[must_use]
    pub fn trigger_chain_length(&self) -> u32 {
        self.trigger.chain_length
    }

    /// Combined chain length of all chain reactions (0 if none).
    #[must_use]
    pub fn cascade_chain_length(&self) -> u32 {
        self.cascades.iter().map(|p| p.chain_length).sum()
    }

    /// All passes, trigger first.
    pub fn passes(&self) -> impl Iterator<Item = &ClearPass> {
        std::iter::once(&self.trigger).chain(self.cascades.iter())
    }
}

/// What happened to a requested swap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SwapOutcome {
    /// The two cells are not one orthogonal step apart. Board untouched.
    NotAdjacent,
    /// The swap formed no chain and was reverted.
    NoChain,
    /// The swap formed a chain and the board has settled.
    Resolved(MoveResolution),
}
