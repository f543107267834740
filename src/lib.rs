//! # match3-engine
//!
//! A tile-matching board engine: an R×C grid of styled tiles, a two-click
//! swap protocol, chain detection, gravity with random refills, chain
//! reactions, move-search and end-of-game detection.
//!
//! The engine is headless. Rendering, input and sound belong to whoever
//! drives a [`Session`]; the engine reports everything that happened in
//! a move as plain data.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: all randomness flows through one seeded
//!    [`GameRng`]. The same seed and the same selections replay the same game.
//!
//! 2. **Single owner**: the [`Resolver`] owns the board. Sessions and callers
//!    only ever see it read-only.
//!
//! 3. **Immediate resolution**: a swap and all of its chain reactions
//!    resolve inside one call.
//!
//! ## Modules
//!
//! - `core`: tiles, positions, RNG, configuration, errors
//! - `board`: the tile grid
//! - `chain`: run detection through a coordinate
//! - `resolver`: swap resolution, gravity-fill, cascades, move-search
//! - `session`: selection protocol, score, moves, game over

pub mod core;
pub mod board;
pub mod chain;
pub mod resolver;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    BoardDataError, ConfigError, EngineConfig, EngineError, EngineResult, GameRng, Position, Tile,
};

pub use crate::board::Board;

pub use crate::chain::{Axis, ChainDetector, DetectMode, Detection, Run};

pub use crate::resolver::{
    ClearPass, Fall, FillReport, MoveResolution, Refill, Resolver, Swap, SwapOutcome,
};

pub use crate::session::{
    GameOver, GameOverReason, GameSummary, MoveResult, Rejection, SelectionOutcome,
    SelectionState, Session,
};
