//! Move resolution: swap validation, clearing, gravity-fill, cascades and
//! move-search.
//!
//! The [`Resolver`] owns the board for the lifetime of a session. Nothing
//! else mutates it; callers read it through [`Resolver::board`].
//!
//! ## Resolution model
//!
//! Resolution is immediate: one call to [`Resolver::swap`] runs the whole
//! transaction (trigger clear, gravity-fill, every chain reaction) before it
//! returns. A swap that forms no chain is reverted before returning, so no
//! half-resolved board is ever observable.
//!
//! ## Example
//!
//! ```
//! use match3_engine::board::Board;
//! use match3_engine::core::{EngineConfig, GameRng, Position};
//! use match3_engine::resolver::{Resolver, SwapOutcome};
//!
//! let board = Board::from_styles(&[
//!     [0, 1, 0, 2],
//!     [1, 0, 2, 1],
//!     [2, 1, 3, 2],
//! ]);
//! let config = EngineConfig::default().with_size(3, 4).with_num_styles(4);
//! let mut resolver = Resolver::new(board, GameRng::new(1), &config).unwrap();
//!
//! match resolver.swap(Position::new(1, 1), Position::new(0, 1)).unwrap() {
//!     SwapOutcome::Resolved(resolution) => assert_eq!(resolution.trigger_chain_length(), 3),
//!     other => panic!("unexpected {:?}", other),
//! }
//! assert!(!resolver.board().has_empty());
//! ```

mod cascade;
mod events;
mod gravity;
mod search;

pub use cascade::{cascade_resolve, clear_chains};
pub use events::{ClearPass, Fall, FillReport, MoveResolution, Refill, Swap, SwapOutcome};
pub use gravity::gravity_fill;
pub use search::find_move;

use tracing::{debug, trace};

use crate::board::Board;
use crate::chain::{ChainDetector, DetectMode};
use crate::core::{ConfigError, EngineConfig, EngineResult, GameRng, Position};

use cascade::PassBuilder;

/// Owns the board and applies moves to it.
#[derive(Clone, Debug)]
pub struct Resolver {
    board: Board,
    rng: GameRng,
    detector: ChainDetector,
    num_styles: u8,
}

impl Resolver {
    /// Wrap a board. The board is used as given; call
    /// [`Resolver::settle`] to remove pre-existing chains.
    ///
    /// The config is validated first: too few styles or too short a chain
    /// would keep the cascade loop from settling.
    pub fn new(board: Board, rng: GameRng, config: &EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            board,
            rng,
            detector: ChainDetector::new(config.min_chain_length),
            num_styles: config.num_styles,
        })
    }

    /// Read-only view of the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The chain detector in use.
    #[must_use]
    pub fn detector(&self) -> &ChainDetector {
        &self.detector
    }

    /// Clear chains and fill holes until the board is stable.
    ///
    /// Used at session start; the returned passes are not scored there.
    pub fn settle(&mut self) -> Vec<ClearPass> {
        cascade_resolve(&mut self.board, &self.detector, &mut self.rng, self.num_styles)
    }

    /// Swap `first` with `second` and resolve the result.
    ///
    /// `second` is the cell the player picked last; it is checked before
    /// `first`, and each is tested against the tile it holds after the
    /// swap. The trigger chain length is the sum of both detections.
    pub fn swap(&mut self, first: Position, second: Position) -> EngineResult<SwapOutcome> {
        self.board.check(first)?;
        self.board.check(second)?;

        if !first.is_adjacent(second) {
            return Ok(SwapOutcome::NotAdjacent);
        }

        self.board.swap_in_bounds(first, second);

        // Capture both styles before either clear empties the other cell.
        let second_tile = self.board[second];
        let first_tile = self.board[first];

        let mut trigger = PassBuilder::default();
        let detection = self
            .detector
            .scan_at(&mut self.board, second, second_tile, DetectMode::Mutate);
        trigger.record(&detection);
        let detection = self
            .detector
            .scan_at(&mut self.board, first, first_tile, DetectMode::Mutate);
        trigger.record(&detection);

        if trigger.chain_length() == 0 {
            self.board.swap_in_bounds(first, second);
            debug!(%first, %second, "swap formed no chain, reverted");
            return Ok(SwapOutcome::NoChain);
        }

        let fill = self.gravity_fill();
        let trigger = trigger.finish().with_fill(fill);
        let cascades = self.settle();

        debug!(
            %first,
            %second,
            trigger = trigger.chain_length,
            cascades = cascades.len(),
            "swap resolved"
        );
        trace!(board = %self.board, "board after resolution");

        Ok(SwapOutcome::Resolved(MoveResolution { trigger, cascades }))
    }

    /// Drop tiles into empty cells and refill from the top.
    pub fn gravity_fill(&mut self) -> FillReport {
        gravity_fill(&mut self.board, &mut self.rng, self.num_styles)
    }

    /// First swap that would form a chain, if any. The board is unchanged
    /// on return.
    pub fn find_move(&mut self) -> Option<Swap> {
        find_move(&mut self.board, &self.detector)
    }
}
