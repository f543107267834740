//! Full-board chain clearing and the cascade loop.

use rustc_hash::FxHashSet;
use tracing::trace;

use crate::board::Board;
use crate::chain::{ChainDetector, DetectMode, Detection};
use crate::core::{GameRng, Position};

use super::events::ClearPass;
use super::gravity::gravity_fill;

/// Accumulates detections into a [`ClearPass`].
#[derive(Default)]
pub(crate) struct PassBuilder {
    pass: ClearPass,
    seen: FxHashSet<Position>,
}

impl PassBuilder {
    pub(crate) fn record(&mut self, detection: &Detection) {
        if !detection.qualifies() {
            return;
        }
        self.pass.chain_length += detection.chain_length();
        self.pass.runs.extend(detection.runs().copied());
        for cell in detection.cells() {
            if self.seen.insert(cell) {
                self.pass.cleared.push(cell);
            }
        }
    }

    pub(crate) fn chain_length(&self) -> u32 {
        self.pass.chain_length
    }

    pub(crate) fn finish(self) -> ClearPass {
        self.pass
    }
}

/// Scan the whole board once, clearing every qualifying run.
///
/// Cells are visited row by row; each non-empty cell is tested against its
/// own style. Cells cleared earlier in the scan are empty by the time they
/// are visited, so a plain run is credited once, at its first cell.
pub fn clear_chains(board: &mut Board, detector: &ChainDetector) -> ClearPass {
    let mut builder = PassBuilder::default();
    for pos in board.positions() {
        let tile = board[pos];
        if tile.is_empty() {
            continue;
        }
        let detection = detector.scan_at(board, pos, tile, DetectMode::Mutate);
        builder.record(&detection);
    }
    builder.finish()
}

/// Clear chains and refill until the board is stable.
///
/// Returns one [`ClearPass`] per round that cleared anything; an empty vec
/// means the board had no chains.
pub fn cascade_resolve(
    board: &mut Board,
    detector: &ChainDetector,
    rng: &mut GameRng,
    num_styles: u8,
) -> Vec<ClearPass> {
    let mut passes = Vec::new();

    loop {
        let pass = clear_chains(board, detector);
        // Holes left by the caller still need filling before we can stop.
        if pass.chain_length == 0 && !board.has_empty() {
            break;
        }
        let fill = gravity_fill(board, rng, num_styles);
        if pass.chain_length == 0 {
            continue;
        }
        trace!(
            round = passes.len() + 1,
            chain_length = pass.chain_length,
            cleared = pass.cleared.len(),
            "cascade round"
        );
        passes.push(pass.with_fill(fill));
    }

    passes
}
