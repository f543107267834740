//! Move-search: is there any swap left that forms a chain?

use crate::board::Board;
use crate::chain::{ChainDetector, DetectMode};

use super::events::Swap;

/// Find the first swap that would form a chain.
///
/// Coordinates are tried row by row, neighbours in the order up, down,
/// left, right. Each candidate is swapped, probed at the neighbour's cell
/// (where the moved tile now sits) and swapped back, so the board is
/// identical on return whatever the result.
pub fn find_move(board: &mut Board, detector: &ChainDetector) -> Option<Swap> {
    let (rows, cols) = (board.rows(), board.cols());

    for from in board.positions() {
        for to in from.neighbors(rows, cols) {
            board.swap_in_bounds(from, to);
            let moved = board[to];
            let detection = detector.scan_at(board, to, moved, DetectMode::Probe);
            board.swap_in_bounds(from, to);

            if detection.qualifies() {
                return Some(Swap { from, to });
            }
        }
    }

    None
}
