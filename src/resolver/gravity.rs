//! Gravity-fill: drop tiles into empty cells and refill from the top.

use crate::board::Board;
use crate::core::{GameRng, Position};

use super::events::{Fall, FillReport, Refill};

/// Compact every column downward and refill the vacated top cells.
///
/// Columns are processed left to right. Surviving tiles keep their relative
/// order. Fresh tiles are drawn one per empty cell; within a column the
/// first tile drawn lands lowest, as if each one had been pushed in at row 0
/// and shoved down by the next.
pub fn gravity_fill(board: &mut Board, rng: &mut GameRng, num_styles: u8) -> FillReport {
    let mut report = FillReport::default();

    for col in 0..board.cols() {
        // Next row to fill from the bottom (exclusive).
        let mut write = board.rows();

        for row in (0..board.rows()).rev() {
            let from = Position::new(row, col);
            let tile = board[from];
            if tile.is_empty() {
                continue;
            }
            write -= 1;
            if write != row {
                board[Position::new(write, col)] = tile;
                report.falls.push(Fall {
                    col,
                    from_row: row,
                    to_row: write,
                });
            }
        }

        for i in 0..write {
            let position = Position::new(write - 1 - i, col);
            let tile = rng.gen_style(num_styles);
            board[position] = tile;
            report.refills.push(Refill { position, tile });
        }
    }

    report
}
