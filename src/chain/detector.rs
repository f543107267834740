//! Run detection through a single coordinate.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{Position, Tile};

/// Direction of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Along a row.
    Horizontal,
    /// Along a column.
    Vertical,
}

/// Whether a detection may modify the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetectMode {
    /// Clear every cell of each qualifying run to `EMPTY`.
    Mutate,
    /// Report qualification only. Used by move-search.
    Probe,
}

/// A contiguous line of same-style cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    /// Direction of the run.
    pub axis: Axis,
    /// Top-most or left-most cell.
    pub start: Position,
    /// Number of cells.
    pub len: usize,
    /// Style the run was matched against.
    pub tile: Tile,
}

impl Run {
    /// Cells covered by the run, from `start` outward.
    pub fn cells(&self) -> impl Iterator<Item = Position> {
        let Run { axis, start, len, .. } = *self;
        (0..len).map(move |i| match axis {
            Axis::Horizontal => Position::new(start.row, start.col + i),
            Axis::Vertical => Position::new(start.row + i, start.col),
        })
    }
}

/// Qualifying runs found through one pivot coordinate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Detection {
    /// Qualifying run along the pivot's row.
    pub horizontal: Option<Run>,
    /// Qualifying run along the pivot's column.
    pub vertical: Option<Run>,
}

impl Detection {
    /// Check whether either axis qualified.
    #[must_use]
    pub fn qualifies(&self) -> bool {
        self.horizontal.is_some() || self.vertical.is_some()
    }

    /// Qualifying runs, vertical first.
    pub fn runs(&self) -> impl Iterator<Item = &Run> {
        self.vertical.iter().chain(self.horizontal.iter())
    }

    /// Chain length credited for this detection.
    ///
    /// Each qualifying axis adds its length minus the pivot; the pivot adds
    /// one if anything qualified. A plain run of three scores 3, a cross of
    /// two runs of three through the same pivot scores 5.
    #[must_use]
    pub fn chain_length(&self) -> u32 {
        if !self.qualifies() {
            return 0;
        }
        let extra: usize = self.runs().map(|r| r.len - 1).sum();
        (extra + 1) as u32
    }

    /// Distinct cells covered by the qualifying runs.
    #[must_use]
    pub fn cells(&self) -> SmallVec<[Position; 8]> {
        let mut out: SmallVec<[Position; 8]> = SmallVec::new();
        for pos in self.runs().flat_map(Run::cells) {
            if !out.contains(&pos) {
                out.push(pos);
            }
        }
        out
    }
}

/// Bounds `(start_col, end_col)` of the horizontal run through `pos`.
///
/// Extends left and right while neighbours equal `tile`. The pivot cell is
/// not read, so it counts even if it currently holds something else.
#[must_use]
pub fn horizontal_run(board: &Board, pos: Position, tile: Tile) -> (usize, usize) {
    let mut start = pos.col;
    while start > 0 && board[Position::new(pos.row, start - 1)] == tile {
        start -= 1;
    }
    let mut end = pos.col;
    while end + 1 < board.cols() && board[Position::new(pos.row, end + 1)] == tile {
        end += 1;
    }
    (start, end)
}

/// Bounds `(start_row, end_row)` of the vertical run through `pos`.
#[must_use]
pub fn vertical_run(board: &Board, pos: Position, tile: Tile) -> (usize, usize) {
    let mut start = pos.row;
    while start > 0 && board[Position::new(start - 1, pos.col)] == tile {
        start -= 1;
    }
    let mut end = pos.row;
    while end + 1 < board.rows() && board[Position::new(end + 1, pos.col)] == tile {
        end += 1;
    }
    (start, end)
}

/// Finds qualifying runs through a coordinate.
///
/// The detector holds no state between calls; whether it clears cells is
/// decided per call by [`DetectMode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainDetector {
    min_chain_length: usize,
}

impl ChainDetector {
    /// Create a detector for runs of at least `min_chain_length`.
    #[must_use]
    pub fn new(min_chain_length: usize) -> Self {
        Self { min_chain_length }
    }

    /// Minimum qualifying run length.
    #[must_use]
    pub fn min_chain_length(&self) -> usize {
        self.min_chain_length
    }

    /// Find qualifying runs through `pos` for style `tile`, without
    /// touching the board.
    #[must_use]
    pub fn runs_at(&self, board: &Board, pos: Position, tile: Tile) -> Detection {
        if tile.is_empty() {
            return Detection::default();
        }

        let (start_col, end_col) = horizontal_run(board, pos, tile);
        let (start_row, end_row) = vertical_run(board, pos, tile);

        let horizontal = Some(Run {
            axis: Axis::Horizontal,
            start: Position::new(pos.row, start_col),
            len: end_col - start_col + 1,
            tile,
        })
        .filter(|r| r.len >= self.min_chain_length);

        let vertical = Some(Run {
            axis: Axis::Vertical,
            start: Position::new(start_row, pos.col),
            len: end_row - start_row + 1,
            tile,
        })
        .filter(|r| r.len >= self.min_chain_length);

        Detection { horizontal, vertical }
    }

    /// Detect runs through `pos`, clearing them in [`DetectMode::Mutate`].
    pub fn scan_at(
        &self,
        board: &mut Board,
        pos: Position,
        tile: Tile,
        mode: DetectMode,
    ) -> Detection {
        let detection = self.runs_at(board, pos, tile);
        if mode == DetectMode::Mutate {
            for cell in detection.runs().flat_map(Run::cells) {
                board[cell] = Tile::EMPTY;
            }
        }
        detection
    }

    /// Check whether any coordinate on the board sits in a qualifying run.
    #[must_use]
    pub fn has_chains(&self, board: &Board) -> bool {
        board
            .positions()
            .any(|pos| self.runs_at(board, pos, board[pos]).qualifies())
    }
}
