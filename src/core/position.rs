//! Board coordinates.
//!
//! Row 0 is the top of the board; gravity moves tiles toward higher rows.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A cell coordinate `(row, col)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check whether `other` is exactly one orthogonal step away.
    ///
    /// ```
    /// use match3_engine::core::Position;
    ///
    /// let p = Position::new(2, 2);
    /// assert!(p.is_adjacent(Position::new(2, 3)));
    /// assert!(p.is_adjacent(Position::new(1, 2)));
    /// assert!(!p.is_adjacent(Position::new(3, 3))); // diagonal
    /// assert!(!p.is_adjacent(p));
    /// ```
    #[must_use]
    pub const fn is_adjacent(self, other: Position) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }

    /// Orthogonal neighbours inside a `rows × cols` board.
    ///
    /// Order is fixed: up, down, left, right. Move-search relies on it to
    /// pick the same hint every time.
    #[must_use]
    pub fn neighbors(self, rows: usize, cols: usize) -> SmallVec<[Position; 4]> {
        let mut out = SmallVec::new();
        if self.row > 0 {
            out.push(Position::new(self.row - 1, self.col));
        }
        if self.row + 1 < rows {
            out.push(Position::new(self.row + 1, self.col));
        }
        if self.col > 0 {
            out.push(Position::new(self.row, self.col - 1));
        }
        if self.col + 1 < cols {
            out.push(Position::new(self.row, self.col + 1));
        }
        out
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
