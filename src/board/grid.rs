//! Grid storage with bounds-checked access.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::core::{BoardDataError, EngineError, EngineResult, GameRng, Position, Tile};

/// Fixed-size grid of tiles, stored row-major.
///
/// The board knows nothing about score, selection or presentation. `swap`
/// does not check adjacency: the resolver also uses it for speculative
/// probes during move-search.
///
/// ## Example
///
/// ```
/// use match3_engine::board::Board;
/// use match3_engine::core::{Position, Tile};
///
/// let mut board = Board::from_styles(&[[0, 1, 2], [3, 4, 5]]);
/// board.swap(Position::new(0, 0), Position::new(1, 2)).unwrap();
///
/// assert_eq!(board.get(Position::new(0, 0)).unwrap(), Tile::new(5));
/// assert!(board.get(Position::new(2, 0)).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardData")]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Tile>,
}

/// Unchecked wire form of a [`Board`].
#[derive(Deserialize)]
struct BoardData {
    rows: usize,
    cols: usize,
    cells: Vec<Tile>,
}

impl TryFrom<BoardData> for Board {
    type Error = BoardDataError;

    fn try_from(data: BoardData) -> Result<Self, Self::Error> {
        let BoardData { rows, cols, cells } = data;
        if rows == 0 || cols == 0 || rows.checked_mul(cols) != Some(cells.len()) {
            return Err(BoardDataError::CellCount {
                rows,
                cols,
                cells: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }
}

impl Board {
    /// Create a board with every cell empty.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "Board must have at least one cell");
        Self {
            rows,
            cols,
            cells: vec![Tile::EMPTY; rows * cols],
        }
    }

    /// Create a board filled with uniformly random styles.
    #[must_use]
    pub fn random(rows: usize, cols: usize, num_styles: u8, rng: &mut GameRng) -> Self {
        let mut board = Self::new(rows, cols);
        for cell in &mut board.cells {
            *cell = rng.gen_style(num_styles);
        }
        board
    }

    /// Build a board from literal style rows.
    ///
    /// Panics if `rows` is empty or ragged.
    #[must_use]
    pub fn from_styles<R: AsRef<[u8]>>(rows: &[R]) -> Self {
        assert!(!rows.is_empty(), "Board must have at least one row");
        let cols = rows[0].as_ref().len();
        assert!(
            rows.iter().all(|r| r.as_ref().len() == cols),
            "All rows must have the same length"
        );

        let mut board = Self::new(rows.len(), cols);
        for (row, styles) in rows.iter().enumerate() {
            for (col, &style) in styles.as_ref().iter().enumerate() {
                board[Position::new(row, col)] = Tile::new(style);
            }
        }
        board
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check whether a position lies on the board.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Return `OutOfBounds` unless `pos` lies on the board.
    pub fn check(&self, pos: Position) -> EngineResult<()> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(EngineError::OutOfBounds {
                position: pos,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Read a cell.
    pub fn get(&self, pos: Position) -> EngineResult<Tile> {
        self.check(pos)?;
        Ok(self[pos])
    }

    /// Write a cell.
    pub fn set(&mut self, pos: Position, tile: Tile) -> EngineResult<()> {
        self.check(pos)?;
        self[pos] = tile;
        Ok(())
    }

    /// Exchange the tiles at two positions.
    pub fn swap(&mut self, a: Position, b: Position) -> EngineResult<()> {
        self.check(a)?;
        self.check(b)?;
        self.swap_in_bounds(a, b);
        Ok(())
    }

    /// Swap for positions already known to be on the board.
    pub(crate) fn swap_in_bounds(&mut self, a: Position, b: Position) {
        let (ia, ib) = (self.offset(a), self.offset(b));
        self.cells.swap(ia, ib);
    }

    /// Iterate over every position, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let cols = self.cols;
        (0..self.rows * cols).map(move |i| Position::new(i / cols, i % cols))
    }

    /// Check whether any cell is empty.
    #[must_use]
    pub fn has_empty(&self) -> bool {
        self.cells.iter().any(|t| t.is_empty())
    }

    /// Rows of tiles, top first.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks(self.cols)
    }

    fn offset(&self, pos: Position) -> usize {
        assert!(
            self.contains(pos),
            "{} is outside the {}x{} board",
            pos,
            self.rows,
            self.cols
        );
        pos.row * self.cols + pos.col
    }
}

/// Panics if `pos` is off the board; [`Board::get`] is the checked read.
impl Index<Position> for Board {
    type Output = Tile;

    fn index(&self, pos: Position) -> &Tile {
        &self.cells[self.offset(pos)]
    }
}

impl IndexMut<Position> for Board {
    fn index_mut(&mut self, pos: Position) -> &mut Tile {
        let i = self.offset(pos);
        &mut self.cells[i]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.iter_rows() {
            for (i, tile) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", tile)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
