//! Error types for the board engine.
//!
//! Player-level mistakes (non-adjacent selection, a swap that forms no
//! chain) are ordinary outcomes, not errors. The variants here cover calls
//! a correct integration should never make, and bad configuration.

use std::path::PathBuf;

use super::position::Position;

/// Errors returned by board and session operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Coordinate outside `[0, rows) × [0, cols)`.
    #[error("position {position} is outside the {rows}x{cols} board")]
    OutOfBounds {
        position: Position,
        rows: usize,
        cols: usize,
    },

    /// The session has ended; no further selections are accepted.
    #[error("the game is over")]
    GameOver,
}

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur when building or loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("board is {rows}x{cols} but the config expects {expected_rows}x{expected_cols}")]
    BoardShape {
        rows: usize,
        cols: usize,
        expected_rows: usize,
        expected_cols: usize,
    },

    #[error("tile at {position} has style {style}, outside the {num_styles} configured styles")]
    TileStyle {
        position: Position,
        style: u8,
        num_styles: u8,
    },
}

/// Errors rejecting deserialized tiles and boards.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardDataError {
    #[error("tile value {0} is neither a style nor EMPTY")]
    InvalidTile(u8),

    #[error("board of {rows}x{cols} cannot hold {cells} cells")]
    CellCount {
        rows: usize,
        cols: usize,
        cells: usize,
    },
}
