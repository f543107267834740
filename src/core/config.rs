//! Engine configuration.
//!
//! `EngineConfig` fixes everything about a session that does not change
//! while it runs: board dimensions, number of tile styles, the minimum run
//! length that counts as a chain, and the number of moves allotted.
//!
//! Configs can be built in code with the `with_*` methods or loaded from
//! TOML; missing keys fall back to the defaults.
//!
//! ```
//! use match3_engine::core::EngineConfig;
//!
//! let config = EngineConfig::from_toml_str("rows = 6\nmoves_allotted = 10").unwrap();
//! assert_eq!(config.rows, 6);
//! assert_eq!(config.cols, 8);
//! assert_eq!(config.moves_allotted, 10);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::tile::Tile;

/// Default board height.
pub const DEFAULT_ROWS: usize = 8;
/// Default board width.
pub const DEFAULT_COLS: usize = 8;
/// Default number of tile styles.
pub const DEFAULT_NUM_STYLES: u8 = 7;
/// Smallest run that clears.
pub const MIN_CHAIN_LENGTH: usize = 3;
/// Default moves per game.
pub const DEFAULT_MOVES: u32 = 20;

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of rows on the board.
    pub rows: usize,

    /// Number of columns on the board.
    pub cols: usize,

    /// Number of distinct tile styles (2..=254).
    pub num_styles: u8,

    /// Minimum run length that forms a chain (at least 3).
    pub min_chain_length: usize,

    /// Moves the player may make before the game ends.
    pub moves_allotted: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            num_styles: DEFAULT_NUM_STYLES,
            min_chain_length: MIN_CHAIN_LENGTH,
            moves_allotted: DEFAULT_MOVES,
        }
    }
}

impl EngineConfig {
    /// Set board dimensions.
    #[must_use]
    pub fn with_size(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Set the number of tile styles.
    #[must_use]
    pub fn with_num_styles(mut self, num_styles: u8) -> Self {
        self.num_styles = num_styles;
        self
    }

    /// Set the minimum chain length.
    #[must_use]
    pub fn with_min_chain_length(mut self, len: usize) -> Self {
        self.min_chain_length = len;
        self
    }

    /// Set the number of moves per game.
    #[must_use]
    pub fn with_moves(mut self, moves: u32) -> Self {
        self.moves_allotted = moves;
        self
    }

    /// Check that the config describes a playable board.
    ///
    /// With a single style every refill forms a new chain and the board
    /// never settles. Runs of three are the shortest chain the game
    /// recognises, so `min_chain_length` may raise that bound but not
    /// lower it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::Validation(format!(
                "board must have at least one row and column (got {}x{})",
                self.rows, self.cols
            )));
        }
        if self.num_styles < 2 {
            return Err(ConfigError::Validation(
                "num_styles must be at least 2".to_string(),
            ));
        }
        if self.num_styles > Tile::MAX_STYLES {
            return Err(ConfigError::Validation(format!(
                "num_styles must be at most {}",
                Tile::MAX_STYLES
            )));
        }
        if self.min_chain_length < MIN_CHAIN_LENGTH {
            return Err(ConfigError::Validation(format!(
                "min_chain_length must be at least {}",
                MIN_CHAIN_LENGTH
            )));
        }
        if self.moves_allotted == 0 {
            return Err(ConfigError::Validation(
                "moves_allotted must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }
}
