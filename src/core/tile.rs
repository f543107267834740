//! Tile values stored in board cells.
//!
//! A tile is either a style index in `[0, num_styles)` or the `EMPTY`
//! sentinel left behind by a clear and consumed by gravity-fill.
//!
//! ```
//! use match3_engine::core::Tile;
//!
//! let ruby = Tile::new(2);
//! assert_eq!(ruby.style(), Some(2));
//! assert!(Tile::EMPTY.is_empty());
//! assert_eq!(Tile::EMPTY.style(), None);
//! ```

use serde::{Deserialize, Serialize};

use super::error::BoardDataError;

/// Contents of one board cell.
///
/// Two tiles with the same style are interchangeable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Tile(u8);

impl Tile {
    /// Marks a cell whose tile was cleared and is awaiting refill.
    pub const EMPTY: Tile = Tile(u8::MAX);

    /// Largest number of distinct styles a board can hold.
    pub const MAX_STYLES: u8 = u8::MAX - 1;

    /// Create a tile of the given style.
    #[must_use]
    pub const fn new(style: u8) -> Self {
        assert!(style < Self::MAX_STYLES, "style index collides with EMPTY");
        Self(style)
    }

    /// Style index, or `None` for an empty cell.
    #[must_use]
    pub const fn style(self) -> Option<u8> {
        if self.is_empty() {
            None
        } else {
            Some(self.0)
        }
    }

    /// Check whether this cell is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == Self::EMPTY.0
    }

    /// Style as a signed value, `-1` for empty.
    ///
    /// Convenient for presentation layers and array exports.
    #[must_use]
    pub const fn to_i16(self) -> i16 {
        if self.is_empty() {
            -1
        } else {
            self.0 as i16
        }
    }
}

impl TryFrom<u8> for Tile {
    type Error = BoardDataError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        if raw < Self::MAX_STYLES || raw == Self::EMPTY.0 {
            Ok(Self(raw))
        } else {
            Err(BoardDataError::InvalidTile(raw))
        }
    }
}

impl From<Tile> for u8 {
    fn from(tile: Tile) -> u8 {
        tile.0
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.style() {
            Some(style) => write!(f, "{}", style),
            None => write!(f, "."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_round_trip() {
        for style in [0u8, 1, 6, 253] {
            assert_eq!(Tile::new(style).style(), Some(style));
            assert!(!Tile::new(style).is_empty());
        }
    }

    #[test]
    fn test_empty() {
        assert!(Tile::EMPTY.is_empty());
        assert_eq!(Tile::EMPTY.to_i16(), -1);
        assert_eq!(Tile::new(4).to_i16(), 4);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Tile::new(3)), "3");
        assert_eq!(format!("{}", Tile::EMPTY), ".");
    }

    #[test]
    fn test_deserialize_checks_value() {
        let tile: Tile = serde_json::from_str("6").unwrap();
        assert_eq!(tile, Tile::new(6));
        let empty: Tile = serde_json::from_str("255").unwrap();
        assert!(empty.is_empty());

        // 254 is neither a style nor the EMPTY marker.
        assert!(serde_json::from_str::<Tile>("254").is_err());
        assert_eq!(Tile::try_from(254), Err(BoardDataError::InvalidTile(254)));
        assert_eq!(serde_json::to_string(&Tile::new(6)).unwrap(), "6");
    }

    #[test]
    #[should_panic(expected = "style index collides with EMPTY")]
    fn test_style_out_of_range() {
        let _ = Tile::new(u8::MAX);
    }
}
