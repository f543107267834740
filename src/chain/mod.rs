//! Chain detection.
//!
//! A *run* is the maximal line of same-style tiles through a coordinate
//! along one axis; it *qualifies* when it is at least `min_chain_length`
//! long. The detector answers one question per call: which runs through this
//! coordinate qualify for this style?
//!
//! Callers choose the [`DetectMode`] explicitly:
//!
//! - `Mutate` clears qualifying runs to `EMPTY` (post-swap check, cascades)
//! - `Probe` leaves the board untouched (move-search)
//!
//! ## Example
//!
//! ```
//! use match3_engine::board::Board;
//! use match3_engine::chain::{ChainDetector, DetectMode};
//! use match3_engine::core::{Position, Tile};
//!
//! let mut board = Board::from_styles(&[[1, 1, 1, 0], [0, 2, 3, 2]]);
//! let detector = ChainDetector::new(3);
//!
//! let probe = detector.scan_at(&mut board, Position::new(0, 1), Tile::new(1), DetectMode::Probe);
//! assert_eq!(probe.chain_length(), 3);
//! assert!(!board.has_empty());
//!
//! detector.scan_at(&mut board, Position::new(0, 1), Tile::new(1), DetectMode::Mutate);
//! assert!(board.get(Position::new(0, 0)).unwrap().is_empty());
//! ```

mod detector;

pub use detector::{horizontal_run, vertical_run, Axis, ChainDetector, DetectMode, Detection, Run};
