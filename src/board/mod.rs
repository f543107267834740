//! Board storage.
//!
//! The `Board` owns the tile grid and nothing else. Score, selection and
//! game-over state live in [`crate::session`]; chain logic lives in
//! [`crate::chain`] and [`crate::resolver`].

mod grid;

pub use grid::Board;
