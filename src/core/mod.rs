//! Core engine types: tiles, positions, RNG, configuration, errors.
//!
//! These are the building blocks shared by the board, the chain detector,
//! the resolver and the session.

pub mod tile;
pub mod position;
pub mod rng;
pub mod config;
pub mod error;

pub use tile::Tile;
pub use position::Position;
pub use rng::GameRng;
pub use config::EngineConfig;
pub use error::{BoardDataError, ConfigError, EngineError, EngineResult};
