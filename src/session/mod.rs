//! Game sessions: the selection protocol, scoring, the move budget and
//! game over.
//!
//! A [`Session`] is the only interface a presentation layer needs. It takes
//! one selection at a time and answers with a [`SelectionOutcome`]:
//!
//! - first click selects a cell
//! - clicking the same cell again cancels
//! - clicking another cell attempts the swap; non-neighbours and swaps
//!   that form no chain are rejected and leave everything unchanged
//!
//! After every attempted swap the session checks for game over: moves
//! exhausted first, then no legal move left.
//!
//! ## Example
//!
//! ```
//! use match3_engine::core::{EngineConfig, Position};
//! use match3_engine::session::{SelectionOutcome, Session};
//!
//! let mut session = Session::from_seed(EngineConfig::default(), 7).unwrap();
//! if session.is_game_over().is_none() {
//!     let hint = session.request_hint().unwrap();
//!     let outcome = session.attempt_select(hint).unwrap();
//!     assert_eq!(outcome, SelectionOutcome::FirstSelected(hint));
//! }
//! assert_eq!(session.score(), 0);
//! assert!(session.board().get(Position::new(7, 7)).is_ok());
//! ```

mod game;
mod outcome;
mod selection;

pub use game::Session;
pub use outcome::{GameOver, GameOverReason, GameSummary, MoveResult, Rejection, SelectionOutcome};
pub use selection::SelectionState;
