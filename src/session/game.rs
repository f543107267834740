//! A single game from first selection to game over.

use tracing::{debug, info, instrument};

use crate::board::Board;
use crate::core::{ConfigError, EngineConfig, EngineError, EngineResult, GameRng, Position, Tile};
use crate::resolver::{Resolver, SwapOutcome};

use super::outcome::{GameOver, GameOverReason, GameSummary, MoveResult, Rejection, SelectionOutcome};
use super::selection::SelectionState;

/// One game session.
///
/// Owns the [`Resolver`] (and through it the board) plus score, moves
/// remaining, selection state and the terminal record. Every call runs to
/// completion, cascades included, before it returns.
#[derive(Clone, Debug)]
pub struct Session {
    config: EngineConfig,
    resolver: Resolver,
    score: u32,
    moves_remaining: u32,
    selection: SelectionState,
    game_over: Option<GameOver>,
}

impl Session {
    /// Start a new game on a random board.
    ///
    /// The board is filled from `rng` and settled without scoring, so the
    /// first position never contains a chain.
    pub fn new(config: EngineConfig, mut rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::random(config.rows, config.cols, config.num_styles, &mut rng);
        Self::start(config, board, rng)
    }

    /// Start a new game with a seeded RNG.
    pub fn from_seed(config: EngineConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, GameRng::new(seed))
    }

    /// Start a game on a prepared board.
    ///
    /// Existing chains are cleared without scoring and empty cells filled
    /// from `rng`, exactly as for a random start. Every non-empty tile must
    /// be one of the configured styles.
    pub fn with_board(config: EngineConfig, board: Board, rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;
        if board.rows() != config.rows || board.cols() != config.cols {
            return Err(ConfigError::BoardShape {
                rows: board.rows(),
                cols: board.cols(),
                expected_rows: config.rows,
                expected_cols: config.cols,
            });
        }
        let stray = board
            .positions()
            .find_map(|p| board[p].style().filter(|&s| s >= config.num_styles).map(|s| (p, s)));
        if let Some((position, style)) = stray {
            return Err(ConfigError::TileStyle {
                position,
                style,
                num_styles: config.num_styles,
            });
        }
        Self::start(config, board, rng)
    }

    fn start(config: EngineConfig, board: Board, rng: GameRng) -> Result<Self, ConfigError> {
        let mut resolver = Resolver::new(board, rng, &config)?;
        let settled = resolver.settle();
        debug!(rounds = settled.len(), "initial board settled");

        let mut session = Self {
            moves_remaining: config.moves_allotted,
            config,
            resolver,
            score: 0,
            selection: SelectionState::default(),
            game_over: None,
        };
        session.check_game_over();
        Ok(session)
    }

    // === Selection protocol ===

    /// Feed one player selection into the swap protocol.
    ///
    /// Returns `Err` for off-board coordinates or once the game is over;
    /// neither changes any state. Player mistakes come back as
    /// [`SelectionOutcome::Rejected`].
    #[instrument(skip(self), fields(selected = ?self.selection.selected()))]
    pub fn attempt_select(&mut self, pos: Position) -> EngineResult<SelectionOutcome> {
        if self.game_over.is_some() {
            return Err(EngineError::GameOver);
        }
        self.resolver.board().check(pos)?;

        let first = match self.selection {
            SelectionState::AwaitingFirstSelection => {
                self.selection = SelectionState::AwaitingSecondSelection(pos);
                return Ok(SelectionOutcome::FirstSelected(pos));
            }
            SelectionState::AwaitingSecondSelection(first) if first == pos => {
                self.selection = SelectionState::AwaitingFirstSelection;
                return Ok(SelectionOutcome::Deselected(pos));
            }
            SelectionState::AwaitingSecondSelection(first) => first,
        };

        self.selection = SelectionState::AwaitingFirstSelection;

        let outcome = match self.resolver.swap(first, pos)? {
            SwapOutcome::NotAdjacent => SelectionOutcome::Rejected(Rejection::NotAdjacent),
            SwapOutcome::NoChain => SelectionOutcome::Rejected(Rejection::InvalidSwap),
            SwapOutcome::Resolved(resolution) => {
                let trigger_chain_length = resolution.trigger_chain_length();
                let cascade_chain_length = resolution.cascade_chain_length();
                self.score += trigger_chain_length + cascade_chain_length;
                self.moves_remaining = self.moves_remaining.saturating_sub(1);

                let mut passes = Vec::with_capacity(1 + resolution.cascades.len());
                passes.push(resolution.trigger);
                passes.extend(resolution.cascades);

                SelectionOutcome::Resolved(MoveResult {
                    trigger_chain_length,
                    cascade_chain_length,
                    score_after: self.score,
                    moves_remaining_after: self.moves_remaining,
                    passes,
                })
            }
        };

        match &outcome {
            SelectionOutcome::Rejected(reason) => debug!(%first, %pos, %reason, "move rejected"),
            SelectionOutcome::Resolved(result) => debug!(
                %first,
                %pos,
                trigger = result.trigger_chain_length,
                cascade = result.cascade_chain_length,
                score = self.score,
                moves_remaining = self.moves_remaining,
                "move accepted"
            ),
            _ => {}
        }

        self.check_game_over();
        Ok(outcome)
    }

    // === Hints and game over ===

    /// A cell that has a chain-forming swap, if one exists.
    pub fn request_hint(&mut self) -> Option<Position> {
        self.resolver.find_move().map(|swap| swap.from)
    }

    /// The terminal record, once the game has ended.
    #[must_use]
    pub fn is_game_over(&self) -> Option<GameOver> {
        self.game_over
    }

    /// End the game now.
    ///
    /// If the game already ended, the existing record is kept and its
    /// summary returned.
    pub fn end_game_early(&mut self) -> GameSummary {
        match self.game_over {
            Some(over) => over.summary(),
            None => self.finish(GameOverReason::EndedEarly).summary(),
        }
    }

    fn check_game_over(&mut self) {
        if self.game_over.is_some() {
            return;
        }
        if self.moves_remaining == 0 {
            self.finish(GameOverReason::OutOfMoves);
        } else if self.resolver.find_move().is_none() {
            self.finish(GameOverReason::NoLegalMove);
        }
    }

    fn finish(&mut self, reason: GameOverReason) -> GameOver {
        let over = GameOver {
            reason,
            score: self.score,
            moves_used: self.moves_used(),
        };
        info!(?reason, score = over.score, moves_used = over.moves_used, "game over");
        self.game_over = Some(over);
        over
    }

    // === Read-only state ===

    /// The board, read-only.
    #[must_use]
    pub fn board(&self) -> &Board {
        self.resolver.board()
    }

    /// Tile at a position.
    pub fn tile(&self, pos: Position) -> EngineResult<Tile> {
        self.resolver.board().get(pos)
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Moves left.
    #[must_use]
    pub fn moves_remaining(&self) -> u32 {
        self.moves_remaining
    }

    /// Accepted moves so far.
    #[must_use]
    pub fn moves_used(&self) -> u32 {
        self.config.moves_allotted - self.moves_remaining
    }

    /// Current selection state.
    #[must_use]
    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    /// The session's configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
