//! Game session: turn order, move validation, and the engine's depth policy.
//!
//! The controller owns the only board of a session and commits moves to it
//! permanently. Human moves are checked here; engine moves come straight
//! from [`search_root`] and need no check.

use log::info;
use thiserror::Error;

use crate::board::{Board, Player};
use crate::constants::{DEFAULT_SIZE, INITIAL_MOVES, search_depth};
use crate::movegen::legal_moves;
use crate::position::{Direction, Move, Position};
use crate::search::{NEG_INFINITY, POS_INFINITY, search_root};

/// Why a requested move was refused.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("{0} is off the board")]
    OutOfBounds(Position),

    #[error("{0} has already been visited")]
    Occupied(Position),

    #[error("{to} is not on a rank, file or diagonal from {from}")]
    NotAligned { from: Position, to: Position },

    #[error("the {} path from {from} to {to} is blocked", .dir.name())]
    Blocked {
        from: Position,
        to: Position,
        dir: Direction,
    },

    #[error("the game is already over")]
    GameOver,
}

/// Session settings.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Board size (NxN).
    pub size: usize,
    /// Upper bound on the scheduled search depth.
    pub max_depth: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            max_depth: None,
        }
    }
}

/// A game in progress.
pub struct Game {
    board: Board,
    config: GameConfig,
    to_move: Player,
    /// Moves on the board, counting the two start corners.
    moves_played: usize,
    winner: Option<Player>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self {
            board: Board::new(config.size),
            config,
            to_move: Player::First,
            moves_played: INITIAL_MOVES,
            winner: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Depth the engine searches at for the next move.
    pub fn search_depth(&self) -> u32 {
        let scheduled = search_depth(self.moves_played);
        self.config
            .max_depth
            .map_or(scheduled, |cap| scheduled.min(cap))
            .max(1)
    }

    /// Moves available to the player to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.board, self.to_move)
    }

    /// Check a move for the player to move without playing it.
    pub fn validate_move(&self, dest: Move) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.in_bounds(dest) {
            return Err(MoveError::OutOfBounds(dest));
        }
        if self.board.is_occupied(dest) {
            return Err(MoveError::Occupied(dest));
        }

        let from = self.board.current_position(self.to_move);
        let (dir, distance) =
            Direction::between(from, dest).ok_or(MoveError::NotAligned { from, to: dest })?;
        let blocked = (1..distance)
            .filter_map(|d| from.step(dir, d, self.board.size()))
            .any(|p| self.board.is_occupied(p));
        if blocked {
            return Err(MoveError::Blocked { from, to: dest, dir });
        }
        Ok(())
    }

    /// Validate and play a move for the player to move.
    pub fn play(&mut self, dest: Move) -> Result<(), MoveError> {
        self.validate_move(dest)?;
        self.commit(dest);
        Ok(())
    }

    /// Let the engine move for the player to move.
    ///
    /// Returns `None` if the game is over, or if the player has no move or
    /// every move loses by force within the search horizon; in the latter
    /// cases the engine resigns and the opponent is declared the winner.
    pub fn play_engine(&mut self) -> Option<Move> {
        if self.is_over() {
            return None;
        }
        let depth = self.search_depth();
        let player = self.to_move;
        match search_root(player, &mut self.board, depth, NEG_INFINITY, POS_INFINITY) {
            Some(mv) => {
                self.commit(mv);
                Some(mv)
            }
            None => {
                self.finish(player.opponent());
                None
            }
        }
    }

    /// End the game if the player to move cannot move. Returns whether the
    /// game is over.
    pub fn declare_if_stuck(&mut self) -> bool {
        if !self.is_over() && self.legal_moves().is_empty() {
            self.finish(self.to_move.opponent());
        }
        self.is_over()
    }

    /// The player to move resigns.
    pub fn surrender(&mut self) {
        if !self.is_over() {
            info!("{} resigns", self.to_move);
            self.finish(self.to_move.opponent());
        }
    }

    /// Start a new game with the same settings.
    pub fn reset(&mut self) {
        self.board.reset();
        self.to_move = Player::First;
        self.moves_played = INITIAL_MOVES;
        self.winner = None;
    }

    fn commit(&mut self, mv: Move) {
        info!("{} moves to {mv}", self.to_move);
        self.board.apply_move(self.to_move, mv);
        self.moves_played += 1;
        self.to_move = self.to_move.opponent();
    }

    fn finish(&mut self, winner: Player) {
        info!("{winner} wins after {} moves", self.moves_played);
        self.winner = Some(winner);
    }
}
