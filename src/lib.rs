//! Isolation: a game engine for the two-player pawn game.
//!
//! Each player moves a single pawn any distance along an empty rank, file or
//! diagonal. Cells a pawn has visited stay blocked; the first player who
//! cannot move loses. The engine picks its moves with a depth-limited
//! negamax search with alpha-beta pruning over a mobility-ratio evaluation.
//!
//! ## Modules
//!
//! - [`constants`] - Board defaults and the search depth schedule
//! - [`position`] - Coordinates and compass directions
//! - [`board`] - Board state with make/unmake
//! - [`movegen`] - Move generation, symmetry filtering and ordering
//! - [`eval`] - Mobility-ratio evaluation
//! - [`search`] - Negamax alpha-beta search
//! - [`game`] - Game session: validation, turn order, depth policy
//! - [`terminal`] - Console front end
//!
//! ## Example
//!
//! ```
//! use isolation::board::{Board, Player};
//! use isolation::search::{search_root, NEG_INFINITY, POS_INFINITY};
//!
//! let mut board = Board::new(8);
//! let best = search_root(Player::First, &mut board, 3, NEG_INFINITY, POS_INFINITY);
//! assert!(best.is_some());
//! board.apply_move(Player::First, best.unwrap());
//! ```

pub mod board;
pub mod constants;
pub mod eval;
pub mod game;
pub mod movegen;
pub mod position;
pub mod search;
pub mod terminal;
