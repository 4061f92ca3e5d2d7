//! Depth-limited negamax search with alpha-beta pruning.
//!
//! The search works on a single board that it mutates in place: each move is
//! applied through [`Board::scoped_move`] and taken back when the guard goes
//! out of scope, so the caller sees the board unchanged afterwards.
//!
//! Scores are fail-hard: a node never returns a value outside its
//! `[alpha, beta]` window. There is no terminal check before the depth runs
//! out; a side without moves simply returns `alpha` at inner nodes and is
//! scored as lost by [`evaluate`] at the leaves.

use log::debug;

use crate::board::{Board, Player};
use crate::eval::evaluate;
use crate::movegen::generate_moves;
use crate::position::Move;

/// Search score, relative to the player to move.
pub type Score = f64;

/// Score of a lost position; also the initial `alpha` at the root.
pub const NEG_INFINITY: Score = -10_000.0;

/// Score of a won position; also the initial `beta` at the root.
pub const POS_INFINITY: Score = 10_000.0;

/// Outcome of a root search.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SearchResult {
    /// `None` when no move improved the initial `alpha`. Starting from
    /// [`NEG_INFINITY`] that happens when the player to move has no legal
    /// move, or when every move is a forced loss.
    pub best_move: Option<Move>,
    /// Final `alpha`.
    pub score: Score,
    /// Nodes visited, root included.
    pub nodes: u64,
}

/// Negamax value of the position for `player`.
///
/// With `depth > 0` the result is clamped to `[alpha, beta]`. At `depth == 0`
/// it is the raw [`evaluate`] score, whatever the window.
pub fn search(player: Player, board: &mut Board, depth: u32, alpha: Score, beta: Score) -> Score {
    let mut nodes = 0;
    negamax(player, board, depth, alpha, beta, &mut nodes)
}

fn negamax(
    player: Player,
    board: &mut Board,
    depth: u32,
    mut alpha: Score,
    beta: Score,
    nodes: &mut u64,
) -> Score {
    *nodes += 1;

    if depth == 0 {
        return evaluate(player, board);
    }

    let last = board.size() - 1;
    let moves = generate_moves(board.current_position(player), board, 0, last);
    for mv in moves {
        let score = {
            let mut child = board.scoped_move(player, mv);
            -negamax(player.opponent(), &mut child, depth - 1, -beta, -alpha, nodes)
        };
        if score >= beta {
            return beta;
        }
        if score > alpha {
            alpha = score;
        }
    }
    alpha
}

/// Best move for `player`, or `None` if no move beats `alpha`.
///
/// # Panics
/// If `depth` is zero.
pub fn search_root(
    player: Player,
    board: &mut Board,
    depth: u32,
    alpha: Score,
    beta: Score,
) -> Option<Move> {
    search_root_with_stats(player, board, depth, alpha, beta).best_move
}

/// [`search_root`] that also reports the score and node count.
///
/// Ties keep the earliest move in generation order. The loop stops as soon
/// as a move reaches `beta`.
///
/// # Panics
/// If `depth` is zero.
pub fn search_root_with_stats(
    player: Player,
    board: &mut Board,
    depth: u32,
    mut alpha: Score,
    beta: Score,
) -> SearchResult {
    assert!(depth > 0, "root search needs at least one ply");

    let mut nodes = 1;
    let mut best_move = None;
    let last = board.size() - 1;
    let moves = generate_moves(board.current_position(player), board, 0, last);

    for mv in moves {
        let score = {
            let mut child = board.scoped_move(player, mv);
            -negamax(player.opponent(), &mut child, depth - 1, -beta, -alpha, &mut nodes)
        };
        if score > alpha {
            alpha = score;
            best_move = Some(mv);
        }
        if score >= beta {
            break;
        }
    }

    match best_move {
        Some(mv) => debug!("{player}: depth {depth} best {mv} score {alpha:.2} ({nodes} nodes)"),
        None => debug!("{player}: depth {depth} no move ({nodes} nodes)"),
    }

    SearchResult {
        best_move,
        score: alpha,
        nodes,
    }
}
