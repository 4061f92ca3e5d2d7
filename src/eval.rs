//! Leaf evaluation: the mobility ratio.
//!
//! A position is scored from the point of view of the player to move as
//! `100 * own_mobility / opponent_mobility`. A player to move with no moves
//! has lost, so that check comes before the opponent's; when neither side
//! can move the result is still a loss.

use crate::board::{Board, Player};
use crate::movegen::count_moves;
use crate::search::{NEG_INFINITY, POS_INFINITY, Score};

pub fn evaluate(player_to_move: Player, board: &Board) -> Score {
    let own = count_moves(board.current_position(player_to_move), board);
    if own == 0 {
        return NEG_INFINITY;
    }
    let opp = count_moves(board.current_position(player_to_move.opponent()), board);
    if opp == 0 {
        return POS_INFINITY;
    }
    100.0 * own as Score / opp as Score
}
