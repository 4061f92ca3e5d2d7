//! Legal move generation.
//!
//! A pawn slides along any of the eight compass rays and may stop on any
//! empty cell before the first occupied cell or the edge of the board.
//! Occupied cells cannot be jumped.
//!
//! [`generate_moves`] feeds the search: it drops moves that are mirror images
//! of an already generated move while the board is symmetric about the main
//! diagonal, then orders the rest so that central cells come first.
//! [`count_moves`] is the raw mobility used by the evaluator.

use crate::board::{Board, Player};
use crate::position::{Direction, Move, Position};

/// Empty cells reachable from `position` along `dir`, nearest first.
pub fn ray(position: Position, board: &Board, dir: Direction) -> impl Iterator<Item = Position> + '_ {
    ray_within(position, board, dir, 0, board.size() - 1)
}

fn ray_within(
    position: Position,
    board: &Board,
    dir: Direction,
    low: usize,
    high: usize,
) -> impl Iterator<Item = Position> + '_ {
    let inside = move |p: &Position| (low..=high).contains(&p.row) && (low..=high).contains(&p.col);
    (1..)
        .map_while(move |distance| position.step(dir, distance, board.size()))
        .take_while(inside)
        .take_while(move |&p| !board.is_occupied(p))
}

/// Ordering penalty for a destination; lower is better.
///
/// Each coordinate on the outer ring (`0` or `N-1`) costs 2 and each one on
/// the next ring in (`1` or `N-2`) costs 1.
pub fn positional_penalty(pos: Position, size: usize) -> u32 {
    let last = size - 1;
    let penalty = |x: usize| {
        let mut p = 0;
        if x == 0 || x == last {
            p += 2;
        }
        if x == 1 || x + 2 == size {
            p += 1;
        }
        p
    };
    penalty(pos.row) + penalty(pos.col)
}

/// All moves for a pawn at `position`, restricted to rows and columns in
/// `low..=high`, with diagonal-mirror duplicates removed and sorted by
/// [`positional_penalty`].
///
/// A move whose mirror `(col, row)` was already generated is kept only when
/// the board is not symmetric about the main diagonal. The sort is stable,
/// so moves with equal penalty keep their ray order (N, NE, E, SE, S, SW,
/// W, NW; nearest first within a ray).
pub fn generate_moves(position: Position, board: &Board, low: usize, high: usize) -> Vec<Move> {
    let mut moves: Vec<Move> = Vec::with_capacity(4 * board.size());
    let mut symmetric = None;

    for dir in Direction::ALL {
        for candidate in ray_within(position, board, dir, low, high) {
            if moves.contains(&candidate.mirror())
                && *symmetric.get_or_insert_with(|| board.is_symmetric())
            {
                continue;
            }
            moves.push(candidate);
        }
    }

    moves.sort_by_key(|&m| positional_penalty(m, board.size()));
    moves
}

/// Moves for `player` over the whole board.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Move> {
    generate_moves(board.current_position(player), board, 0, board.size() - 1)
}

/// Number of cells a pawn at `position` can reach in one move.
pub fn count_moves(position: Position, board: &Board) -> usize {
    Direction::ALL
        .into_iter()
        .map(|dir| ray(position, board, dir).count())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_moves_drop_mirrors() {
        let board = Board::new(8);
        let moves = legal_moves(&board, Player::First);
        // East ray (7) and the diagonal (6); the south ray mirrors the east ray.
        assert_eq!(moves.len(), 13);
        assert!(moves.iter().all(|m| m.col >= m.row));

        let moves = legal_moves(&board, Player::Second);
        assert_eq!(moves.len(), 13);
        assert!(moves.iter().all(|m| m.row >= m.col));
    }

    #[test]
    fn test_mirrors_kept_on_asymmetric_board() {
        let mut board = Board::new(8);
        board.apply_move(Player::Second, Position::new(7, 3));
        assert!(!board.is_symmetric());
        let moves = legal_moves(&board, Player::First);
        // East 7, south-east 6, south 7.
        assert_eq!(moves.len(), 20);
        assert_eq!(moves.len(), count_moves(Position::new(0, 0), &board));
    }

    #[test]
    fn test_initial_mobility() {
        let board = Board::new(8);
        assert_eq!(count_moves(board.current_position(Player::First), &board), 20);
        assert_eq!(count_moves(board.current_position(Player::Second), &board), 20);
    }

    #[test]
    fn test_ray_stops_at_first_blocker() {
        let mut board = Board::new(8);
        board.apply_move(Player::Second, Position::new(0, 4));
        let east: Vec<Position> = ray(Position::new(0, 0), &board, Direction::East).collect();
        assert_eq!(
            east,
            vec![Position::new(0, 1), Position::new(0, 2), Position::new(0, 3)]
        );
        let moves = legal_moves(&board, Player::First);
        assert!(!moves.contains(&Position::new(0, 5)));
        assert!(!moves.contains(&Position::new(0, 4)));
    }

    #[test]
    fn test_moves_sorted_by_penalty() {
        let mut board = Board::new(8);
        board.apply_move(Player::First, Position::new(3, 3));
        let moves = legal_moves(&board, Player::First);
        let penalties: Vec<u32> = moves.iter().map(|&m| positional_penalty(m, 8)).collect();
        assert!(penalties.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(positional_penalty(moves[0], 8), 0);
    }

    #[test]
    fn test_positional_penalty() {
        assert_eq!(positional_penalty(Position::new(0, 0), 8), 4);
        assert_eq!(positional_penalty(Position::new(0, 7), 8), 4);
        assert_eq!(positional_penalty(Position::new(1, 6), 8), 2);
        assert_eq!(positional_penalty(Position::new(0, 3), 8), 2);
        assert_eq!(positional_penalty(Position::new(6, 4), 8), 1);
        assert_eq!(positional_penalty(Position::new(3, 4), 8), 0);
        // On a 3x3 board the middle row is the second ring from both sides.
        assert_eq!(positional_penalty(Position::new(1, 1), 3), 2);
    }

    #[test]
    fn test_bounds_restrict_rays() {
        let board = Board::new(8);
        let moves = generate_moves(Position::new(0, 0), &board, 0, 3);
        assert!(moves.iter().all(|m| m.row <= 3 && m.col <= 3));
        // East (3) and south-east (3); south mirrors east.
        assert_eq!(moves.len(), 6);
    }

    #[test]
    fn test_enclosed_pawn_has_no_moves() {
        let mut board = Board::new(3);
        for dest in [(1, 1), (1, 0), (0, 1)] {
            board.apply_move(Player::Second, dest.into());
        }
        assert!(legal_moves(&board, Player::First).is_empty());
        assert_eq!(count_moves(board.current_position(Player::First), &board), 0);
        assert!(!legal_moves(&board, Player::Second).is_empty());
    }
}
