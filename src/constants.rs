//! Constants for board geometry, search depth, and display.
//!
//! Board size is a runtime value (the engine works on any N×N board with
//! `MIN_SIZE ≤ N ≤ MAX_SIZE`); [`DEFAULT_SIZE`] is what the binary uses
//! unless told otherwise.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN).
pub const DEFAULT_SIZE: usize = 8;

/// Smallest board on which both pawns fit.
pub const MIN_SIZE: usize = 2;

/// Largest supported board. A pawn sees at most `4 * (N - 1)` cells, so the
/// mobility ratio stays below `100 * 4 * 24 = 9600`, under the search
/// sentinels of ±10000.
pub const MAX_SIZE: usize = 25;

/// Moves on the board when a game starts (the two seeded corners).
pub const INITIAL_MOVES: usize = 2;

// =============================================================================
// Search Depth Schedule
// =============================================================================

/// `(moves played so far, depth)` pairs; the first row whose bound is not
/// exceeded gives the depth.
pub const DEPTH_SCHEDULE: [(usize, u32); 5] = [(15, 6), (25, 8), (35, 10), (45, 12), (55, 14)];

/// Depth used once the schedule is exhausted.
pub const LATE_GAME_DEPTH: u32 = 10;

/// Search depth for the engine given the number of moves on the board.
pub fn search_depth(moves_played: usize) -> u32 {
    DEPTH_SCHEDULE
        .iter()
        .find(|&&(bound, _)| moves_played <= bound)
        .map(|&(_, depth)| depth)
        .unwrap_or(LATE_GAME_DEPTH)
}

// =============================================================================
// Display Symbols
// =============================================================================

/// First player's pawn.
pub const SYMBOL_FIRST: char = 'x';

/// Second player's pawn.
pub const SYMBOL_SECOND: char = 'o';

/// A cell some pawn has already visited.
pub const SYMBOL_VISITED: char = '*';

/// A cell nobody has visited.
pub const SYMBOL_EMPTY: char = '-';

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_depth_schedule_boundaries() {
        assert_eq!(search_depth(INITIAL_MOVES), 6);
        assert_eq!(search_depth(15), 6);
        assert_eq!(search_depth(16), 8);
        assert_eq!(search_depth(25), 8);
        assert_eq!(search_depth(26), 10);
        assert_eq!(search_depth(35), 10);
        assert_eq!(search_depth(36), 12);
        assert_eq!(search_depth(45), 12);
        assert_eq!(search_depth(46), 14);
        assert_eq!(search_depth(55), 14);
        assert_eq!(search_depth(56), LATE_GAME_DEPTH);
        assert_eq!(search_depth(64), LATE_GAME_DEPTH);
    }
}
