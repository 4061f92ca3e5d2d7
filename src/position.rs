//! Board coordinates and compass directions.
//!
//! A [`Position`] is a `(row, col)` pair with row 0 at the top of the board.
//! Moves are plain destination positions; the moving player is always known
//! from context.

use std::fmt;

/// A cell on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// A move is the destination cell of the pawn.
pub type Move = Position;

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Reflection about the main diagonal.
    #[inline]
    pub const fn mirror(self) -> Self {
        Self {
            row: self.col,
            col: self.row,
        }
    }

    /// Step `distance` cells in `dir`, or `None` if that leaves `0..size`.
    #[inline]
    pub fn step(self, dir: Direction, distance: usize, size: usize) -> Option<Position> {
        let (dr, dc) = dir.delta();
        let row = self.row as isize + dr * distance as isize;
        let col = self.col as isize + dc * distance as isize;
        if row < 0 || col < 0 || row >= size as isize || col >= size as isize {
            return None;
        }
        Some(Position::new(row as usize, col as usize))
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Position::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The eight rays a pawn can travel along.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All directions, in move-generation order.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// `(row, col)` offset of one step.
    #[inline]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// The ray leading from `from` to `to`, with the number of steps.
    ///
    /// Returns `None` when the two cells coincide or do not share a rank,
    /// file or diagonal.
    pub fn between(from: Position, to: Position) -> Option<(Direction, usize)> {
        let dr = to.row as isize - from.row as isize;
        let dc = to.col as isize - from.col as isize;
        if (dr, dc) == (0, 0) || (dr != 0 && dc != 0 && dr.abs() != dc.abs()) {
            return None;
        }
        let unit = (dr.signum(), dc.signum());
        let dir = Direction::ALL.into_iter().find(|d| d.delta() == unit)?;
        Some((dir, dr.unsigned_abs().max(dc.unsigned_abs())))
    }

    /// Compass abbreviation, used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::NorthEast => "NE",
            Direction::East => "E",
            Direction::SouthEast => "SE",
            Direction::South => "S",
            Direction::SouthWest => "SW",
            Direction::West => "W",
            Direction::NorthWest => "NW",
        }
    }
}

/// Parse a coordinate such as `"3 4"`, `"3,4"` or `"(3, 4)"`.
///
/// Bounds are not checked here; that is the board's job.
pub fn parse_coord(s: &str) -> Option<Position> {
    let inner = s.trim().trim_start_matches('(').trim_end_matches(')');
    let mut parts = inner
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Position::new(row, col))
}

/// Format a position the way [`parse_coord`] reads it back.
pub fn str_coord(pos: Position) -> String {
    pos.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coord_formats() {
        let expected = Some(Position::new(3, 4));
        assert_eq!(parse_coord("3 4"), expected);
        assert_eq!(parse_coord("3,4"), expected);
        assert_eq!(parse_coord("(3, 4)"), expected);
        assert_eq!(parse_coord("  ( 3 ,4 )  "), expected);
    }

    #[test]
    fn test_parse_coord_rejects_garbage() {
        assert_eq!(parse_coord(""), None);
        assert_eq!(parse_coord("3"), None);
        assert_eq!(parse_coord("a b"), None);
        assert_eq!(parse_coord("1 2 3"), None);
        assert_eq!(parse_coord("-1 -1"), None);
    }

    #[test]
    fn test_str_coord_parses_back() {
        let pos = Position::new(7, 0);
        assert_eq!(str_coord(pos), "(7, 0)");
        assert_eq!(parse_coord(&str_coord(pos)), Some(pos));
    }

    #[test]
    fn test_step_stays_on_board() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.step(Direction::North, 1, 8), None);
        assert_eq!(corner.step(Direction::SouthEast, 7, 8), Some(Position::new(7, 7)));
        assert_eq!(corner.step(Direction::SouthEast, 8, 8), None);
    }

    #[test]
    fn test_direction_between() {
        let from = Position::new(4, 4);
        assert_eq!(
            Direction::between(from, Position::new(1, 4)),
            Some((Direction::North, 3))
        );
        assert_eq!(
            Direction::between(from, Position::new(6, 2)),
            Some((Direction::SouthWest, 2))
        );
        assert_eq!(
            Direction::between(from, Position::new(0, 0)),
            Some((Direction::NorthWest, 4))
        );
        assert_eq!(Direction::between(from, Position::new(5, 6)), None);
        assert_eq!(Direction::between(from, from), None);
    }

    #[test]
    fn test_mirror() {
        assert_eq!(Position::new(1, 6).mirror(), Position::new(6, 1));
        assert_eq!(Position::new(3, 3).mirror(), Position::new(3, 3));
    }
}
