//! Board state with make/unmake.
//!
//! Every cell a pawn has stood on stays blocked for the rest of the game.
//! A visited cell remembers where the pawn came from, so the most recent
//! move of either player can be taken back without keeping a separate
//! history. Undos must happen in the reverse order of the moves.

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::constants::{MAX_SIZE, MIN_SIZE, SYMBOL_EMPTY, SYMBOL_FIRST, SYMBOL_SECOND, SYMBOL_VISITED};
use crate::position::{Move, Position};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    First,
    Second,
}

impl Player {
    #[inline]
    pub const fn opponent(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    #[inline]
    const fn index(self) -> usize {
        match self {
            Player::First => 0,
            Player::Second => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::First => write!(f, "first player ({SYMBOL_FIRST})"),
            Player::Second => write!(f, "second player ({SYMBOL_SECOND})"),
        }
    }
}

/// Contents of one board cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Never visited.
    Empty,
    /// A start corner; there is no earlier position to go back to.
    Origin,
    /// Visited; holds the position the pawn moved here from.
    Trail(Position),
}

impl Cell {
    #[inline]
    pub const fn is_occupied(self) -> bool {
        !matches!(self, Cell::Empty)
    }
}

/// An N×N Isolation board and the two live pawn positions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    pawns: [Position; 2],
}

impl Board {
    /// A fresh board with both start corners occupied.
    ///
    /// # Panics
    /// If `size` is outside `MIN_SIZE..=MAX_SIZE`.
    pub fn new(size: usize) -> Self {
        assert!(size >= MIN_SIZE, "board size must be at least {MIN_SIZE}, got {size}");
        assert!(size <= MAX_SIZE, "board size must be at most {MAX_SIZE}, got {size}");
        let mut board = Self {
            size,
            cells: vec![Cell::Empty; size * size],
            pawns: [Position::new(0, 0), Position::new(size - 1, size - 1)],
        };
        board.reset();
        board
    }

    /// Restore the start layout.
    pub fn reset(&mut self) {
        let last = self.size - 1;
        self.cells.fill(Cell::Empty);
        self.pawns = [Position::new(0, 0), Position::new(last, last)];
        for start in self.pawns {
            let i = self.idx(start);
            self.cells[i] = Cell::Origin;
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn idx(&self, pos: Position) -> usize {
        pos.row * self.size + pos.col
    }

    #[inline]
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Contents of an on-board cell.
    #[inline]
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[self.idx(pos)]
    }

    #[inline]
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.cell(pos).is_occupied()
    }

    #[inline]
    pub fn current_position(&self, player: Player) -> Position {
        self.pawns[player.index()]
    }

    /// Move `player`'s pawn to `dest`.
    ///
    /// # Panics
    /// If `dest` is off the board or already occupied.
    pub fn apply_move(&mut self, player: Player, dest: Move) {
        assert!(self.in_bounds(dest), "move {dest} is off a {0}x{0} board", self.size);
        let i = self.idx(dest);
        assert!(
            !self.cells[i].is_occupied(),
            "move {dest} for {player} onto an occupied cell"
        );
        self.cells[i] = Cell::Trail(self.pawns[player.index()]);
        self.pawns[player.index()] = dest;
    }

    /// Take back the most recent `apply_move(player, dest)`.
    ///
    /// # Panics
    /// If `dest` is not `player`'s current position or was not reached by a
    /// move, which means undos were issued out of order.
    pub fn undo_move(&mut self, player: Player, dest: Move) {
        assert_eq!(
            self.pawns[player.index()],
            dest,
            "undo of {dest} for {player} out of order"
        );
        let i = self.idx(dest);
        let Cell::Trail(previous) = self.cells[i] else {
            panic!("undo of {dest} for {player}: cell holds no previous position");
        };
        self.pawns[player.index()] = previous;
        self.cells[i] = Cell::Empty;
    }

    /// Apply a move that is taken back when the returned guard is dropped.
    pub fn scoped_move(&mut self, player: Player, dest: Move) -> AppliedMove<'_> {
        self.apply_move(player, dest);
        AppliedMove {
            board: self,
            player,
            dest,
        }
    }

    /// Whether every cell equals its reflection about the main diagonal.
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| {
            (i + 1..self.size)
                .all(|j| self.cell(Position::new(i, j)) == self.cell(Position::new(j, i)))
        })
    }

    /// Number of occupied cells, including both pawns.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_occupied()).count()
    }
}

/// A move applied through [`Board::scoped_move`].
///
/// Dereferences to the board; dropping it undoes the move.
pub struct AppliedMove<'a> {
    board: &'a mut Board,
    player: Player,
    dest: Move,
}

impl Deref for AppliedMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for AppliedMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for AppliedMove<'_> {
    fn drop(&mut self) {
        self.board.undo_move(self.player, self.dest);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.size - 1).to_string().len();
        write!(f, "{:width$} ", "")?;
        for col in 0..self.size {
            write!(f, "{col:>width$} ")?;
        }
        writeln!(f)?;
        for row in 0..self.size {
            write!(f, "{row:>width$} ")?;
            for col in 0..self.size {
                let pos = Position::new(row, col);
                let ch = if pos == self.current_position(Player::First) {
                    SYMBOL_FIRST
                } else if pos == self.current_position(Player::Second) {
                    SYMBOL_SECOND
                } else if self.is_occupied(pos) {
                    SYMBOL_VISITED
                } else {
                    SYMBOL_EMPTY
                };
                write!(f, "{ch:>width$} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
