//! Puzzle state construction, validation, and identity.

use std::hash::{Hash, Hasher};

use crate::{
    board::{Board, MAX_SIDE},
    position::Position,
};

/// Validation failures for state construction and cell access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StateError {
    /// The requested board side is unsupported.
    #[display("board side must be in 1..={MAX_SIDE}, got {side}")]
    InvalidSide {
        /// The rejected side.
        side: usize,
    },
    /// A coordinate lies outside the board.
    #[display("position {position} is outside a side-{side} board")]
    OutOfBounds {
        /// The rejected coordinate.
        position: Position,
        /// The side of the board it was checked against.
        side: usize,
    },
    /// A tile value lies outside the board's value range.
    #[display("tile value {value} is outside 0..{limit}")]
    ValueOutOfRange {
        /// The rejected value.
        value: u16,
        /// One past the largest legal tile value (`side * side`).
        limit: usize,
    },
}

/// The complete state of one sliding-tile board.
///
/// A state holds the board side, every tile value, the cached coordinates of
/// the blank (the cell holding value 0), and the number of moves applied
/// since the state's origin. Values always form a permutation of
/// `0..side * side`; the solved layout counts upward in reading order with
/// the blank in the bottom-right corner.
///
/// A `PuzzleState` owns its cells outright. Cloning produces a fully
/// independent lineage, which is how a search branches: mutate one copy per
/// candidate edge, or use [`moved`](Self::moved) to get the copy and the move
/// in one step.
///
/// # Identity
///
/// Two states are equal when they have the same side and the same tile at
/// every cell. The move counter is history, not identity: states reached by
/// different paths collapse to one entry in a visited set or transposition
/// table. [`Hash`] follows the same rule, feeding only the side and the
/// row-major cell sequence to the hasher, so a given configuration hashes
/// identically no matter how it was reached.
///
/// # Examples
///
/// ```
/// use taquin_core::{Direction, PuzzleState};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let start = PuzzleState::solved(3)?;
/// assert!(start.is_solved());
/// assert_eq!(start.move_count(), 0);
///
/// let next = start.moved(Direction::Left)?;
/// assert!(!next.is_solved());
/// assert_eq!(next.move_count(), 1);
///
/// // Same configuration, different history: still one search node.
/// let back = next.moved(Direction::Right)?;
/// assert_eq!(back, start);
/// assert_eq!(back.move_count(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleState {
    side: usize,
    board: Board,
    blank: Position,
    move_count: i32,
}

impl PuzzleState {
    /// Largest supported board side.
    ///
    /// Tiles are stored as `u16`, so `side * side - 1` must fit one.
    pub const MAX_SIDE: usize = MAX_SIDE;

    /// Creates the solved board for the given side.
    ///
    /// Cells count upward in reading order starting from 1, with the blank
    /// (value 0) in the bottom-right corner. The move counter starts at 0.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::InvalidSide`] unless `1 <= side <= MAX_SIDE`.
    ///
    /// # Examples
    ///
    /// ```
    /// use taquin_core::{Position, PuzzleState};
    ///
    /// let state = PuzzleState::solved(2)?;
    /// assert_eq!(state.value_at(Position::new(0, 0))?, 1);
    /// assert_eq!(state.value_at(Position::new(1, 1))?, 0);
    /// assert_eq!(state.blank(), Position::new(1, 1));
    /// # Ok::<(), taquin_core::StateError>(())
    /// ```
    #[allow(clippy::cast_possible_truncation)]
    pub fn solved(side: usize) -> Result<Self, StateError> {
        if !(1..=MAX_SIDE).contains(&side) {
            return Err(StateError::InvalidSide { side });
        }
        let mut board = Board::zeroed(side);
        for index in 0..side * side - 1 {
            board.set(index, (index + 1) as u16);
        }
        Ok(Self {
            side,
            board,
            blank: Position::new(side - 1, side - 1),
            move_count: 0,
        })
    }

    /// Assembles a state from already-validated parts.
    ///
    /// `board` must hold a permutation of `0..side * side` with the 0 at
    /// `blank`; the line parser is the only caller.
    pub(crate) fn from_parts(side: usize, board: Board, blank: Position, move_count: i32) -> Self {
        Self {
            side,
            board,
            blank,
            move_count,
        }
    }

    /// Returns the board side.
    #[must_use]
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Returns the coordinates of the blank.
    #[must_use]
    pub const fn blank(&self) -> Position {
        self.blank
    }

    /// Returns the number of moves applied since this state's origin.
    ///
    /// Negative values can only enter through the line encoding, where the
    /// counter is a caller-supplied history marker.
    #[must_use]
    pub const fn move_count(&self) -> i32 {
        self.move_count
    }

    /// Overwrites the move counter.
    ///
    /// Useful for external drivers that re-root a state, e.g. when adopting
    /// a parsed board as a fresh search origin. The tile layout is untouched.
    pub fn set_move_count(&mut self, move_count: i32) {
        self.move_count = move_count;
    }

    /// Returns the tile value at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::OutOfBounds`] when the position lies outside
    /// the board.
    pub fn value_at(&self, position: Position) -> Result<u16, StateError> {
        self.check_bounds(position)?;
        Ok(self.board.get(position.to_index(self.side)))
    }

    /// Returns the tile values in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = u16> + '_ {
        (0..self.side * self.side).map(|index| self.board.get(index))
    }

    /// Writes a tile value at the given position.
    ///
    /// This is a low-level primitive: it validates the coordinate and the
    /// value range but deliberately does not enforce that the board stays a
    /// permutation, so a sequence of writes can pass through transient
    /// duplicate states. Callers performing multi-step edits must leave the
    /// board a permutation of `0..side * side` when they finish. Writing a 0
    /// moves the blank tracking to `position`.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::OutOfBounds`] when the position lies outside
    /// the board (checked first), and [`StateError::ValueOutOfRange`] when
    /// `value >= side * side`.
    pub fn set_value(&mut self, position: Position, value: u16) -> Result<(), StateError> {
        self.check_bounds(position)?;
        let limit = self.side * self.side;
        if usize::from(value) >= limit {
            return Err(StateError::ValueOutOfRange { value, limit });
        }
        self.board.set(position.to_index(self.side), value);
        if value == 0 {
            self.blank = position;
        }
        Ok(())
    }

    /// Checks whether every tile sits on its solved cell.
    ///
    /// The solved layout holds `row * side + col + 1` everywhere except the
    /// last cell, which holds the blank.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        let last = self.side * self.side - 1;
        self.cells().enumerate().all(|(index, value)| {
            if index == last {
                value == 0
            } else {
                usize::from(value) == index + 1
            }
        })
    }

    /// Exchanges the tile values at two cells without touching the blank
    /// tracking; callers that move the blank update it themselves.
    pub(crate) fn swap_cells(&mut self, a: Position, b: Position) {
        self.board
            .swap(a.to_index(self.side), b.to_index(self.side));
    }

    /// Slides the blank onto `target`, which must be adjacent and on the
    /// board, and counts the move.
    pub(crate) fn slide_blank_to(&mut self, target: Position) {
        let blank = self.blank;
        self.swap_cells(blank, target);
        self.blank = target;
        self.move_count += 1;
    }

    fn check_bounds(&self, position: Position) -> Result<(), StateError> {
        if position.row() >= self.side || position.col() >= self.side {
            return Err(StateError::OutOfBounds {
                position,
                side: self.side,
            });
        }
        Ok(())
    }
}

impl PartialEq for PuzzleState {
    fn eq(&self, other: &Self) -> bool {
        self.side == other.side && self.board == other.board
    }
}

impl Eq for PuzzleState {}

impl Hash for PuzzleState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.side.hash(state);
        for value in self.cells() {
            value.hash(state);
        }
    }
}
