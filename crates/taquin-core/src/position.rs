//! Board coordinates.

use std::fmt::{self, Display};

/// A cell coordinate on a square board.
///
/// Rows and columns are zero-based, with `(0, 0)` in the top-left corner and
/// rows growing downward. A position carries no board side of its own;
/// operations that need bounds take the side as a parameter.
///
/// # Examples
///
/// ```
/// use taquin_core::Position;
///
/// let pos = Position::new(1, 2);
/// assert_eq!(pos.row(), 1);
/// assert_eq!(pos.col(), 2);
/// assert_eq!(pos.to_index(4), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position from a row and a column.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the zero-based row.
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the zero-based column.
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Returns the row-major cell index of this position on a side-`side`
    /// board (`row * side + col`).
    ///
    /// The position is assumed to lie on the board; no bounds check is
    /// performed here.
    #[must_use]
    pub const fn to_index(self, side: usize) -> usize {
        self.row * side + self.col
    }

    /// Returns the position of the row-major cell index `index` on a
    /// side-`side` board.
    #[must_use]
    pub const fn from_index(index: usize, side: usize) -> Self {
        Self::new(index / side, index % side)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        let side = 5;
        for index in 0..side * side {
            let pos = Position::from_index(index, side);
            assert_eq!(pos.to_index(side), index);
        }

        assert_eq!(Position::new(0, 0).to_index(3), 0);
        assert_eq!(Position::new(1, 0).to_index(3), 3);
        assert_eq!(Position::new(2, 2).to_index(3), 8);
        assert_eq!(Position::from_index(5, 3), Position::new(1, 2));
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(2, 7).to_string(), "(2, 7)");
    }
}
