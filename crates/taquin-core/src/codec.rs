//! The line encoding and the diagnostic display.
//!
//! A puzzle travels between processes as a single whitespace-delimited line:
//! the move counter first, then every tile value in row-major order,
//! `side * side + 1` tokens in total. The encoding is the only wire format;
//! [`Display`] is a human-readable dump for diagnostics and logs.
//!
//! # Examples
//!
//! ```
//! use taquin_core::PuzzleState;
//!
//! let state: PuzzleState = "0 1 2 3 0".parse()?;
//! assert_eq!(state.side(), 2);
//! assert_eq!(state.to_line(), "0 1 2 3 0");
//! # Ok::<(), taquin_core::ParseLineError>(())
//! ```

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{
    board::{Board, MAX_SIDE},
    position::Position,
    state::PuzzleState,
};

/// Failures while decoding a puzzle line.
///
/// The parser performs no partial recovery: the first structural or semantic
/// problem aborts the decode and nothing is produced.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseLineError {
    /// The line carries no tokens at all.
    #[display("line is empty")]
    Empty,
    /// The leading move-count token is not an integer.
    #[display("move count {token:?} is not an integer")]
    MoveCount {
        /// The offending token.
        token: String,
    },
    /// The number of cell tokens is not a non-zero perfect square.
    #[display("{count} cell values do not form a square board")]
    NonSquareCellCount {
        /// How many cell tokens the line carried.
        count: usize,
    },
    /// The board implied by the token count is larger than supported.
    #[display("board side {side} exceeds the supported maximum {MAX_SIDE}")]
    SideTooLarge {
        /// The implied side.
        side: usize,
    },
    /// A cell token is not a non-negative integer.
    #[display("cell value {token:?} is not a non-negative integer")]
    CellValue {
        /// The offending token.
        token: String,
    },
    /// A cell value falls outside the board's value range.
    #[display("cell value {value} is outside 0..{limit}")]
    CellOutOfRange {
        /// The rejected value.
        value: u32,
        /// One past the largest legal tile value (`side * side`).
        limit: usize,
    },
    /// The same cell value appeared twice.
    #[display("duplicate cell value {value}")]
    DuplicateCell {
        /// The repeated value.
        value: u16,
    },
}

/// Returns the side of a square board with `count` cells, if there is one.
fn board_side(count: usize) -> Option<usize> {
    let mut side = 1;
    while side * side < count {
        side += 1;
    }
    (count > 0 && side * side == count).then_some(side)
}

impl PuzzleState {
    /// Encodes the state as its line representation.
    ///
    /// The move counter comes first, then every tile value in row-major
    /// order, all single-space separated. Feeding the result back through
    /// [`str::parse`] reproduces the state exactly, configuration and move
    /// counter both.
    ///
    /// # Examples
    ///
    /// ```
    /// use taquin_core::PuzzleState;
    ///
    /// let state = PuzzleState::solved(2)?;
    /// assert_eq!(state.to_line(), "0 1 2 3 0");
    /// # Ok::<(), taquin_core::StateError>(())
    /// ```
    #[must_use]
    pub fn to_line(&self) -> String {
        let cells = self
            .cells()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        format!("{} {cells}", self.move_count())
    }
}

impl FromStr for PuzzleState {
    type Err = ParseLineError;

    /// Decodes a puzzle from its line representation.
    ///
    /// Tokens are split on whitespace. The first token is the move counter
    /// (any integer, including negative history markers); the rest must be
    /// a permutation of `0..side * side` for the side implied by their
    /// count.
    #[allow(clippy::cast_possible_truncation)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let first = tokens.next().ok_or(ParseLineError::Empty)?;
        let move_count: i32 = first.parse().map_err(|_| ParseLineError::MoveCount {
            token: first.to_owned(),
        })?;

        let cells: Vec<&str> = tokens.collect();
        let side = board_side(cells.len()).ok_or(ParseLineError::NonSquareCellCount {
            count: cells.len(),
        })?;
        if side > MAX_SIDE {
            return Err(ParseLineError::SideTooLarge { side });
        }

        let limit = side * side;
        let mut board = Board::zeroed(side);
        let mut seen = vec![false; limit];
        let mut blank = None;
        for (index, token) in cells.iter().enumerate() {
            let wide: u32 = token.parse().map_err(|_| ParseLineError::CellValue {
                token: (*token).to_owned(),
            })?;
            if wide as usize >= limit {
                return Err(ParseLineError::CellOutOfRange { value: wide, limit });
            }
            let value = wide as u16;
            if seen[usize::from(value)] {
                return Err(ParseLineError::DuplicateCell { value });
            }
            seen[usize::from(value)] = true;
            board.set(index, value);
            if value == 0 {
                blank = Some(Position::from_index(index, side));
            }
        }

        // side * side distinct in-range values always include the 0.
        let blank = blank.expect("a complete permutation contains the blank");
        Ok(Self::from_parts(side, board, blank, move_count))
    }
}

impl Display for PuzzleState {
    /// Formats the state as a move-counter header plus width-aligned board
    /// rows. Deterministic and complete, but not a wire format; use
    /// [`PuzzleState::to_line`] for persistence.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "moves: {}", self.move_count())?;
        let width = (self.side() * self.side() - 1).to_string().len();
        for (index, value) in self.cells().enumerate() {
            let col = index % self.side();
            if col > 0 {
                write!(f, " ")?;
            }
            write!(f, "{value:>width$}")?;
            if col + 1 == self.side() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::position::Position;

    /// States reachable from a solved board by a short legal-move walk.
    fn walked_state() -> impl Strategy<Value = PuzzleState> {
        (1usize..=5, proptest::collection::vec(0usize..4, 0..40)).prop_map(|(side, picks)| {
            let mut state = PuzzleState::solved(side).expect("walk sides are supported");
            for pick in picks {
                let directions = state.legal_directions();
                if directions.is_empty() {
                    break;
                }
                let direction = directions[pick % directions.len()];
                state
                    .apply(direction)
                    .expect("legal_directions returned it");
            }
            state
        })
    }

    #[test]
    fn test_parse_solved_side_two() {
        let state: PuzzleState = "0 1 2 3 0".parse().unwrap();
        assert_eq!(state.side(), 2);
        assert_eq!(state.blank(), Position::new(1, 1));
        assert_eq!(state.move_count(), 0);
        assert!(state.is_solved());
    }

    #[test]
    fn test_round_trip_preserves_move_count() {
        let solved = PuzzleState::solved(3).unwrap();
        let reparsed: PuzzleState = solved.to_line().parse().unwrap();
        assert_eq!(reparsed, solved);
        assert_eq!(reparsed.move_count(), solved.move_count());

        let marked: PuzzleState = "-4 1 2 3 0".parse().unwrap();
        assert_eq!(marked.move_count(), -4);
        assert_eq!(marked.to_line(), "-4 1 2 3 0");
    }

    #[test]
    fn test_parse_side_one() {
        let state: PuzzleState = "0 0".parse().unwrap();
        assert_eq!(state.side(), 1);
        assert!(state.is_solved());
        assert_eq!(state.blank(), Position::new(0, 0));
    }

    #[test]
    fn test_parse_accepts_arbitrary_whitespace() {
        let state: PuzzleState = "  3\t1 2\n3 0 ".parse().unwrap();
        assert_eq!(state.move_count(), 3);
        assert_eq!(state.to_line(), "3 1 2 3 0");
    }

    #[test]
    fn test_parse_rejects_duplicates() {
        let err = "0 1 1 2 0".parse::<PuzzleState>().unwrap_err();
        assert_eq!(err, ParseLineError::DuplicateCell { value: 1 });
    }

    #[test]
    fn test_parse_rejects_structure() {
        assert_eq!("".parse::<PuzzleState>().unwrap_err(), ParseLineError::Empty);
        assert_eq!(
            "x 1 2 3 0".parse::<PuzzleState>().unwrap_err(),
            ParseLineError::MoveCount {
                token: "x".to_owned()
            }
        );
        assert_eq!(
            "0 1 2 3".parse::<PuzzleState>().unwrap_err(),
            ParseLineError::NonSquareCellCount { count: 3 }
        );
        assert_eq!(
            "5".parse::<PuzzleState>().unwrap_err(),
            ParseLineError::NonSquareCellCount { count: 0 }
        );
    }

    #[test]
    fn test_parse_rejects_bad_cells() {
        assert_eq!(
            "0 1 2 3 x".parse::<PuzzleState>().unwrap_err(),
            ParseLineError::CellValue {
                token: "x".to_owned()
            }
        );
        assert_eq!(
            "0 1 2 3 -1".parse::<PuzzleState>().unwrap_err(),
            ParseLineError::CellValue {
                token: "-1".to_owned()
            }
        );
        assert_eq!(
            "0 1 2 3 9".parse::<PuzzleState>().unwrap_err(),
            ParseLineError::CellOutOfRange { value: 9, limit: 4 }
        );
    }

    #[test]
    fn test_board_side() {
        assert_eq!(board_side(1), Some(1));
        assert_eq!(board_side(4), Some(2));
        assert_eq!(board_side(9), Some(3));
        assert_eq!(board_side(16), Some(4));
        assert_eq!(board_side(0), None);
        assert_eq!(board_side(5), None);
        assert_eq!(board_side(10), None);
    }

    #[test]
    fn test_display_layout() {
        let state = PuzzleState::solved(2).unwrap();
        assert_eq!(state.to_string(), "moves: 0\n1 2\n3 0\n");

        // Double-digit tiles are width-aligned.
        let wide = PuzzleState::solved(4).unwrap();
        let rendered = wide.to_string();
        assert!(rendered.starts_with("moves: 0\n 1  2  3  4\n"));
        assert!(rendered.ends_with("13 14 15  0\n"));
    }

    proptest! {
        #[test]
        fn prop_line_round_trips(state in walked_state()) {
            let reparsed: PuzzleState = state.to_line().parse().unwrap();
            prop_assert_eq!(&reparsed, &state);
            prop_assert_eq!(reparsed.move_count(), state.move_count());
            prop_assert_eq!(reparsed.blank(), state.blank());
        }

        #[test]
        fn prop_line_has_expected_token_count(state in walked_state()) {
            let line = state.to_line();
            let tokens = line.split_whitespace().count();
            prop_assert_eq!(tokens, state.side() * state.side() + 1);
        }
    }
}
