//! Move application and legal-move enumeration.

use crate::{direction::Direction, position::Position, state::PuzzleState};

/// The requested move would push the blank off the board.
///
/// Callers exploring successors should treat this as an expected, common
/// outcome: it is how unavailable directions announce themselves. A rejected
/// move never touches the state it was requested on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("the blank at {blank} cannot move {direction}")]
pub struct IllegalMove {
    /// The rejected direction.
    pub direction: Direction,
    /// Where the blank sat when the move was rejected.
    pub blank: Position,
}

impl PuzzleState {
    /// Applies a move in place: the blank swaps with the adjacent tile, the
    /// blank tracking follows, and the move counter grows by one.
    ///
    /// Legality is checked before anything is touched, so a failed call
    /// leaves the state bit-for-bit unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove`] when the step would leave the board.
    ///
    /// # Examples
    ///
    /// ```
    /// use taquin_core::{Direction, PuzzleState};
    ///
    /// let mut state = PuzzleState::solved(3)?;
    /// state.apply(Direction::Up).unwrap();
    /// assert_eq!(state.move_count(), 1);
    ///
    /// // The blank starts in the bottom-right corner: down is unavailable.
    /// let mut corner = PuzzleState::solved(3)?;
    /// assert!(corner.apply(Direction::Down).is_err());
    /// assert_eq!(corner.move_count(), 0);
    /// # Ok::<(), taquin_core::StateError>(())
    /// ```
    pub fn apply(&mut self, direction: Direction) -> Result<(), IllegalMove> {
        let target = self.target_of(direction)?;
        self.slide_blank_to(target);
        Ok(())
    }

    /// Applies a move to a copy, leaving the receiver untouched.
    ///
    /// This is the branching path a search uses: every candidate successor
    /// is an independent value, at the price of one full board copy.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove`] when the step would leave the board; nothing
    /// is copied in that case.
    pub fn moved(&self, direction: Direction) -> Result<Self, IllegalMove> {
        let target = self.target_of(direction)?;
        let mut next = self.clone();
        next.slide_blank_to(target);
        Ok(next)
    }

    /// Checks whether the blank can travel the given direction.
    #[must_use]
    pub fn can_move(&self, direction: Direction) -> bool {
        direction.step(self.blank(), self.side()).is_some()
    }

    /// Returns the directions the blank can travel, in [`Direction::ALL`]
    /// order.
    ///
    /// For callers that want to prune before paying for successor copies.
    #[must_use]
    pub fn legal_directions(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|direction| self.can_move(*direction))
            .collect()
    }

    /// Returns every reachable successor state, in up, down, left, right
    /// order.
    ///
    /// Each successor is an independent copy with its move counter already
    /// advanced. Boundary directions are skipped by checking the blank's
    /// coordinates directly, not by attempting and discarding moves.
    ///
    /// A corner blank yields 2 successors, an edge blank 3, an interior
    /// blank 4; a side-1 board yields none.
    ///
    /// # Examples
    ///
    /// ```
    /// use taquin_core::PuzzleState;
    ///
    /// // The solved board keeps its blank in a corner.
    /// let state = PuzzleState::solved(4)?;
    /// assert_eq!(state.legal_moves().len(), 2);
    /// # Ok::<(), taquin_core::StateError>(())
    /// ```
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Self> {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| {
                let target = direction.step(self.blank(), self.side())?;
                let mut next = self.clone();
                next.slide_blank_to(target);
                Some(next)
            })
            .collect()
    }

    fn target_of(&self, direction: Direction) -> Result<Position, IllegalMove> {
        direction
            .step(self.blank(), self.side())
            .ok_or(IllegalMove {
                direction,
                blank: self.blank(),
            })
    }
}
