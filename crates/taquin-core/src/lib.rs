//! Core state representation and move semantics for N×N sliding-tile
//! puzzles (the generalized 15-puzzle family).
//!
//! This crate provides the value type beneath a state-space search: a board
//! you can construct, move, compare, and ship between processes. It contains
//! no search algorithm itself; search engines and frontends are built on
//! top.
//!
//! # Overview
//!
//! The crate is organized around three responsibilities:
//!
//! 1. **State & validation** - [`state`]: the [`PuzzleState`] value type, its
//!    constructors (solved layout, clone, line decode), validated cell
//!    access, and the supporting [`Position`] coordinates.
//! 2. **Moves** - [`moves`] and [`direction`]: the four blank displacements
//!    ([`Direction`]), destructive and copying move application, and
//!    legal-move enumeration for successor generation.
//! 3. **Canonical form & codec** - equality and hashing over the tile layout
//!    only (move history excluded, so configurations reached by different
//!    paths collapse to one search node), plus the round-trippable line
//!    encoding in [`codec`].
//!
//! # Examples
//!
//! ```
//! use taquin_core::{Direction, PuzzleState};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let solved = PuzzleState::solved(4)?;
//! assert!(solved.is_solved());
//!
//! // Branch without touching the original, then undo.
//! let scrambled = solved.moved(Direction::Up)?;
//! assert!(!scrambled.is_solved());
//! assert_eq!(scrambled.moved(Direction::Down)?, solved);
//!
//! // Explore: successors come back in a fixed up, down, left, right order.
//! assert_eq!(scrambled.legal_moves().len(), 3);
//!
//! // Persist: the line encoding round-trips configuration and move count.
//! let line = scrambled.to_line();
//! assert_eq!(line.parse::<PuzzleState>()?, scrambled);
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod direction;
pub mod moves;
pub mod position;
pub mod state;

mod board;

// Re-export commonly used types
pub use self::{
    codec::ParseLineError,
    direction::Direction,
    moves::IllegalMove,
    position::Position,
    state::{PuzzleState, StateError},
};
