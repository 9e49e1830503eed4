//! Core data structures for crossword puzzles.
//!
//! This crate turns authored clue data into an immutable, indexed layout that
//! play sessions operate on. It reconciles the two ways a crossword is
//! addressed: clue identities (`(direction, number)`) and grid coordinates
//! (`(row, col)`).
//!
//! # Overview
//!
//! - [`input`]: the host-facing puzzle data ([`PuzzleData`]), deserializable
//!   with serde.
//! - [`clue`]: authored [`ClueDefinition`]s and their [`ClueId`]s.
//! - [`direction`] and [`position`]: the two addressing schemes.
//! - [`alphabet`]: the character comparison policy shared by layout
//!   validation and guess checking.
//! - [`layout`]: the [`Puzzle`] layout builder, with cells stored in an arena
//!   and clues holding ordered [`CellId`]s into it.
//!
//! # Examples
//!
//! ```
//! use crossword_core::{Alphabet, ClueEntry, ClueId, LayoutError, Puzzle, PuzzleData};
//!
//! let data = PuzzleData::default()
//!     .with_across(1, ClueEntry::new("apple", "AB", 0, 0))
//!     .with_down(2, ClueEntry::new("gorilla", "CC", 0, 1));
//!
//! // 1-across expects 'B' at (0, 1), 2-down expects 'C'.
//! let err = Puzzle::from_data(data, Alphabet::default()).unwrap_err();
//! assert!(matches!(
//!     err,
//!     LayoutError::ConflictingCells { row: 0, col: 1, first, second }
//!         if first == ClueId::across(1) && second == ClueId::down(2)
//! ));
//! ```

pub mod alphabet;
pub mod clue;
pub mod direction;
pub mod input;
pub mod layout;
pub mod position;

pub use self::{
    alphabet::Alphabet,
    clue::{ClueDefinition, ClueId},
    direction::Direction,
    input::{ClueEntry, PuzzleData},
    layout::{Cell, CellId, Clue, LayoutError, Puzzle},
    position::Position,
};
