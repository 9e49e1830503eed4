//! Authored clue definitions and their identities.

use serde::{Deserialize, Serialize};

use crate::{Direction, Position};

/// The stable external identity of a clue: its direction and number.
///
/// Clue numbers are unique within a direction but not across directions, so
/// `1-across` and `1-down` are distinct clues. Identities order by direction
/// first (across before down), then by number.
///
/// # Example
///
/// ```
/// use crossword_core::{ClueId, Direction};
///
/// let id = ClueId::new(Direction::Down, 2);
/// assert_eq!(id.to_string(), "2-down");
/// assert!(ClueId::new(Direction::Across, 9) < id);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::Display,
    Serialize,
    Deserialize,
)]
#[display("{number}-{direction}")]
pub struct ClueId {
    /// Direction of the answer.
    pub direction: Direction,
    /// Clue number within the direction.
    pub number: u32,
}

impl ClueId {
    /// Creates a clue identity.
    #[must_use]
    #[inline]
    pub const fn new(direction: Direction, number: u32) -> Self {
        Self { direction, number }
    }

    /// Shorthand for an across clue identity.
    #[must_use]
    #[inline]
    pub const fn across(number: u32) -> Self {
        Self::new(Direction::Across, number)
    }

    /// Shorthand for a down clue identity.
    #[must_use]
    #[inline]
    pub const fn down(number: u32) -> Self {
        Self::new(Direction::Down, number)
    }
}

/// An authored clue, as supplied by the puzzle data.
///
/// Definitions are plain data; nothing is validated until they are compiled
/// into a [`Puzzle`](crate::Puzzle).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueDefinition {
    /// Direction of the answer.
    pub direction: Direction,
    /// Clue number within the direction.
    pub number: u32,
    /// Clue text shown to the player.
    pub clue: String,
    /// Answer, one grid cell per character.
    pub answer: String,
    /// Row of the first answer character.
    pub row: usize,
    /// Column of the first answer character.
    pub col: usize,
}

impl ClueDefinition {
    /// Creates a clue definition.
    #[must_use]
    pub fn new(
        direction: Direction,
        number: u32,
        clue: impl Into<String>,
        answer: impl Into<String>,
        row: usize,
        col: usize,
    ) -> Self {
        Self {
            direction,
            number,
            clue: clue.into(),
            answer: answer.into(),
            row,
            col,
        }
    }

    /// Creates an across clue definition.
    #[must_use]
    pub fn across(
        number: u32,
        clue: impl Into<String>,
        answer: impl Into<String>,
        row: usize,
        col: usize,
    ) -> Self {
        Self::new(Direction::Across, number, clue, answer, row, col)
    }

    /// Creates a down clue definition.
    #[must_use]
    pub fn down(
        number: u32,
        clue: impl Into<String>,
        answer: impl Into<String>,
        row: usize,
        col: usize,
    ) -> Self {
        Self::new(Direction::Down, number, clue, answer, row, col)
    }

    /// Returns the identity of this clue.
    #[must_use]
    pub fn id(&self) -> ClueId {
        ClueId::new(self.direction, self.number)
    }

    /// Returns the position of the first answer character.
    #[must_use]
    pub fn start(&self) -> Position {
        Position::new(self.row, self.col)
    }
}
