//! Grid coordinates.

use serde::{Deserialize, Serialize};

use crate::Direction;

/// A cell coordinate in the crossword grid.
///
/// Rows grow downwards and columns grow to the right, both starting at zero.
/// Positions order row-major, which is also the reading order of the grid.
///
/// # Example
///
/// ```
/// use crossword_core::{Direction, Position};
///
/// let pos = Position::new(0, 2);
/// assert_eq!(pos.step(Direction::Down, 2), Some(Position::new(2, 2)));
/// assert_eq!(pos.offset(-1, 0), None);
/// assert_eq!(pos.to_string(), "(0, 2)");
/// ```
#[derive(
    Debug,
    Default,
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
#[display("({row}, {col})")]
pub struct Position {
    /// Row index, top row is 0.
    pub row: usize,
    /// Column index, leftmost column is 0.
    pub col: usize,
}

impl Position {
    /// Creates a position from a row and a column.
    #[must_use]
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the position offset by a signed delta.
    ///
    /// Returns `None` if the result would have a negative coordinate or overflow.
    #[must_use]
    pub fn offset(self, row_delta: isize, col_delta: isize) -> Option<Self> {
        Some(Self::new(
            self.row.checked_add_signed(row_delta)?,
            self.col.checked_add_signed(col_delta)?,
        ))
    }

    /// Returns the position `distance` cells further along `direction`.
    #[must_use]
    pub fn step(self, direction: Direction, distance: usize) -> Option<Self> {
        match direction {
            Direction::Across => Some(Self::new(self.row, self.col.checked_add(distance)?)),
            Direction::Down => Some(Self::new(self.row.checked_add(distance)?, self.col)),
        }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}
