//! Clue directions.

use serde::{Deserialize, Serialize};

/// The orientation of a clue's answer within the grid.
///
/// `Across` answers are read left to right along a row, `Down` answers top to
/// bottom along a column. The ordering (`Across < Down`) is the canonical clue
/// ordering used for iteration, focus defaults and event delivery.
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
    derive_more::IsVariant,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left to right along a row.
    #[display("across")]
    Across,
    /// Top to bottom along a column.
    #[display("down")]
    Down,
}

impl Direction {
    /// Both directions, in canonical order.
    pub const ALL: [Self; 2] = [Self::Across, Self::Down];

    /// Returns the perpendicular direction.
    #[must_use]
    #[inline]
    pub const fn other(self) -> Self {
        match self {
            Self::Across => Self::Down,
            Self::Down => Self::Across,
        }
    }

    /// Returns the direction whose axis a movement follows.
    ///
    /// Only single-axis movements have an axis; a diagonal or zero movement
    /// returns `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use crossword_core::Direction;
    ///
    /// assert_eq!(Direction::from_delta(0, -1), Some(Direction::Across));
    /// assert_eq!(Direction::from_delta(2, 0), Some(Direction::Down));
    /// assert_eq!(Direction::from_delta(1, 1), None);
    /// ```
    #[must_use]
    pub const fn from_delta(row_delta: isize, col_delta: isize) -> Option<Self> {
        match (row_delta, col_delta) {
            (0, 0) => None,
            (0, _) => Some(Self::Across),
            (_, 0) => Some(Self::Down),
            _ => None,
        }
    }
}
