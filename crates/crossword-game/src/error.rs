use crossword_core::ClueId;

/// Errors returned when writing a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GuessError {
    /// No clue covers the targeted cell.
    #[display("no cell at ({row}, {col})")]
    NoCellAt {
        /// Targeted row.
        row: usize,
        /// Targeted column.
        col: usize,
    },
}

/// Errors returned by session operations.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::IsVariant,
)]
pub enum GameError {
    /// The targeted cell is not covered by any clue.
    #[display("{_0}")]
    Guess(GuessError),
    /// The clue does not exist in the puzzle.
    #[display("unknown clue {clue}")]
    #[from(ignore)]
    UnknownClue {
        /// The requested identity.
        clue: ClueId,
    },
}
