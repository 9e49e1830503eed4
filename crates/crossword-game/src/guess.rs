//! Per-cell guess storage and persistence snapshots.

use crossword_core::{CellId, Position, Puzzle};
use serde::{Deserialize, Serialize};

use crate::GuessError;

/// The player's guesses, one optional character per covered cell.
///
/// The store knows nothing about answers beyond cell identity; it is indexed
/// by the [`CellId`]s of the puzzle it was created for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessStore {
    guesses: Vec<Option<char>>,
}

impl GuessStore {
    /// Creates an empty store for `puzzle`.
    #[must_use]
    pub fn new(puzzle: &Puzzle) -> Self {
        Self {
            guesses: vec![None; puzzle.cells().len()],
        }
    }

    /// Creates a store for `puzzle` holding the guesses in `snapshot`.
    ///
    /// Later entries for the same cell overwrite earlier ones.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::NoCellAt`] if an entry targets an uncovered cell;
    /// nothing is restored in that case.
    pub fn restore(puzzle: &Puzzle, snapshot: &GuessSnapshot) -> Result<Self, GuessError> {
        let mut store = Self::new(puzzle);
        for saved in &snapshot.guesses {
            store.set_guess(puzzle, Position::new(saved.row, saved.col), Some(saved.guess))?;
        }
        Ok(store)
    }

    /// Returns the guess in `cell`.
    ///
    /// # Panics
    ///
    /// Panics if `cell` was not produced by the puzzle this store was created for.
    #[must_use]
    pub fn get(&self, cell: CellId) -> Option<char> {
        self.guesses[cell.index()]
    }

    /// Writes (or, with `None`, clears) the guess at `pos`.
    ///
    /// Returns the cell that was written.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::NoCellAt`] if no clue covers `pos`.
    pub fn set_guess(
        &mut self,
        puzzle: &Puzzle,
        pos: Position,
        guess: Option<char>,
    ) -> Result<CellId, GuessError> {
        let cell = puzzle.cell_at(pos).ok_or(GuessError::NoCellAt {
            row: pos.row,
            col: pos.col,
        })?;
        self.set(cell, guess);
        Ok(cell)
    }

    pub(crate) fn set(&mut self, cell: CellId, guess: Option<char>) {
        self.guesses[cell.index()] = guess;
    }

    /// Writes every cell's authored character.
    pub fn fill_all_answers(&mut self, puzzle: &Puzzle) {
        for (guess, cell) in self.guesses.iter_mut().zip(puzzle.cells()) {
            *guess = Some(cell.expected());
        }
    }

    /// Clears every guess.
    pub fn reset(&mut self) {
        self.guesses.fill(None);
    }

    /// Returns the number of cells holding a guess.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.guesses.iter().filter(|guess| guess.is_some()).count()
    }

    /// Returns `true` if no cell holds a guess.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guesses.iter().all(Option::is_none)
    }

    /// Captures the non-empty guesses in row-major order.
    #[must_use]
    pub fn snapshot(&self, puzzle: &Puzzle) -> GuessSnapshot {
        let mut guesses = puzzle
            .cell_ids()
            .filter_map(|cell| {
                let guess = self.get(cell)?;
                let Position { row, col } = puzzle.cell(cell).position();
                Some(SavedGuess { row, col, guess })
            })
            .collect::<Vec<_>>();
        guesses.sort_by_key(|saved| (saved.row, saved.col));
        GuessSnapshot { guesses }
    }
}

/// A serializable copy of a session's guesses.
///
/// Hosts persist this between runs and hand it back when loading the same
/// puzzle to resume play.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessSnapshot {
    /// The saved guesses.
    pub guesses: Vec<SavedGuess>,
}

/// One saved guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGuess {
    /// Row of the cell.
    pub row: usize,
    /// Column of the cell.
    pub col: usize,
    /// The guessed character.
    pub guess: char,
}
