//! Focus and cursor navigation.

use crossword_core::{CellId, Clue, ClueId, Direction, Position, Puzzle};
use serde::{Deserialize, Serialize};

use crate::{GameError, GuessError, GuessStore, WrapPolicy};

/// The navigation state as seen by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusState {
    /// Direction of the current clue.
    pub direction: Direction,
    /// Number of the current clue.
    pub number: u32,
    /// The cursor cell, if one has been chosen.
    pub cell: Option<Position>,
    /// Whether the grid has input focus.
    pub has_focus: bool,
}

impl FocusState {
    /// Returns the identity of the current clue.
    #[must_use]
    pub fn clue(&self) -> ClueId {
        ClueId::new(self.direction, self.number)
    }
}

/// A single-cell cursor movement, as produced by arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MoveDirection {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

impl MoveDirection {
    /// Returns the `(row, col)` delta of this movement.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

/// Cursor state machine.
///
/// Invariant: when a cell is selected, the current clue covers it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Navigation {
    clue: ClueId,
    cell: Option<CellId>,
    has_focus: bool,
}

impl Navigation {
    pub(crate) fn new(puzzle: &Puzzle) -> Self {
        Self {
            clue: puzzle.first_clue().id(),
            cell: None,
            has_focus: false,
        }
    }

    pub(crate) fn state(&self, puzzle: &Puzzle) -> FocusState {
        FocusState {
            direction: self.clue.direction,
            number: self.clue.number,
            cell: self.cell.map(|cell| puzzle.cell(cell).position()),
            has_focus: self.has_focus,
        }
    }

    pub(crate) fn clue(&self) -> ClueId {
        self.clue
    }

    pub(crate) fn cell(&self) -> Option<CellId> {
        self.cell
    }

    pub(crate) fn focus(&mut self, puzzle: &Puzzle) {
        self.has_focus = true;
        if self.cell.is_none() {
            self.enter(puzzle.first_clue());
        }
    }

    pub(crate) fn blur(&mut self) {
        self.has_focus = false;
    }

    pub(crate) fn move_by(&mut self, puzzle: &Puzzle, row_delta: isize, col_delta: isize) -> bool {
        let Some(current) = self.cell else {
            return false;
        };
        let Some(target) = puzzle
            .cell(current)
            .position()
            .offset(row_delta, col_delta)
            .and_then(|pos| puzzle.cell_at(pos))
        else {
            return false;
        };

        let axis = Direction::from_delta(row_delta, col_delta).unwrap_or(self.clue.direction);
        let cell = puzzle.cell(target);
        if let Some(clue) = cell.clue(axis).or_else(|| cell.clue(axis.other())) {
            self.clue = clue;
        }
        self.cell = Some(target);
        log::trace!("cursor moved to {} on {}", cell.position(), self.clue);
        true
    }

    pub(crate) fn select_clue(
        &mut self,
        puzzle: &Puzzle,
        guesses: &GuessStore,
        id: ClueId,
    ) -> Result<(), GameError> {
        let clue = puzzle.clue(id).ok_or(GameError::UnknownClue { clue: id })?;
        let cell = clue
            .cells()
            .iter()
            .copied()
            .find(|&cell| guesses.get(cell).is_none())
            .or_else(|| clue.cells().first().copied());
        self.clue = id;
        self.cell = cell;
        Ok(())
    }

    pub(crate) fn select_cell(&mut self, puzzle: &Puzzle, pos: Position) -> Result<(), GameError> {
        let target = puzzle.cell_at(pos).ok_or(GuessError::NoCellAt {
            row: pos.row,
            col: pos.col,
        })?;
        let cell = puzzle.cell(target);
        let current = self.clue.direction;
        let direction = if self.cell == Some(target) && cell.is_intersection() {
            current.other()
        } else if cell.clue(current).is_some() {
            current
        } else {
            current.other()
        };
        if let Some(clue) = cell.clue(direction) {
            self.clue = clue;
        }
        self.cell = Some(target);
        Ok(())
    }

    pub(crate) fn toggle_direction(&mut self, puzzle: &Puzzle) -> bool {
        let Some(current) = self.cell else {
            return false;
        };
        match puzzle.cell(current).clue(self.clue.direction.other()) {
            Some(clue) => {
                self.clue = clue;
                true
            }
            None => false,
        }
    }

    pub(crate) fn advance(&mut self, puzzle: &Puzzle, wrap: WrapPolicy) -> bool {
        let Some(current) = self.cell else {
            return false;
        };
        let Some(index) = puzzle.clue_index(self.clue) else {
            return false;
        };
        let clue = &puzzle.clues()[index];
        if let Some(&next) = clue
            .offset_of(current)
            .and_then(|offset| clue.cells().get(offset + 1))
        {
            self.cell = Some(next);
            return true;
        }

        let direction = clue.direction();
        let following = puzzle
            .clues()
            .get(index + 1)
            .filter(|next| next.direction() == direction);
        let target = following.or_else(|| match wrap {
            WrapPolicy::Stop => None,
            WrapPolicy::SameDirection => puzzle.clues_in(direction).next(),
            WrapPolicy::OtherDirection => puzzle
                .clues_in(direction.other())
                .next()
                .or_else(|| puzzle.clues_in(direction).next()),
        });
        match target {
            Some(target) => {
                self.enter(target);
                true
            }
            None => false,
        }
    }

    pub(crate) fn retreat(&mut self, puzzle: &Puzzle) -> bool {
        let Some(current) = self.cell else {
            return false;
        };
        let Some(clue) = puzzle.clue(self.clue) else {
            return false;
        };
        let Some(offset) = clue.offset_of(current).filter(|&offset| offset > 0) else {
            return false;
        };
        self.cell = Some(clue.cells()[offset - 1]);
        true
    }

    pub(crate) fn cycle_clue(&mut self, puzzle: &Puzzle, guesses: &GuessStore, forward: bool) {
        let len = puzzle.clues().len();
        let index = puzzle.clue_index(self.clue).unwrap_or(0);
        let next = if forward {
            (index + 1) % len
        } else {
            (index + len - 1) % len
        };
        let id = puzzle.clues()[next].id();
        // `id` comes from the puzzle, so selection cannot fail.
        let _ = self.select_clue(puzzle, guesses, id);
    }

    fn enter(&mut self, clue: &Clue) {
        self.clue = clue.id();
        self.cell = clue.cells().first().copied();
    }
}
