//! Compiled puzzle layouts.

use std::collections::{BTreeMap, btree_map::Entry};

use crate::{Alphabet, ClueDefinition, ClueId, Direction, Position, PuzzleData};

/// Index of a cell in a [`Puzzle`]'s cell arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellId(usize);

impl CellId {
    /// Returns the arena index.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A covered grid cell.
///
/// Each cell belongs to at most one clue per direction. The expected character
/// is the one authored by the first clue to reach the cell; every other clue
/// covering it agrees with it under the puzzle's [`Alphabet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    position: Position,
    expected: char,
    across: Option<ClueId>,
    down: Option<ClueId>,
}

impl Cell {
    fn new(position: Position, expected: char) -> Self {
        Self {
            position,
            expected,
            across: None,
            down: None,
        }
    }

    fn attach(
        &mut self,
        clue: ClueId,
        expected: char,
        alphabet: Alphabet,
    ) -> Result<(), LayoutError> {
        let Position { row, col } = self.position;
        if let Some(first) = self.clue(clue.direction) {
            return Err(LayoutError::OverlappingClues {
                row,
                col,
                first,
                second: clue,
            });
        }
        if let Some(first) = self.clue(clue.direction.other()) {
            if !alphabet.matches(self.expected, expected) {
                return Err(LayoutError::ConflictingCells {
                    row,
                    col,
                    first,
                    second: clue,
                });
            }
        }
        match clue.direction {
            Direction::Across => self.across = Some(clue),
            Direction::Down => self.down = Some(clue),
        }
        Ok(())
    }

    /// Returns the position of this cell.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the authored character for this cell.
    #[must_use]
    pub fn expected(&self) -> char {
        self.expected
    }

    /// Returns the clue covering this cell in `direction`, if any.
    #[must_use]
    pub fn clue(&self, direction: Direction) -> Option<ClueId> {
        match direction {
            Direction::Across => self.across,
            Direction::Down => self.down,
        }
    }

    /// Returns the clues covering this cell, across first.
    pub fn clues(&self) -> impl Iterator<Item = ClueId> + '_ {
        self.across.into_iter().chain(self.down)
    }

    /// Returns `true` if an across and a down clue both cover this cell.
    #[must_use]
    pub fn is_intersection(&self) -> bool {
        self.across.is_some() && self.down.is_some()
    }
}

/// A clue resolved against the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clue {
    id: ClueId,
    text: String,
    answer: String,
    cells: Vec<CellId>,
}

impl Clue {
    /// Returns the identity of this clue.
    #[must_use]
    pub fn id(&self) -> ClueId {
        self.id
    }

    /// Returns the direction of this clue.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.id.direction
    }

    /// Returns the number of this clue.
    #[must_use]
    pub fn number(&self) -> u32 {
        self.id.number
    }

    /// Returns the clue text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the authored answer.
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Returns the covered cells in reading order.
    #[must_use]
    pub fn cells(&self) -> &[CellId] {
        &self.cells
    }

    /// Returns the offset of `cell` within this clue's answer.
    #[must_use]
    pub fn offset_of(&self, cell: CellId) -> Option<usize> {
        self.cells.iter().position(|&id| id == cell)
    }
}

/// An immutable crossword layout.
///
/// Built once from clue definitions; owns every covered [`Cell`] in an arena
/// and every resolved [`Clue`], sorted by [`ClueId`]. Guess state is kept
/// elsewhere and refers to cells by [`CellId`].
///
/// # Example
///
/// ```
/// use crossword_core::{Alphabet, ClueDefinition, ClueId, Position, Puzzle};
///
/// let puzzle = Puzzle::build(
///     [
///         ClueDefinition::across(1, "apple", "AB", 0, 0),
///         ClueDefinition::down(2, "gorilla", "BC", 0, 1),
///     ],
///     Alphabet::default(),
/// )?;
///
/// assert_eq!(puzzle.dimensions(), (2, 2));
/// let shared = puzzle.cell_at(Position::new(0, 1)).unwrap();
/// assert!(puzzle.cell(shared).is_intersection());
/// assert_eq!(puzzle.cell(shared).expected(), 'B');
/// assert_eq!(puzzle.clue(ClueId::down(2)).unwrap().cells().len(), 2);
/// # Ok::<(), crossword_core::LayoutError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    alphabet: Alphabet,
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    cell_lookup: BTreeMap<Position, CellId>,
    clues: Vec<Clue>,
}

impl Puzzle {
    /// Compiles clue definitions into a layout.
    ///
    /// Definitions may arrive in any order; they are resolved in [`ClueId`]
    /// order, so when two clues disagree the across clue is reported first.
    ///
    /// # Errors
    ///
    /// - [`LayoutError::NoClues`] if there are no definitions.
    /// - [`LayoutError::InvalidClueNumber`] if a clue is numbered 0.
    /// - [`LayoutError::DuplicateClueNumber`] if a number repeats within a direction.
    /// - [`LayoutError::EmptyAnswer`] if an answer has no characters.
    /// - [`LayoutError::OutOfBounds`] if an answer runs past the addressable grid,
    ///   including a cell in the last addressable row or column.
    /// - [`LayoutError::OverlappingClues`] if two clues of one direction share a cell.
    /// - [`LayoutError::ConflictingCells`] if intersecting answers disagree.
    pub fn build<I>(definitions: I, alphabet: Alphabet) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = ClueDefinition>,
    {
        let mut definitions = definitions.into_iter().collect::<Vec<_>>();
        if definitions.is_empty() {
            return Err(LayoutError::NoClues);
        }
        definitions.sort_by_key(ClueDefinition::id);

        for definition in &definitions {
            if definition.number == 0 {
                return Err(LayoutError::InvalidClueNumber {
                    direction: definition.direction,
                });
            }
        }
        for pair in definitions.windows(2) {
            if pair[0].id() == pair[1].id() {
                return Err(LayoutError::DuplicateClueNumber { clue: pair[0].id() });
            }
        }
        for definition in &definitions {
            if definition.answer.is_empty() {
                return Err(LayoutError::EmptyAnswer {
                    clue: definition.id(),
                });
            }
        }

        let mut cells: Vec<Cell> = Vec::new();
        let mut cell_lookup = BTreeMap::new();
        let (mut rows, mut cols) = (0, 0);
        let mut clues = Vec::with_capacity(definitions.len());
        for definition in definitions {
            let id = definition.id();
            let start = definition.start();
            let mut span = Vec::with_capacity(definition.answer.chars().count());
            for (offset, expected) in definition.answer.chars().enumerate() {
                let position = start
                    .step(id.direction, offset)
                    .ok_or(LayoutError::OutOfBounds { clue: id })?;
                // The grid must be able to count one past the cell.
                let (Some(row_bound), Some(col_bound)) =
                    (position.row.checked_add(1), position.col.checked_add(1))
                else {
                    return Err(LayoutError::OutOfBounds { clue: id });
                };
                rows = rows.max(row_bound);
                cols = cols.max(col_bound);
                let cell_id = match cell_lookup.entry(position) {
                    Entry::Vacant(entry) => {
                        let cell_id = CellId(cells.len());
                        cells.push(Cell::new(position, expected));
                        *entry.insert(cell_id)
                    }
                    Entry::Occupied(entry) => *entry.get(),
                };
                cells[cell_id.0].attach(id, expected, alphabet)?;
                span.push(cell_id);
            }
            clues.push(Clue {
                id,
                text: definition.clue,
                answer: definition.answer,
                cells: span,
            });
        }

        log::debug!(
            "built crossword layout: {rows}x{cols} grid, {} clues, {} cells",
            clues.len(),
            cells.len()
        );

        Ok(Self {
            alphabet,
            rows,
            cols,
            cells,
            cell_lookup,
            clues,
        })
    }

    /// Compiles host puzzle data into a layout.
    ///
    /// # Errors
    ///
    /// See [`Puzzle::build`].
    pub fn from_data(data: PuzzleData, alphabet: Alphabet) -> Result<Self, LayoutError> {
        Self::build(data.into_definitions(), alphabet)
    }

    /// Returns the comparison policy this layout was built with.
    #[must_use]
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Returns the number of rows in the bounding grid.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns in the bounding grid.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)` of the bounding grid.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns every covered cell, indexed by [`CellId`].
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the cell with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this puzzle.
    #[must_use]
    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.0]
    }

    /// Returns the id of the cell at `pos`, or `None` if no clue covers it.
    #[must_use]
    pub fn cell_at(&self, pos: Position) -> Option<CellId> {
        self.cell_lookup.get(&pos).copied()
    }

    /// Returns the ids of all cells, in arena order.
    pub fn cell_ids(&self) -> impl ExactSizeIterator<Item = CellId> + use<> {
        (0..self.cells.len()).map(CellId)
    }

    /// Returns every clue, sorted by [`ClueId`].
    #[must_use]
    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    /// Returns the clues of one direction, sorted by number.
    pub fn clues_in(&self, direction: Direction) -> impl Iterator<Item = &Clue> + '_ {
        self.clues
            .iter()
            .filter(move |clue| clue.direction() == direction)
    }

    /// Returns the position of `id` in [`Puzzle::clues`].
    #[must_use]
    pub fn clue_index(&self, id: ClueId) -> Option<usize> {
        self.clues.binary_search_by_key(&id, Clue::id).ok()
    }

    /// Returns the clue with the given identity.
    #[must_use]
    pub fn clue(&self, id: ClueId) -> Option<&Clue> {
        self.clue_index(id).map(|index| &self.clues[index])
    }

    /// Returns the first clue in canonical order: the lowest across number,
    /// or the lowest down number if there are no across clues.
    ///
    /// A built puzzle always has at least one clue.
    #[must_use]
    pub fn first_clue(&self) -> &Clue {
        &self.clues[0]
    }
}

/// Structural errors that prevent a puzzle from being built.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LayoutError {
    /// The puzzle data contains no clues.
    #[display("puzzle has no clues")]
    NoClues,
    /// A clue is numbered 0.
    #[display("{direction} clue numbered 0; clue numbers must be positive")]
    InvalidClueNumber {
        /// Direction of the offending clue.
        direction: Direction,
    },
    /// A clue number is used twice within one direction.
    #[display("duplicate clue {clue}")]
    DuplicateClueNumber {
        /// The repeated identity.
        clue: ClueId,
    },
    /// A clue has an empty answer.
    #[display("clue {clue} has an empty answer")]
    EmptyAnswer {
        /// The offending clue.
        clue: ClueId,
    },
    /// A clue's answer runs past the addressable grid.
    #[display("clue {clue} extends beyond the addressable grid")]
    OutOfBounds {
        /// The offending clue.
        clue: ClueId,
    },
    /// Two clues of the same direction cover one cell.
    #[display("clues {first} and {second} overlap at ({row}, {col})")]
    OverlappingClues {
        /// Row of the shared cell.
        row: usize,
        /// Column of the shared cell.
        col: usize,
        /// The clue that covered the cell first.
        first: ClueId,
        /// The clue that covered it again.
        second: ClueId,
    },
    /// Intersecting across and down answers expect different characters.
    #[display("clues {first} and {second} disagree at ({row}, {col})")]
    ConflictingCells {
        /// Row of the intersection.
        row: usize,
        /// Column of the intersection.
        col: usize,
        /// The clue whose character was recorded first.
        first: ClueId,
        /// The clue that disagreed with it.
        second: ClueId,
    },
}
