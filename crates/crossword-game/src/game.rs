use crossword_core::{CellId, ClueId, Position, Puzzle};

use crate::{
    AnswerTuple, CrosswordEvent, EventSink, FocusState, GameError, GuessError, GuessSnapshot,
    GuessStore, MoveDirection, SessionOptions,
    correctness::{self, CorrectnessTracker},
    navigation::Navigation,
};

/// A crossword play session.
///
/// Owns the immutable [`Puzzle`] layout, the player's guesses, the cursor, and
/// the correctness state last reported to the host. Every mutating operation
/// runs to completion synchronously and reports what changed through the
/// [`EventSink`] passed to it; the session keeps no reference to the sink.
///
/// Sessions are independent values. Two sessions over the same puzzle data
/// share nothing.
///
/// # Example
///
/// ```
/// use crossword_core::{Alphabet, ClueDefinition, Direction, Puzzle};
/// use crossword_game::{AnswerTuple, Crossword, CrosswordEvent, EventQueue, SessionOptions};
///
/// let puzzle = Puzzle::build(
///     [
///         ClueDefinition::across(1, "apple", "AB", 0, 0),
///         ClueDefinition::down(2, "gorilla", "BC", 0, 1),
///     ],
///     Alphabet::default(),
/// )?;
/// let mut events = EventQueue::default();
/// let mut crossword = Crossword::new(puzzle, SessionOptions::default(), &mut events);
///
/// crossword.set_guess((1, 1), Some('C'), &mut events)?;
/// crossword.set_guess((0, 1), Some('B'), &mut events)?;
/// assert_eq!(
///     events.take_all(),
///     [
///         CrosswordEvent::CellChange { row: 1, col: 1, guess: Some('C') },
///         CrosswordEvent::CellChange { row: 0, col: 1, guess: Some('B') },
///         CrosswordEvent::Correct(AnswerTuple {
///             direction: Direction::Down,
///             number: 2,
///             answer: "BC".to_owned(),
///         }),
///     ]
/// );
///
/// crossword.fill_all_answers(&mut events);
/// assert!(crossword.is_crossword_correct());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Crossword {
    puzzle: Puzzle,
    guesses: GuessStore,
    correctness: CorrectnessTracker,
    navigation: Navigation,
    options: SessionOptions,
}

impl Crossword {
    /// Starts a session with every cell empty.
    ///
    /// Emits nothing: an empty grid has no correct clues.
    #[must_use]
    pub fn new(
        puzzle: Puzzle,
        options: SessionOptions,
        sink: &mut (impl EventSink + ?Sized),
    ) -> Self {
        let guesses = GuessStore::new(&puzzle);
        Self::load(puzzle, guesses, options, sink)
    }

    /// Starts a session from saved guesses.
    ///
    /// Clues already correct are reported as one
    /// [`CrosswordEvent::LoadedCorrect`], followed by
    /// [`CrosswordEvent::CrosswordCorrect`]`(true)` if the whole grid is solved.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::NoCellAt`] if the snapshot targets an uncovered
    /// cell. No events are emitted in that case.
    pub fn restore(
        puzzle: Puzzle,
        options: SessionOptions,
        snapshot: &GuessSnapshot,
        sink: &mut (impl EventSink + ?Sized),
    ) -> Result<Self, GuessError> {
        let guesses = GuessStore::restore(&puzzle, snapshot)?;
        Ok(Self::load(puzzle, guesses, options, sink))
    }

    fn load(
        puzzle: Puzzle,
        guesses: GuessStore,
        options: SessionOptions,
        sink: &mut (impl EventSink + ?Sized),
    ) -> Self {
        log::debug!(
            "loading crossword session: {} clues, {} guesses",
            puzzle.clues().len(),
            guesses.filled_count()
        );
        let correctness = CorrectnessTracker::load(&puzzle, &guesses, false, true, sink);
        let navigation = Navigation::new(&puzzle);
        Self {
            puzzle,
            guesses,
            correctness,
            navigation,
            options,
        }
    }

    /// Replaces the puzzle data, rebuilding the session wholesale.
    ///
    /// Guesses are taken from `snapshot` (or cleared) and the cursor returns to
    /// its initial, unfocused state. Already-correct clues are reported
    /// according to [`SessionOptions::loaded_correct_policy`]. A change in
    /// whole-crossword correctness relative to the previous puzzle is reported
    /// too.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::NoCellAt`] if the snapshot targets a cell the new
    /// puzzle does not cover. The session is left unchanged in that case.
    pub fn replace_puzzle(
        &mut self,
        puzzle: Puzzle,
        snapshot: Option<&GuessSnapshot>,
        sink: &mut (impl EventSink + ?Sized),
    ) -> Result<(), GuessError> {
        let guesses = match snapshot {
            Some(snapshot) => GuessStore::restore(&puzzle, snapshot)?,
            None => GuessStore::new(&puzzle),
        };
        let report_loaded = self.options.loaded_correct_policy.is_every_load();
        log::debug!(
            "replacing crossword puzzle: {} clues, {} guesses",
            puzzle.clues().len(),
            guesses.filled_count()
        );
        self.correctness = CorrectnessTracker::load(
            &puzzle,
            &guesses,
            self.correctness.crossword_correct(),
            report_loaded,
            sink,
        );
        self.navigation = Navigation::new(&puzzle);
        self.puzzle = puzzle;
        self.guesses = guesses;
        Ok(())
    }

    /// Returns the puzzle layout.
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Returns the session options.
    #[must_use]
    pub fn options(&self) -> SessionOptions {
        self.options
    }

    /// Returns the guess store.
    #[must_use]
    pub fn guesses(&self) -> &GuessStore {
        &self.guesses
    }

    /// Writes a guess into one cell; `None` clears it.
    ///
    /// Emits [`CrosswordEvent::CellChange`], then a
    /// [`CrosswordEvent::Correct`] for each clue through the cell that just
    /// became correct, then [`CrosswordEvent::CrosswordCorrect`] if the whole
    /// grid's correctness changed.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::NoCellAt`] if no clue covers the cell. Nothing
    /// changes and nothing is emitted in that case.
    pub fn set_guess(
        &mut self,
        pos: impl Into<Position>,
        guess: Option<char>,
        sink: &mut (impl EventSink + ?Sized),
    ) -> Result<(), GuessError> {
        let pos = pos.into();
        let cell = self.guesses.set_guess(&self.puzzle, pos, guess)?;
        self.committed(cell, guess, sink);
        Ok(())
    }

    /// Clears one cell. Equivalent to [`set_guess`](Self::set_guess) with `None`.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::NoCellAt`] if no clue covers the cell.
    pub fn clear_guess(
        &mut self,
        pos: impl Into<Position>,
        sink: &mut (impl EventSink + ?Sized),
    ) -> Result<(), GuessError> {
        self.set_guess(pos, None, sink)
    }

    fn write_cell(
        &mut self,
        cell: CellId,
        guess: Option<char>,
        sink: &mut (impl EventSink + ?Sized),
    ) {
        self.guesses.set(cell, guess);
        self.committed(cell, guess, sink);
    }

    fn committed(
        &mut self,
        cell: CellId,
        guess: Option<char>,
        sink: &mut (impl EventSink + ?Sized),
    ) {
        let Position { row, col } = self.puzzle.cell(cell).position();
        log::trace!("guess {guess:?} written at ({row}, {col})");
        sink.emit(CrosswordEvent::CellChange { row, col, guess });
        self.correctness.update(
            &self.puzzle,
            &self.guesses,
            self.puzzle.cell(cell).clues(),
            sink,
        );
    }

    /// Writes every cell's authored character in one batch.
    ///
    /// Emits a [`CrosswordEvent::Correct`] for each clue that was not already
    /// correct, then [`CrosswordEvent::CrosswordCorrect`]`(true)` if the grid
    /// was not already solved. No [`CrosswordEvent::CellChange`] is emitted.
    pub fn fill_all_answers(&mut self, sink: &mut (impl EventSink + ?Sized)) {
        log::debug!("filling all answers");
        self.guesses.fill_all_answers(&self.puzzle);
        self.correctness
            .update_all(&self.puzzle, &self.guesses, sink);
    }

    /// Clears every guess in one batch.
    ///
    /// Emits [`CrosswordEvent::CrosswordCorrect`]`(false)` if the grid was
    /// solved, and nothing otherwise.
    pub fn reset(&mut self, sink: &mut (impl EventSink + ?Sized)) {
        log::debug!("resetting all guesses");
        self.guesses.reset();
        self.correctness
            .update_all(&self.puzzle, &self.guesses, sink);
    }

    /// Returns the guess at `pos`, or `None` if the cell is empty or uncovered.
    #[must_use]
    pub fn guess_at(&self, pos: impl Into<Position>) -> Option<char> {
        self.puzzle
            .cell_at(pos.into())
            .and_then(|cell| self.guesses.get(cell))
    }

    /// Captures the current guesses for persistence.
    #[must_use]
    pub fn snapshot(&self) -> GuessSnapshot {
        self.guesses.snapshot(&self.puzzle)
    }

    /// Returns `true` if every cell of the clue holds its authored character.
    ///
    /// Unknown clues are never correct.
    #[must_use]
    pub fn is_clue_correct(&self, id: ClueId) -> bool {
        self.puzzle
            .clue(id)
            .is_some_and(|clue| correctness::is_clue_correct(&self.puzzle, &self.guesses, clue))
    }

    /// Returns `true` if every cell of the clue holds some guess.
    ///
    /// Unknown clues are never answered.
    #[must_use]
    pub fn is_clue_answered(&self, id: ClueId) -> bool {
        self.puzzle
            .clue(id)
            .is_some_and(|clue| correctness::is_clue_answered(&self.guesses, clue))
    }

    /// Returns `true` if every clue is correct.
    #[must_use]
    pub fn is_crossword_correct(&self) -> bool {
        correctness::is_crossword_correct(&self.puzzle, &self.guesses)
    }

    /// Returns the currently correct clues in clue order.
    #[must_use]
    pub fn correct_clues(&self) -> Vec<AnswerTuple> {
        self.puzzle
            .clues()
            .iter()
            .filter(|clue| correctness::is_clue_correct(&self.puzzle, &self.guesses, clue))
            .map(correctness::answer_tuple)
            .collect()
    }

    /// Returns the render state of the cell at `pos`.
    ///
    /// Uncovered positions, including ones outside the grid, report
    /// `covered == false`.
    #[must_use]
    pub fn cell_view(&self, pos: impl Into<Position>) -> CellView {
        let position = pos.into();
        let Some(id) = self.puzzle.cell_at(position) else {
            return CellView {
                position,
                covered: false,
                label: None,
                guess: None,
                correct: false,
                across: None,
                down: None,
                selected: false,
            };
        };
        let cell = self.puzzle.cell(id);
        let label = cell
            .clues()
            .filter_map(|clue| self.puzzle.clue(clue))
            .filter(|clue| clue.cells().first() == Some(&id))
            .map(crossword_core::Clue::number)
            .min();
        CellView {
            position,
            covered: true,
            label,
            guess: self.guesses.get(id),
            correct: correctness::is_cell_correct(&self.puzzle, &self.guesses, id),
            across: cell.clue(crossword_core::Direction::Across),
            down: cell.clue(crossword_core::Direction::Down),
            selected: self.navigation.cell() == Some(id),
        }
    }

    /// Returns the render state of every grid position, row by row.
    #[must_use]
    pub fn cell_views(&self) -> Vec<Vec<CellView>> {
        (0..self.puzzle.rows())
            .map(|row| {
                (0..self.puzzle.cols())
                    .map(|col| self.cell_view((row, col)))
                    .collect()
            })
            .collect()
    }

    /// Returns the render state of a clue.
    #[must_use]
    pub fn clue_view(&self, id: ClueId) -> Option<ClueView<'_>> {
        let clue = self.puzzle.clue(id)?;
        Some(ClueView {
            id,
            text: clue.text(),
            cells: clue
                .cells()
                .iter()
                .map(|&cell| self.puzzle.cell(cell).position())
                .collect(),
            answered: correctness::is_clue_answered(&self.guesses, clue),
            correct: correctness::is_clue_correct(&self.puzzle, &self.guesses, clue),
            selected: self.navigation.clue() == id,
        })
    }

    /// Returns the render state of every clue, in clue order.
    pub fn clue_views(&self) -> impl Iterator<Item = ClueView<'_>> + '_ {
        self.puzzle
            .clues()
            .iter()
            .filter_map(|clue| self.clue_view(clue.id()))
    }

    /// Returns the navigation state.
    #[must_use]
    pub fn focus_state(&self) -> FocusState {
        self.navigation.state(&self.puzzle)
    }

    /// Gives the grid focus, placing the cursor on the first cell of the first
    /// clue if no cell is selected yet.
    pub fn focus(&mut self) {
        self.navigation.focus(&self.puzzle);
    }

    /// Removes focus from the grid, keeping the cursor.
    pub fn blur(&mut self) {
        self.navigation.blur();
    }

    /// Moves the cursor by a delta if the target cell is covered.
    ///
    /// The current clue becomes the target cell's clue along the movement axis,
    /// or its other clue if it has none along that axis. Returns `false` and
    /// changes nothing if there is no cursor or the target is not covered.
    pub fn move_by(&mut self, row_delta: isize, col_delta: isize) -> bool {
        self.navigation.move_by(&self.puzzle, row_delta, col_delta)
    }

    /// Moves the cursor one cell; see [`move_by`](Self::move_by).
    pub fn move_selection(&mut self, direction: MoveDirection) -> bool {
        let (row_delta, col_delta) = direction.delta();
        self.move_by(row_delta, col_delta)
    }

    /// Selects a clue and places the cursor on its first empty cell, or its
    /// first cell if it is fully answered.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownClue`] if the puzzle has no such clue.
    pub fn select_clue(&mut self, id: ClueId) -> Result<(), GameError> {
        self.navigation.select_clue(&self.puzzle, &self.guesses, id)
    }

    /// Places the cursor on a cell, as when the player clicks it.
    ///
    /// Selecting the current cell again switches direction at an
    /// intersection. Otherwise the current direction is kept when the cell
    /// has a clue in it.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Guess`] if no clue covers the cell.
    pub fn select_cell(&mut self, pos: impl Into<Position>) -> Result<(), GameError> {
        self.navigation.select_cell(&self.puzzle, pos.into())
    }

    /// Switches to the other clue through the cursor cell, if there is one.
    pub fn toggle_direction(&mut self) -> bool {
        self.navigation.toggle_direction(&self.puzzle)
    }

    /// Moves the cursor to the next cell of the current clue, or to the next
    /// clue in the same direction, applying [`SessionOptions::wrap_policy`] at
    /// the end of the direction.
    pub fn advance_after_guess(&mut self) -> bool {
        self.navigation
            .advance(&self.puzzle, self.options.wrap_policy)
    }

    /// Moves the cursor to the previous cell of the current clue.
    pub fn retreat(&mut self) -> bool {
        self.navigation.retreat(&self.puzzle)
    }

    /// Selects the next clue in clue order, cycling to the first.
    pub fn next_clue(&mut self) {
        self.navigation.cycle_clue(&self.puzzle, &self.guesses, true);
    }

    /// Selects the previous clue in clue order, cycling to the last.
    pub fn previous_clue(&mut self) {
        self.navigation
            .cycle_clue(&self.puzzle, &self.guesses, false);
    }

    /// Types a character at the cursor and advances.
    ///
    /// Emits the same events as [`set_guess`](Self::set_guess). Returns `false`
    /// and does nothing if there is no cursor.
    pub fn input_char(&mut self, ch: char, sink: &mut (impl EventSink + ?Sized)) -> bool {
        let Some(cell) = self.navigation.cell() else {
            return false;
        };
        self.write_cell(cell, Some(ch), sink);
        self.advance_after_guess();
        true
    }

    /// Deletes at the cursor, as the backspace key does.
    ///
    /// Clears the cursor cell if it holds a guess; otherwise moves back one
    /// cell within the clue and clears that one. Returns `true` if a guess
    /// was cleared.
    pub fn delete_char(&mut self, sink: &mut (impl EventSink + ?Sized)) -> bool {
        let Some(cell) = self.navigation.cell() else {
            return false;
        };
        if self.guesses.get(cell).is_some() {
            self.write_cell(cell, None, sink);
            return true;
        }
        if !self.navigation.retreat(&self.puzzle) {
            return false;
        }
        match self.navigation.cell() {
            Some(previous) if self.guesses.get(previous).is_some() => {
                self.write_cell(previous, None, sink);
                true
            }
            _ => false,
        }
    }
}

/// Render state of one grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    /// The position.
    pub position: Position,
    /// Whether any clue covers this position.
    pub covered: bool,
    /// Number to print in the corner, if a clue starts here.
    pub label: Option<u32>,
    /// The current guess.
    pub guess: Option<char>,
    /// Whether the guess matches the authored character.
    pub correct: bool,
    /// The across clue through this cell.
    pub across: Option<ClueId>,
    /// The down clue through this cell.
    pub down: Option<ClueId>,
    /// Whether the cursor is on this cell.
    pub selected: bool,
}

/// Render state of one clue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueView<'a> {
    /// The clue identity.
    pub id: ClueId,
    /// The clue text.
    pub text: &'a str,
    /// Covered positions in reading order.
    pub cells: Vec<Position>,
    /// Whether every cell holds a guess.
    pub answered: bool,
    /// Whether every cell holds the authored character.
    pub correct: bool,
    /// Whether this is the cursor's current clue.
    pub selected: bool,
}

#[cfg(test)]
mod tests {
    use crossword_core::{Alphabet, ClueDefinition, Direction};
    use proptest::prelude::*;

    use super::*;
    use crate::{EventQueue, IgnoreEvents, LoadedCorrectPolicy, SavedGuess, WrapPolicy};

    fn scenario_a() -> Puzzle {
        Puzzle::build(
            [
                ClueDefinition::across(1, "apple", "AB", 0, 0),
                ClueDefinition::down(2, "gorilla", "BC", 0, 1),
            ],
            Alphabet::default(),
        )
        .unwrap()
    }

    // Grid:
    //   L O G
    //   . . O
    fn scenario_c() -> Puzzle {
        Puzzle::build(
            [
                ClueDefinition::across(1, "timber", "LOG", 0, 0),
                ClueDefinition::down(2, "proceed", "GO", 0, 2),
            ],
            Alphabet::default(),
        )
        .unwrap()
    }

    fn demo() -> Puzzle {
        Puzzle::build(
            [
                ClueDefinition::across(1, "apple", "りんご", 0, 0),
                ClueDefinition::down(2, "gorilla", "ごりら", 0, 2),
            ],
            Alphabet::Kana,
        )
        .unwrap()
    }

    fn tuple(direction: Direction, number: u32, answer: &str) -> AnswerTuple {
        AnswerTuple {
            direction,
            number,
            answer: answer.to_owned(),
        }
    }

    fn new_session(puzzle: Puzzle) -> (Crossword, EventQueue) {
        let mut events = EventQueue::default();
        let crossword = Crossword::new(puzzle, SessionOptions::default(), &mut events);
        assert!(events.is_empty());
        (crossword, events)
    }

    #[test]
    fn test_scenario_c_cell_change_then_correct() {
        let (mut crossword, mut events) = new_session(scenario_c());
        crossword.set_guess((0, 2), Some('X'), &mut events).unwrap();
        crossword.set_guess((1, 2), Some('O'), &mut events).unwrap();
        assert_eq!(
            events.take_all(),
            vec![
                CrosswordEvent::CellChange {
                    row: 0,
                    col: 2,
                    guess: Some('X')
                },
                CrosswordEvent::CellChange {
                    row: 1,
                    col: 2,
                    guess: Some('O')
                },
            ]
        );

        crossword.set_guess((0, 2), Some('G'), &mut events).unwrap();
        assert_eq!(
            events.take_all(),
            vec![
                CrosswordEvent::CellChange {
                    row: 0,
                    col: 2,
                    guess: Some('G')
                },
                CrosswordEvent::Correct(tuple(Direction::Down, 2, "GO")),
            ]
        );

        // Already correct: no second Correct event.
        crossword.set_guess((0, 2), Some('g'), &mut events).unwrap();
        assert_eq!(events.take_all().len(), 1);
    }

    #[test]
    fn test_scenario_d_uncovered_guess_emits_nothing() {
        let (mut crossword, mut events) = new_session(scenario_a());
        assert_eq!(
            crossword.set_guess((1, 0), Some('Z'), &mut events),
            Err(GuessError::NoCellAt { row: 1, col: 0 })
        );
        assert_eq!(
            crossword.set_guess((40, 40), Some('Z'), &mut events),
            Err(GuessError::NoCellAt { row: 40, col: 40 })
        );
        assert!(events.is_empty());
        assert!(crossword.guesses().is_empty());
    }

    #[test]
    fn test_intersection_guess_completes_both_clues_in_order() {
        let (mut crossword, mut events) = new_session(scenario_a());
        crossword.set_guess((0, 0), Some('A'), &mut events).unwrap();
        crossword.set_guess((1, 1), Some('C'), &mut events).unwrap();
        events.take_all();

        crossword.set_guess((0, 1), Some('b'), &mut events).unwrap();
        assert_eq!(
            events.take_all(),
            vec![
                CrosswordEvent::CellChange {
                    row: 0,
                    col: 1,
                    guess: Some('b')
                },
                CrosswordEvent::Correct(tuple(Direction::Across, 1, "AB")),
                CrosswordEvent::Correct(tuple(Direction::Down, 2, "BC")),
                CrosswordEvent::CrosswordCorrect(true),
            ]
        );

        crossword.clear_guess((0, 1), &mut events).unwrap();
        assert_eq!(
            events.take_all(),
            vec![
                CrosswordEvent::CellChange {
                    row: 0,
                    col: 1,
                    guess: None
                },
                CrosswordEvent::CrosswordCorrect(false),
            ]
        );
    }

    #[test]
    fn test_fill_all_answers_is_idempotent() {
        let (mut crossword, mut events) = new_session(scenario_a());

        crossword.fill_all_answers(&mut events);
        let first = crossword.snapshot();
        assert_eq!(
            events.take_all(),
            vec![
                CrosswordEvent::Correct(tuple(Direction::Across, 1, "AB")),
                CrosswordEvent::Correct(tuple(Direction::Down, 2, "BC")),
                CrosswordEvent::CrosswordCorrect(true),
            ]
        );

        crossword.fill_all_answers(&mut events);
        assert!(events.is_empty());
        assert_eq!(crossword.snapshot(), first);
    }

    #[test]
    fn test_fill_all_answers_reports_only_newly_correct_clues() {
        let (mut crossword, mut events) = new_session(scenario_a());
        crossword.set_guess((0, 0), Some('A'), &mut events).unwrap();
        crossword.set_guess((0, 1), Some('B'), &mut events).unwrap();
        events.take_all();

        crossword.fill_all_answers(&mut events);
        assert_eq!(
            events.take_all(),
            vec![
                CrosswordEvent::Correct(tuple(Direction::Down, 2, "BC")),
                CrosswordEvent::CrosswordCorrect(true),
            ]
        );
    }

    #[test]
    fn test_reset_reports_false_once() {
        let (mut crossword, mut events) = new_session(scenario_a());
        crossword.fill_all_answers(&mut events);
        events.take_all();

        crossword.reset(&mut events);
        assert_eq!(
            events.take_all(),
            vec![CrosswordEvent::CrosswordCorrect(false)]
        );
        assert!(crossword.guesses().is_empty());

        crossword.reset(&mut events);
        assert!(events.is_empty());
    }

    #[test]
    fn test_reset_then_fill_matches_fresh_fill() {
        let (mut fresh, _) = new_session(scenario_a());
        fresh.fill_all_answers(&mut IgnoreEvents);

        let (mut replayed, mut events) = new_session(scenario_a());
        replayed.set_guess((1, 1), Some('Q'), &mut events).unwrap();
        replayed.fill_all_answers(&mut events);
        replayed.reset(&mut events);
        events.take_all();
        replayed.fill_all_answers(&mut events);

        assert_eq!(replayed.snapshot(), fresh.snapshot());
        assert_eq!(
            events.take_all(),
            vec![
                CrosswordEvent::Correct(tuple(Direction::Across, 1, "AB")),
                CrosswordEvent::Correct(tuple(Direction::Down, 2, "BC")),
                CrosswordEvent::CrosswordCorrect(true),
            ]
        );
    }

    #[test]
    fn test_restore_reports_loaded_correct_once() {
        let snapshot = GuessSnapshot {
            guesses: vec![
                SavedGuess { row: 0, col: 0, guess: 'a' },
                SavedGuess { row: 0, col: 1, guess: 'b' },
            ],
        };
        let mut events = EventQueue::default();
        let crossword =
            Crossword::restore(scenario_a(), SessionOptions::default(), &snapshot, &mut events)
                .unwrap();
        assert_eq!(
            events.take_all(),
            vec![CrosswordEvent::LoadedCorrect(vec![tuple(
                Direction::Across,
                1,
                "AB"
            )])]
        );
        assert!(crossword.is_clue_correct(ClueId::across(1)));
        assert!(!crossword.is_clue_answered(ClueId::down(2)));
    }

    #[test]
    fn test_restore_complete_grid_reports_crossword_correct() {
        let (mut solved, _) = new_session(scenario_a());
        solved.fill_all_answers(&mut IgnoreEvents);

        let mut events = EventQueue::default();
        let restored = Crossword::restore(
            scenario_a(),
            SessionOptions::default(),
            &solved.snapshot(),
            &mut events,
        )
        .unwrap();
        assert_eq!(
            events.take_all(),
            vec![
                CrosswordEvent::LoadedCorrect(vec![
                    tuple(Direction::Across, 1, "AB"),
                    tuple(Direction::Down, 2, "BC"),
                ]),
                CrosswordEvent::CrosswordCorrect(true),
            ]
        );
        assert!(restored.is_crossword_correct());

        // Nothing new becomes correct when filling an already solved grid.
        let mut restored = restored;
        restored.fill_all_answers(&mut events);
        assert!(events.is_empty());
    }

    #[test]
    fn test_restore_rejects_uncovered_snapshot() {
        let snapshot = GuessSnapshot {
            guesses: vec![SavedGuess { row: 3, col: 3, guess: 'a' }],
        };
        let mut events = EventQueue::default();
        let result =
            Crossword::restore(scenario_a(), SessionOptions::default(), &snapshot, &mut events);
        assert_eq!(
            result.map(|_| ()),
            Err(GuessError::NoCellAt { row: 3, col: 3 })
        );
        assert!(events.is_empty());
    }

    #[test]
    fn test_replace_puzzle_follows_loaded_correct_policy() {
        let snapshot = GuessSnapshot {
            guesses: vec![SavedGuess { row: 0, col: 2, guess: 'ゴ' }],
        };
        let single = || {
            Puzzle::build(
                [ClueDefinition::across(1, "go", "ご", 0, 2)],
                Alphabet::Kana,
            )
            .unwrap()
        };

        let mut events = EventQueue::default();
        let mut every = Crossword::new(demo(), SessionOptions::default(), &mut events);
        every
            .replace_puzzle(single(), Some(&snapshot), &mut events)
            .unwrap();
        assert_eq!(
            events.take_all(),
            vec![
                CrosswordEvent::LoadedCorrect(vec![tuple(Direction::Across, 1, "ご")]),
                CrosswordEvent::CrosswordCorrect(true),
            ]
        );

        let options =
            SessionOptions::default().loaded_correct_policy(LoadedCorrectPolicy::FirstLoadOnly);
        let mut first_only = Crossword::new(demo(), options, &mut events);
        first_only
            .replace_puzzle(single(), Some(&snapshot), &mut events)
            .unwrap();
        assert_eq!(
            events.take_all(),
            vec![CrosswordEvent::CrosswordCorrect(true)]
        );

        // Replacing a solved puzzle with an empty one reports the drop.
        first_only.replace_puzzle(demo(), None, &mut events).unwrap();
        assert_eq!(
            events.take_all(),
            vec![CrosswordEvent::CrosswordCorrect(false)]
        );
        assert_eq!(first_only.focus_state().cell, None);
    }

    #[test]
    fn test_replace_puzzle_with_bad_snapshot_keeps_session() {
        let (mut crossword, mut events) = new_session(scenario_a());
        crossword.set_guess((0, 0), Some('A'), &mut events).unwrap();
        events.take_all();

        let snapshot = GuessSnapshot {
            guesses: vec![SavedGuess { row: 9, col: 9, guess: 'a' }],
        };
        assert_eq!(
            crossword.replace_puzzle(demo(), Some(&snapshot), &mut events),
            Err(GuessError::NoCellAt { row: 9, col: 9 })
        );
        assert!(events.is_empty());
        assert_eq!(crossword.guess_at((0, 0)), Some('A'));
        assert_eq!(crossword.puzzle().clues()[0].answer(), "AB");
    }

    #[test]
    fn test_kana_guesses_match_hiragana_answers() {
        let (mut crossword, mut events) = new_session(demo());
        crossword.set_guess((0, 2), Some('ゴ'), &mut events).unwrap();
        crossword.set_guess((1, 2), Some('り'), &mut events).unwrap();
        crossword.set_guess((2, 2), Some('ラ'), &mut events).unwrap();
        let drained = events.take_all();
        assert_eq!(
            drained.last(),
            Some(&CrosswordEvent::Correct(tuple(Direction::Down, 2, "ごりら")))
        );
        assert_eq!(crossword.correct_clues(), vec![tuple(Direction::Down, 2, "ごりら")]);
    }

    #[test]
    fn test_cell_and_clue_views() {
        let (mut crossword, mut events) = new_session(scenario_c());
        crossword.set_guess((0, 2), Some('G'), &mut events).unwrap();
        crossword.focus();

        let start = crossword.cell_view((0, 0));
        assert!(start.covered);
        assert_eq!(start.label, Some(1));
        assert!(start.selected);
        assert_eq!(start.across, Some(ClueId::across(1)));
        assert_eq!(start.down, None);

        let shared = crossword.cell_view((0, 2));
        assert_eq!(shared.label, Some(2));
        assert_eq!(shared.guess, Some('G'));
        assert!(shared.correct);
        assert_eq!(shared.down, Some(ClueId::down(2)));

        let void = crossword.cell_view((1, 0));
        assert!(!void.covered);
        assert_eq!(void.label, None);

        let views = crossword.cell_views();
        assert_eq!(views.len(), 2);
        assert!(views.iter().all(|row| row.len() == 3));
        assert_eq!(views.iter().flatten().filter(|view| view.covered).count(), 4);

        let down = crossword.clue_view(ClueId::down(2)).unwrap();
        assert_eq!(down.text, "proceed");
        assert_eq!(down.cells, vec![Position::new(0, 2), Position::new(1, 2)]);
        assert!(!down.answered);
        assert!(!down.correct);
        assert!(!down.selected);
        assert!(crossword.clue_view(ClueId::across(1)).unwrap().selected);
        assert!(crossword.clue_view(ClueId::across(5)).is_none());
        assert_eq!(crossword.clue_views().count(), 2);
    }

    #[test]
    fn test_input_char_types_across_clues_and_wraps() {
        let (mut crossword, mut events) = new_session(scenario_c());
        assert!(!crossword.input_char('L', &mut events));
        assert!(events.is_empty());

        crossword.focus();
        for ch in "LOG".chars() {
            assert!(crossword.input_char(ch, &mut events));
        }
        // Wrapped to the other direction's first clue.
        let state = crossword.focus_state();
        assert_eq!(state.clue(), ClueId::down(2));
        assert_eq!(state.cell, Some(Position::new(0, 2)));
        assert!(crossword.is_clue_correct(ClueId::across(1)));

        assert!(crossword.input_char('G', &mut events));
        assert!(crossword.input_char('O', &mut events));
        assert!(crossword.is_crossword_correct());
        assert_eq!(
            events.take_all().last(),
            Some(&CrosswordEvent::CrosswordCorrect(true))
        );
    }

    #[test]
    fn test_input_char_stop_policy_stays_on_last_cell() {
        let mut events = EventQueue::default();
        let options = SessionOptions::default().wrap_policy(WrapPolicy::Stop);
        let mut crossword = Crossword::new(scenario_c(), options, &mut events);
        crossword.select_clue(ClueId::down(2)).unwrap();
        crossword.input_char('G', &mut events);
        crossword.input_char('O', &mut events);
        assert_eq!(crossword.focus_state().cell, Some(Position::new(1, 2)));
        assert_eq!(crossword.focus_state().clue(), ClueId::down(2));
    }

    #[test]
    fn test_delete_char_clears_then_moves_back() {
        let (mut crossword, mut events) = new_session(scenario_c());
        crossword.focus();
        crossword.input_char('L', &mut events);
        crossword.input_char('O', &mut events);
        events.take_all();

        // Cursor is on the empty (0, 2): move back and clear (0, 1).
        assert!(crossword.delete_char(&mut events));
        assert_eq!(crossword.focus_state().cell, Some(Position::new(0, 1)));
        assert_eq!(crossword.guess_at((0, 1)), None);

        crossword.set_guess((0, 1), Some('O'), &mut events).unwrap();
        events.take_all();
        // Cursor cell holds a guess: clear in place.
        assert!(crossword.delete_char(&mut events));
        assert_eq!(crossword.focus_state().cell, Some(Position::new(0, 1)));
        assert_eq!(
            events.take_all(),
            vec![CrosswordEvent::CellChange {
                row: 0,
                col: 1,
                guess: None
            }]
        );

        assert!(crossword.delete_char(&mut events));
        assert_eq!(crossword.guess_at((0, 0)), None);
        assert!(!crossword.delete_char(&mut events));
    }

    #[test]
    fn test_navigation_through_session() {
        let (mut crossword, _) = new_session(scenario_c());
        assert!(!crossword.focus_state().has_focus);

        crossword.focus();
        assert!(crossword.move_selection(MoveDirection::Right));
        assert!(crossword.move_selection(MoveDirection::Right));
        assert!(!crossword.move_selection(MoveDirection::Right));
        assert!(crossword.move_selection(MoveDirection::Down));
        assert_eq!(crossword.focus_state().clue(), ClueId::down(2));
        assert!(crossword.retreat());
        assert!(crossword.toggle_direction());
        assert_eq!(crossword.focus_state().clue(), ClueId::across(1));

        crossword.next_clue();
        assert_eq!(crossword.focus_state().clue(), ClueId::down(2));
        crossword.previous_clue();
        assert_eq!(crossword.focus_state().clue(), ClueId::across(1));

        crossword.select_cell((1, 2)).unwrap();
        assert_eq!(crossword.focus_state().clue(), ClueId::down(2));
        assert_eq!(
            crossword.select_clue(ClueId::across(2)),
            Err(GameError::UnknownClue {
                clue: ClueId::across(2)
            })
        );

        crossword.blur();
        assert!(!crossword.focus_state().has_focus);
        assert_eq!(crossword.focus_state().cell, Some(Position::new(1, 2)));
    }

    #[test]
    fn test_sessions_are_independent() {
        let (mut first, mut first_events) = new_session(demo());
        let (second, second_events) = new_session(demo());

        first.fill_all_answers(&mut first_events);
        assert!(first.is_crossword_correct());
        assert!(!second.is_crossword_correct());
        assert!(second_events.is_empty());
    }

    fn apply(crossword: &mut Crossword, op: u8, row: usize, col: usize, events: &mut EventQueue) {
        match op % 4 {
            0 => {
                let _ = crossword.set_guess((row, col), Some('A'), events);
            }
            1 => {
                let expected = crossword
                    .puzzle()
                    .cell_at(Position::new(row, col))
                    .map(|cell| crossword.puzzle().cell(cell).expected());
                let _ = crossword.set_guess((row, col), expected, events);
            }
            2 => crossword.fill_all_answers(events),
            _ => crossword.reset(events),
        }
    }

    proptest! {
        #[test]
        fn prop_crossword_correct_events_alternate_and_track_state(
            ops in proptest::collection::vec((any::<u8>(), 0usize..3, 0usize..3), 0..40)
        ) {
            let mut events = EventQueue::default();
            let mut crossword = Crossword::new(scenario_c(), SessionOptions::default(), &mut events);
            let mut last = false;
            for (op, row, col) in ops {
                apply(&mut crossword, op, row, col, &mut events);
                for event in events.take_all() {
                    if let CrosswordEvent::CrosswordCorrect(value) = event {
                        prop_assert_ne!(value, last);
                        last = value;
                    }
                }
                prop_assert_eq!(last, crossword.is_crossword_correct());
            }
        }
    }
}
