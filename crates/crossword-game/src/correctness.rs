//! Correctness evaluation and edge-triggered event emission.

use crossword_core::{CellId, Clue, ClueId, Puzzle};

use crate::{AnswerTuple, CrosswordEvent, EventSink, GuessStore};

/// Returns `true` if the guess in `cell` matches its authored character.
#[must_use]
pub fn is_cell_correct(puzzle: &Puzzle, guesses: &GuessStore, cell: CellId) -> bool {
    guesses
        .get(cell)
        .is_some_and(|guess| puzzle.alphabet().matches(puzzle.cell(cell).expected(), guess))
}

/// Returns `true` if every cell of `clue` matches its authored character.
#[must_use]
pub fn is_clue_correct(puzzle: &Puzzle, guesses: &GuessStore, clue: &Clue) -> bool {
    clue.cells()
        .iter()
        .all(|&cell| is_cell_correct(puzzle, guesses, cell))
}

/// Returns `true` if every cell of `clue` holds a guess.
#[must_use]
pub fn is_clue_answered(guesses: &GuessStore, clue: &Clue) -> bool {
    clue.cells().iter().all(|&cell| guesses.get(cell).is_some())
}

/// Returns `true` if every clue is correct.
#[must_use]
pub fn is_crossword_correct(puzzle: &Puzzle, guesses: &GuessStore) -> bool {
    puzzle
        .clues()
        .iter()
        .all(|clue| is_clue_correct(puzzle, guesses, clue))
}

pub(crate) fn answer_tuple(clue: &Clue) -> AnswerTuple {
    AnswerTuple {
        direction: clue.direction(),
        number: clue.number(),
        answer: clue.answer().to_owned(),
    }
}

/// The last reported correctness, kept only to detect transitions.
///
/// Correctness itself is always recomputed from the guesses; this remembers
/// what the host was last told so that events fire on changes only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CorrectnessTracker {
    reported: Vec<bool>,
    reported_count: usize,
    crossword_correct: bool,
}

impl CorrectnessTracker {
    /// Establishes the baseline for a freshly loaded puzzle.
    ///
    /// Clues already correct are reported as one `LoadedCorrect` snapshot when
    /// `report_loaded` is set and the list is non-empty, rather than as
    /// individual `Correct` transitions. Whole-crossword correctness is
    /// compared against `was_correct`, the state before the load.
    pub(crate) fn load(
        puzzle: &Puzzle,
        guesses: &GuessStore,
        was_correct: bool,
        report_loaded: bool,
        sink: &mut (impl EventSink + ?Sized),
    ) -> Self {
        let reported = puzzle
            .clues()
            .iter()
            .map(|clue| is_clue_correct(puzzle, guesses, clue))
            .collect::<Vec<_>>();
        let reported_count = reported.iter().filter(|&&correct| correct).count();

        let mut this = Self {
            reported,
            reported_count,
            crossword_correct: was_correct,
        };

        if report_loaded && reported_count > 0 {
            let loaded = puzzle
                .clues()
                .iter()
                .zip(&this.reported)
                .filter(|&(_, &correct)| correct)
                .map(|(clue, _)| answer_tuple(clue))
                .collect::<Vec<_>>();
            log::debug!("{} clue(s) already correct at load", loaded.len());
            sink.emit(CrosswordEvent::LoadedCorrect(loaded));
        }
        this.report_crossword(sink);
        this
    }

    #[must_use]
    pub(crate) fn crossword_correct(&self) -> bool {
        self.crossword_correct
    }

    /// Re-evaluates the given clues and reports their transitions.
    ///
    /// `Correct` events are emitted in clue order, followed by at most one
    /// `CrosswordCorrect` event.
    pub(crate) fn update<I>(
        &mut self,
        puzzle: &Puzzle,
        guesses: &GuessStore,
        affected: I,
        sink: &mut (impl EventSink + ?Sized),
    ) where
        I: IntoIterator<Item = ClueId>,
    {
        let mut indices = affected
            .into_iter()
            .filter_map(|id| puzzle.clue_index(id))
            .collect::<Vec<_>>();
        indices.sort_unstable();
        indices.dedup();
        self.update_indices(puzzle, guesses, indices, sink);
    }

    /// Re-evaluates every clue and reports transitions.
    pub(crate) fn update_all(
        &mut self,
        puzzle: &Puzzle,
        guesses: &GuessStore,
        sink: &mut (impl EventSink + ?Sized),
    ) {
        self.update_indices(puzzle, guesses, 0..puzzle.clues().len(), sink);
    }

    fn update_indices<I>(
        &mut self,
        puzzle: &Puzzle,
        guesses: &GuessStore,
        indices: I,
        sink: &mut (impl EventSink + ?Sized),
    ) where
        I: IntoIterator<Item = usize>,
    {
        for index in indices {
            let clue = &puzzle.clues()[index];
            let correct = is_clue_correct(puzzle, guesses, clue);
            let reported = &mut self.reported[index];
            if correct == *reported {
                continue;
            }
            *reported = correct;
            if correct {
                self.reported_count += 1;
                log::trace!("clue {} became correct", clue.id());
                sink.emit(CrosswordEvent::Correct(answer_tuple(clue)));
            } else {
                self.reported_count -= 1;
                log::trace!("clue {} is no longer correct", clue.id());
            }
        }
        self.report_crossword(sink);
    }

    fn report_crossword(&mut self, sink: &mut (impl EventSink + ?Sized)) {
        let correct = self.reported_count == self.reported.len();
        if correct != self.crossword_correct {
            self.crossword_correct = correct;
            log::debug!("crossword correctness changed to {correct}");
            sink.emit(CrosswordEvent::CrosswordCorrect(correct));
        }
    }
}

#[cfg(test)]
mod tests {
    use crossword_core::{Alphabet, ClueDefinition, Position};

    use super::*;
    use crate::EventQueue;

    fn puzzle() -> Puzzle {
        Puzzle::build(
            [
                ClueDefinition::across(1, "apple", "AB", 0, 0),
                ClueDefinition::down(2, "gorilla", "BC", 0, 1),
            ],
            Alphabet::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_clue_correctness_is_case_insensitive_by_default() {
        let puzzle = puzzle();
        let mut guesses = GuessStore::new(&puzzle);
        let across = puzzle.clue(ClueId::across(1)).unwrap();

        guesses.set_guess(&puzzle, Position::new(0, 0), Some('a')).unwrap();
        assert!(!is_clue_answered(&guesses, across));
        assert!(!is_clue_correct(&puzzle, &guesses, across));

        guesses.set_guess(&puzzle, Position::new(0, 1), Some('b')).unwrap();
        assert!(is_clue_answered(&guesses, across));
        assert!(is_clue_correct(&puzzle, &guesses, across));
        assert!(!is_crossword_correct(&puzzle, &guesses));
    }

    #[test]
    fn test_load_reports_snapshot_not_transitions() {
        let puzzle = puzzle();
        let mut guesses = GuessStore::new(&puzzle);
        guesses.set_guess(&puzzle, Position::new(0, 0), Some('A')).unwrap();
        guesses.set_guess(&puzzle, Position::new(0, 1), Some('B')).unwrap();

        let mut events = EventQueue::default();
        let tracker = CorrectnessTracker::load(&puzzle, &guesses, false, true, &mut events);
        assert!(!tracker.crossword_correct());
        assert_eq!(
            events.take_all(),
            vec![CrosswordEvent::LoadedCorrect(vec![AnswerTuple {
                direction: crossword_core::Direction::Across,
                number: 1,
                answer: "AB".to_owned(),
            }])]
        );

        let _ = CorrectnessTracker::load(&puzzle, &guesses, false, false, &mut events);
        assert!(events.is_empty());
    }

    #[test]
    fn test_update_is_edge_triggered() {
        let puzzle = puzzle();
        let mut guesses = GuessStore::new(&puzzle);
        let mut events = EventQueue::default();
        let mut tracker = CorrectnessTracker::load(&puzzle, &guesses, false, true, &mut events);
        assert!(events.is_empty());

        guesses.fill_all_answers(&puzzle);
        tracker.update_all(&puzzle, &guesses, &mut events);
        let drained = events.take_all();
        assert_eq!(drained.len(), 3);
        assert!(drained[0].is_correct());
        assert!(drained[1].is_correct());
        assert_eq!(drained[2], CrosswordEvent::CrosswordCorrect(true));

        tracker.update_all(&puzzle, &guesses, &mut events);
        assert!(events.is_empty());

        guesses.set_guess(&puzzle, Position::new(1, 1), Some('X')).unwrap();
        tracker.update(&puzzle, &guesses, [ClueId::down(2)], &mut events);
        assert_eq!(events.take_all(), vec![CrosswordEvent::CrosswordCorrect(false)]);
    }
}
