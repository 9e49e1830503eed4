//! Events raised by a session and the sinks that receive them.
//!
//! A session never stores a sink. Every mutating operation takes the sink as
//! an argument and emits into it synchronously, in the order the underlying
//! state changes happen, before returning.

use std::{fmt, mem};

use crossword_core::{ClueId, Direction};
use serde::{Deserialize, Serialize};

/// A clue together with its authored answer, as reported by correctness events.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnswerTuple {
    /// Direction of the clue.
    pub direction: Direction,
    /// Clue number.
    pub number: u32,
    /// The authored answer.
    pub answer: String,
}

impl AnswerTuple {
    /// Returns the identity of the clue.
    #[must_use]
    pub fn id(&self) -> ClueId {
        ClueId::new(self.direction, self.number)
    }
}

/// A notification for the host.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum CrosswordEvent {
    /// A single cell's guess was written; `None` means the cell was cleared.
    CellChange {
        /// Row of the cell.
        row: usize,
        /// Column of the cell.
        col: usize,
        /// The new guess.
        guess: Option<char>,
    },
    /// A clue went from not correct to correct.
    Correct(AnswerTuple),
    /// Clues that were already correct when the puzzle was loaded.
    LoadedCorrect(Vec<AnswerTuple>),
    /// The whole crossword became correct (`true`) or stopped being correct (`false`).
    CrosswordCorrect(bool),
}

/// Receiver of [`CrosswordEvent`]s.
pub trait EventSink {
    /// Delivers one event.
    fn emit(&mut self, event: CrosswordEvent);
}

impl<S> EventSink for &mut S
where
    S: EventSink + ?Sized,
{
    fn emit(&mut self, event: CrosswordEvent) {
        (**self).emit(event);
    }
}

/// A sink that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct IgnoreEvents;

impl EventSink for IgnoreEvents {
    fn emit(&mut self, _event: CrosswordEvent) {}
}

/// A sink that collects events for the host to drain later.
///
/// # Example
///
/// ```
/// use crossword_core::{Alphabet, ClueDefinition, Puzzle};
/// use crossword_game::{Crossword, CrosswordEvent, EventQueue, SessionOptions};
///
/// let puzzle = Puzzle::build(
///     [ClueDefinition::across(1, "pet", "CAT", 0, 0)],
///     Alphabet::default(),
/// )?;
/// let mut events = EventQueue::default();
/// let mut crossword = Crossword::new(puzzle, SessionOptions::default(), &mut events);
/// assert!(events.take_all().is_empty());
///
/// crossword.fill_all_answers(&mut events);
/// let drained = events.take_all();
/// assert_eq!(drained.len(), 2);
/// assert_eq!(drained[1], CrosswordEvent::CrosswordCorrect(true));
/// assert!(events.is_empty());
/// # Ok::<(), crossword_core::LayoutError>(())
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EventQueue {
    events: Vec<CrosswordEvent>,
}

impl EventQueue {
    /// Returns `true` if no events are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns the pending events without draining them.
    #[must_use]
    pub fn events(&self) -> &[CrosswordEvent] {
        &self.events
    }

    /// Removes and returns all pending events.
    pub fn take_all(&mut self) -> Vec<CrosswordEvent> {
        mem::take(&mut self.events)
    }
}

impl EventSink for EventQueue {
    fn emit(&mut self, event: CrosswordEvent) {
        self.events.push(event);
    }
}

type CorrectFn<'a> = Box<dyn FnMut(Direction, u32, &str) + 'a>;
type LoadedCorrectFn<'a> = Box<dyn FnMut(&[AnswerTuple]) + 'a>;
type CrosswordCorrectFn<'a> = Box<dyn FnMut(bool) + 'a>;
type CellChangeFn<'a> = Box<dyn FnMut(usize, usize, Option<char>) + 'a>;

/// A set of optional function handles, one per event kind.
///
/// Handlers may borrow from the caller for `'a`, so a short-lived `Callbacks`
/// can write straight into local state. Events without a handler are dropped.
///
/// # Example
///
/// ```
/// use crossword_core::{Alphabet, ClueDefinition, Puzzle};
/// use crossword_game::{Callbacks, Crossword, SessionOptions};
///
/// let puzzle = Puzzle::build(
///     [ClueDefinition::across(1, "pet", "CAT", 0, 0)],
///     Alphabet::default(),
/// )?;
/// let mut messages = Vec::new();
/// let mut callbacks = Callbacks::default()
///     .on_correct(|direction, number, answer| {
///         messages.push(format!("onCorrect: {direction} {number} {answer}"));
///     });
/// let mut crossword = Crossword::new(puzzle, SessionOptions::default(), &mut callbacks);
/// crossword.fill_all_answers(&mut callbacks);
/// drop(callbacks);
///
/// assert_eq!(messages, ["onCorrect: across 1 CAT"]);
/// # Ok::<(), crossword_core::LayoutError>(())
/// ```
#[derive(Default)]
pub struct Callbacks<'a> {
    on_correct: Option<CorrectFn<'a>>,
    on_loaded_correct: Option<LoadedCorrectFn<'a>>,
    on_crossword_correct: Option<CrosswordCorrectFn<'a>>,
    on_cell_change: Option<CellChangeFn<'a>>,
}

impl<'a> Callbacks<'a> {
    /// Sets the handler called with `(direction, number, answer)` when a clue becomes correct.
    #[must_use]
    pub fn on_correct(mut self, f: impl FnMut(Direction, u32, &str) + 'a) -> Self {
        self.on_correct = Some(Box::new(f));
        self
    }

    /// Sets the handler called with the clues already correct at load.
    #[must_use]
    pub fn on_loaded_correct(mut self, f: impl FnMut(&[AnswerTuple]) + 'a) -> Self {
        self.on_loaded_correct = Some(Box::new(f));
        self
    }

    /// Sets the handler called when whole-crossword correctness changes.
    #[must_use]
    pub fn on_crossword_correct(mut self, f: impl FnMut(bool) + 'a) -> Self {
        self.on_crossword_correct = Some(Box::new(f));
        self
    }

    /// Sets the handler called with `(row, col, guess)` when a single cell is written.
    #[must_use]
    pub fn on_cell_change(mut self, f: impl FnMut(usize, usize, Option<char>) + 'a) -> Self {
        self.on_cell_change = Some(Box::new(f));
        self
    }
}

impl EventSink for Callbacks<'_> {
    fn emit(&mut self, event: CrosswordEvent) {
        match event {
            CrosswordEvent::CellChange { row, col, guess } => {
                if let Some(f) = &mut self.on_cell_change {
                    f(row, col, guess);
                }
            }
            CrosswordEvent::Correct(tuple) => {
                if let Some(f) = &mut self.on_correct {
                    f(tuple.direction, tuple.number, &tuple.answer);
                }
            }
            CrosswordEvent::LoadedCorrect(tuples) => {
                if let Some(f) = &mut self.on_loaded_correct {
                    f(&tuples);
                }
            }
            CrosswordEvent::CrosswordCorrect(is_correct) => {
                if let Some(f) = &mut self.on_crossword_correct {
                    f(is_correct);
                }
            }
        }
    }
}

impl fmt::Debug for Callbacks<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_correct", &self.on_correct.is_some())
            .field("on_loaded_correct", &self.on_loaded_correct.is_some())
            .field("on_crossword_correct", &self.on_crossword_correct.is_some())
            .field("on_cell_change", &self.on_cell_change.is_some())
            .finish()
    }
}
