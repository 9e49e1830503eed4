//! Play-session state for crossword puzzles.
//!
//! A [`Crossword`] owns a [`Puzzle`](crossword_core::Puzzle) layout, the
//! player's guesses, and the cursor. Hosts drive it with guesses and
//! navigation commands, and receive [`CrosswordEvent`]s through an
//! [`EventSink`] passed to each mutating call.
//!
//! Events are edge-triggered: a clue is reported [`Correct`] only when it goes
//! from not correct to correct, and whole-crossword correctness is reported
//! only when it changes.
//!
//! [`Correct`]: CrosswordEvent::Correct
//!
//! # Examples
//!
//! ```
//! use crossword_core::{Alphabet, ClueEntry, Puzzle, PuzzleData};
//! use crossword_game::{Callbacks, Crossword, SessionOptions};
//!
//! let data = PuzzleData::default()
//!     .with_across(1, ClueEntry::new("apple", "りんご", 0, 0))
//!     .with_down(2, ClueEntry::new("gorilla", "ごりら", 0, 2));
//! let puzzle = Puzzle::from_data(data, Alphabet::Kana)?;
//!
//! let mut log = Vec::new();
//! let mut callbacks = Callbacks::default()
//!     .on_correct(|direction, number, answer| {
//!         log.push(format!("{number}-{direction}: {answer}"));
//!     });
//!
//! let mut crossword = Crossword::new(puzzle, SessionOptions::default(), &mut callbacks);
//! crossword.fill_all_answers(&mut callbacks);
//! drop(callbacks);
//!
//! assert_eq!(log, ["1-across: りんご", "2-down: ごりら"]);
//! # Ok::<(), crossword_core::LayoutError>(())
//! ```

pub use self::{error::*, event::*, game::*, guess::*, navigation::*, options::*};

pub mod correctness;
mod error;
mod event;
mod game;
mod guess;
mod navigation;
mod options;
