//! Replays a short scripted play-through against two independent sessions.
//!
//! Each session receives the same commands: focus the grid, write the first
//! letter of 2-down, fill all answers, then reset. The events raised by each
//! session are printed as they arrive.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example replay_demo
//! ```
//!
//! Load the puzzle from a JSON file instead of the built-in one:
//!
//! ```sh
//! cargo run --example replay_demo -- --puzzle puzzle.json --alphabet case-insensitive
//! ```
//!
//! The file uses the `{"across": {"1": {"clue": .., "answer": .., "row": .., "col": ..}}, "down": {..}}`
//! shape. Set `RUST_LOG=debug` to see session logging.

use std::{
    fs,
    path::{Path, PathBuf},
    process,
};

use clap::{Parser, ValueEnum};
use crossword_core::{Alphabet, ClueEntry, Position, Puzzle, PuzzleData};
use crossword_game::{
    Crossword, CrosswordEvent, EventQueue, GuessError, SessionOptions, WrapPolicy,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AlphabetArg {
    Exact,
    CaseInsensitive,
    Kana,
}

impl From<AlphabetArg> for Alphabet {
    fn from(arg: AlphabetArg) -> Self {
        match arg {
            AlphabetArg::Exact => Self::Exact,
            AlphabetArg::CaseInsensitive => Self::CaseInsensitive,
            AlphabetArg::Kana => Self::Kana,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum WrapArg {
    Stop,
    SameDirection,
    OtherDirection,
}

impl From<WrapArg> for WrapPolicy {
    fn from(arg: WrapArg) -> Self {
        match arg {
            WrapArg::Stop => Self::Stop,
            WrapArg::SameDirection => Self::SameDirection,
            WrapArg::OtherDirection => Self::OtherDirection,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle data as JSON. Defaults to a two-clue kana puzzle.
    #[arg(long, value_name = "PATH")]
    puzzle: Option<PathBuf>,

    /// Character comparison policy for answers and guesses.
    #[arg(long, value_name = "ALPHABET", default_value = "kana")]
    alphabet: AlphabetArg,

    /// Cursor behavior after the last clue of a direction.
    #[arg(long, value_name = "POLICY", default_value = "other-direction")]
    wrap: WrapArg,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let data = match &args.puzzle {
        Some(path) => load_data(path).unwrap_or_else(|message| {
            eprintln!("{message}");
            process::exit(1);
        }),
        None => builtin_data(),
    };
    let puzzle = Puzzle::from_data(data, args.alphabet.into()).unwrap_or_else(|err| {
        eprintln!("Invalid puzzle: {err}");
        process::exit(1);
    });
    let options = SessionOptions::default().wrap_policy(args.wrap.into());

    print_grid(&puzzle);

    // Same commands, different first-letter guesses: one right, one wrong.
    for (name, first_letter) in [("standalone", 'ご'), ("provider", 'O')] {
        println!();
        println!("[{name}]");
        if let Err(err) = replay(puzzle.clone(), options, first_letter) {
            eprintln!("{name}: {err}");
            process::exit(1);
        }
    }
}

fn builtin_data() -> PuzzleData {
    PuzzleData::default()
        .with_across(1, ClueEntry::new("apple", "りんご", 0, 0))
        .with_down(2, ClueEntry::new("gorilla", "ごりら", 0, 2))
}

fn load_data(path: &Path) -> Result<PuzzleData, String> {
    let text = fs::read_to_string(path)
        .map_err(|err| format!("Failed to read {}: {err}", path.display()))?;
    serde_json::from_str(&text).map_err(|err| format!("Failed to parse {}: {err}", path.display()))
}

fn replay(puzzle: Puzzle, options: SessionOptions, first_letter: char) -> Result<(), GuessError> {
    let mut events = EventQueue::default();
    let mut crossword = Crossword::new(puzzle, options, &mut events);
    print_events(&mut events);

    println!("> focus");
    crossword.focus();
    let state = crossword.focus_state();
    println!(
        "  cursor on {}-{} at {}",
        state.number,
        state.direction,
        state
            .cell
            .map_or_else(|| "nowhere".to_owned(), |pos| pos.to_string())
    );

    println!("> set guess (0, 2) = {first_letter}");
    crossword.set_guess(Position::new(0, 2), Some(first_letter), &mut events)?;
    print_events(&mut events);

    println!("> fill all answers");
    crossword.fill_all_answers(&mut events);
    print_events(&mut events);

    println!("> reset");
    crossword.reset(&mut events);
    print_events(&mut events);

    Ok(())
}

fn print_events(events: &mut EventQueue) {
    for event in events.take_all() {
        match event {
            CrosswordEvent::CellChange { row, col, guess } => {
                let guess = guess.map(String::from).unwrap_or_default();
                println!("  onCellChange: \"{row}\", \"{col}\", \"{guess}\"");
            }
            CrosswordEvent::Correct(tuple) => {
                println!(
                    "  onCorrect: \"{}\", \"{}\", \"{}\"",
                    tuple.direction, tuple.number, tuple.answer
                );
            }
            CrosswordEvent::LoadedCorrect(tuples) => {
                println!("  onLoadedCorrect:");
                for tuple in tuples {
                    println!(
                        "      - \"{}\", \"{}\", \"{}\"",
                        tuple.direction, tuple.number, tuple.answer
                    );
                }
            }
            CrosswordEvent::CrosswordCorrect(is_correct) => {
                println!("  onCrosswordCorrect: {is_correct}");
            }
        }
    }
}

fn print_grid(puzzle: &Puzzle) {
    println!("Grid ({} x {}):", puzzle.rows(), puzzle.cols());
    for row in 0..puzzle.rows() {
        let line = (0..puzzle.cols())
            .map(|col| {
                puzzle
                    .cell_at(Position::new(row, col))
                    .map_or('#', |cell| puzzle.cell(cell).expected())
            })
            .collect::<String>();
        println!("  {line}");
    }
    println!("Clues:");
    for clue in puzzle.clues() {
        println!("  {}: {}", clue.id(), clue.text());
    }
}
