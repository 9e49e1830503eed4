//! Benchmarks for puzzle layout and session batch operations.
//!
//! # Benchmarks
//!
//! - **`layout_build`**: Builds a [`Puzzle`] from clue definitions, including
//!   intersection checks.
//! - **`fill_reset_cycle`**: Fills every answer and resets again on a fresh
//!   session, raising the full set of correctness events each time.
//!
//! # Test Data
//!
//! Square lattices of interlocking words: every even row holds an across clue
//! and every even column a down clue, so each even/even cell is an
//! intersection.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench session
//! ```

use std::{hint, time::Duration};

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use crossword_core::{Alphabet, ClueDefinition, Puzzle};
use crossword_game::{Crossword, IgnoreEvents, SessionOptions};

const SIZES: [usize; 3] = [5, 15, 45];

fn lattice(size: usize) -> Vec<ClueDefinition> {
    let answer = "A".repeat(size);
    let mut number = 0;
    let mut definitions = Vec::new();
    for line in (0..size).step_by(2) {
        number += 1;
        definitions.push(ClueDefinition::across(number, "row", answer.clone(), line, 0));
        number += 1;
        definitions.push(ClueDefinition::down(number, "column", answer.clone(), 0, line));
    }
    definitions
}

fn bench_layout_build(c: &mut Criterion) {
    for size in SIZES {
        let definitions = lattice(size);
        c.bench_with_input(
            BenchmarkId::new("layout_build", format!("{size}x{size}")),
            &definitions,
            |b, definitions| {
                b.iter_batched(
                    || hint::black_box(definitions.clone()),
                    |definitions| Puzzle::build(definitions, Alphabet::default()).unwrap(),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_fill_reset_cycle(c: &mut Criterion) {
    for size in SIZES {
        let puzzle = Puzzle::build(lattice(size), Alphabet::default()).unwrap();
        c.bench_with_input(
            BenchmarkId::new("fill_reset_cycle", format!("{size}x{size}")),
            &puzzle,
            |b, puzzle| {
                b.iter_batched(
                    || Crossword::new(puzzle.clone(), SessionOptions::default(), &mut IgnoreEvents),
                    |mut crossword| {
                        crossword.fill_all_answers(&mut IgnoreEvents);
                        crossword.reset(&mut IgnoreEvents);
                        crossword
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(8));
    targets =
        bench_layout_build,
        bench_fill_reset_cycle
);
criterion_main!(benches);
