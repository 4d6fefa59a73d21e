//! Benchmarks for board validation.
//!
//! # Benchmarks
//!
//! - **`connectivity`**: connectivity check alone.
//! - **`validate`**: connectivity-gated validation, including word extraction
//!   and dictionary lookups.
//!
//! # Test Data
//!
//! - **`crossword_6`**: a fully valid 6×6 crossword.
//! - **`demotion_6`**: the same layout with one rejected crossing word.
//! - **`dense_15`**: a 15×15 board with every other row filled.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench validator
//! ```

use std::{hint, time::Duration};

use criterion::{BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main};
use letterlace_core::Grid;
use letterlace_validator::{BoardValidator, WordList, is_single_connected_region};

const WORDS: &str = "
cat
cot
top
tip
tan
pan
nap
ant
pat
apt
";

fn boards() -> Vec<(&'static str, Grid)> {
    let crossword: Grid = "
        cat...
        o.o...
        tip...
        ..pan.
        ......
        ......
    "
    .parse()
    .unwrap();
    let demotion: Grid = "
        cat...
        o.x...
        tip...
        ..pan.
        ......
        ......
    "
    .parse()
    .unwrap();
    let dense: Grid = (0..15)
        .map(|row| {
            if row % 2 == 0 {
                "tantantantantan\n".to_owned()
            } else {
                "a..............\n".to_owned()
            }
        })
        .collect::<String>()
        .parse()
        .unwrap();
    vec![
        ("crossword_6", crossword),
        ("demotion_6", demotion),
        ("dense_15", dense),
    ]
}

fn bench_connectivity(c: &mut Criterion) {
    for (name, grid) in boards() {
        c.bench_with_input(BenchmarkId::new("connectivity", name), &grid, |b, grid| {
            b.iter(|| is_single_connected_region(hint::black_box(grid)));
        });
    }
}

fn bench_validate(c: &mut Criterion) {
    let validator = BoardValidator::new(WordList::parse(WORDS).unwrap());
    for (name, grid) in boards() {
        c.bench_with_input(BenchmarkId::new("validate", name), &grid, |b, grid| {
            b.iter(|| validator.validate(hint::black_box(grid)));
        });
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(5));
    targets =
        bench_connectivity,
        bench_validate
);
criterion_main!(benches);
