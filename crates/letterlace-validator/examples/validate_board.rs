//! Example validating a board file against a word list.
//!
//! This example shows how to:
//! - Load a `WordList` from a file
//! - Parse a `Grid` from its text form
//! - Run the gated or ungated validation and print per-tile feedback
//!
//! # Usage
//!
//! ```sh
//! cargo run --example validate_board -- --words words.txt board.txt
//! ```
//!
//! Skip the connectivity gate and only check words:
//!
//! ```sh
//! cargo run --example validate_board -- --words words.txt --ungated board.txt
//! ```
//!
//! Set `RUST_LOG=debug` (or `trace`) to see the validator's log output.

use std::{fs, path::PathBuf, process};

use clap::Parser;
use letterlace_core::{Grid, TileState};
use letterlace_validator::{BoardValidator, ValidationResult, WordList, connected_regions};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Word list file, one word per line.
    #[arg(short, long, value_name = "FILE")]
    words: PathBuf,

    /// Check words without requiring the letters to be connected.
    #[arg(long)]
    ungated: bool,

    /// Board file: one line per row, `.` for empty tiles.
    #[arg(value_name = "BOARD")]
    board: PathBuf,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();

    let words = match WordList::load(&args.words) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("{}: {e}", args.words.display());
            process::exit(1);
        }
    };
    let grid = match fs::read_to_string(&args.board)
        .map_err(|e| e.to_string())
        .and_then(|text| text.parse::<Grid>().map_err(|e| e.to_string()))
    {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("{}: {e}", args.board.display());
            process::exit(1);
        }
    };

    let validator = BoardValidator::new(words);
    let result = if args.ungated {
        validator.validate_words(&grid)
    } else {
        validator.validate(&grid)
    };

    print_result(&grid, &result);
    if !result.all_valid() {
        process::exit(2);
    }
}

fn print_result(grid: &Grid, result: &ValidationResult) {
    println!("Board:");
    for line in grid.to_string().lines() {
        println!("  {line}");
    }
    println!();

    println!("Feedback:");
    for row in result.grid().rows() {
        let marks: String = row
            .iter()
            .map(|tile| match tile.state() {
                TileState::Idle => '.',
                TileState::Valid => '+',
                TileState::Invalid => 'x',
            })
            .collect();
        println!("  {marks}");
    }
    println!();

    println!("Words:");
    for checked in result.words() {
        let word = checked.word();
        let mark = if checked.is_valid() { "ok" } else { "no" };
        println!(
            "  [{mark}] {} ({} at {})",
            word.text(),
            word.orientation(),
            word.start()
        );
    }
    println!();

    println!("Islands: {}", connected_regions(grid).len());
    println!("Correct letters: {}", result.correct_letter_count());
    println!("Verdict: {}", result.verdict());
}
