//! Test utilities for board validation.
//!
//! This module provides [`BoardTester`], a fluent harness for checking how the
//! validator classifies a board.
//!
//! # Example
//!
//! ```
//! use letterlace_core::{Position, TileState};
//! use letterlace_validator::{Verdict, WordList, testing::BoardTester};
//!
//! BoardTester::from_str(
//!     "
//!     cat.
//!     ....
//!     ....
//!     ....
//! ",
//! )
//! .assert_connected(true)
//! .validate(&WordList::from_iter(["cat"]))
//! .assert_verdict(Verdict::Accepted)
//! .assert_state(Position::new(0, 2), TileState::Valid);
//! ```

use letterlace_core::{Grid, Position, TileState};

use crate::{BoardValidator, Dictionary, ValidationResult, Verdict, is_single_connected_region};

/// A test harness for validating a board and asserting on the outcome.
///
/// # Method Chaining
///
/// All methods return `self`, enabling fluent method chaining for readable tests.
///
/// # Panics
///
/// All assertion methods panic with detailed messages on failure, using
/// `#[track_caller]` to report the correct source location. Result assertions
/// panic if neither [`validate`](Self::validate) nor
/// [`validate_words`](Self::validate_words) has been called yet.
#[derive(Debug)]
pub struct BoardTester {
    initial: Grid,
    result: Option<ValidationResult>,
}

impl BoardTester {
    /// Creates a new tester for a board.
    #[must_use]
    pub fn new(initial: Grid) -> Self {
        Self {
            initial,
            result: None,
        }
    }

    /// Creates a new tester from board text.
    ///
    /// The string format matches [`Grid`]'s `FromStr` implementation:
    /// - `.` or `_` represent empty tiles
    /// - any other character is a letter
    /// - whitespace is ignored
    ///
    /// # Panics
    ///
    /// Panics if the string cannot be parsed as a square grid.
    #[track_caller]
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        let grid = s.parse().unwrap();
        Self::new(grid)
    }

    /// Runs the connectivity-gated validation.
    pub fn validate<D>(mut self, dictionary: &D) -> Self
    where
        D: Dictionary,
    {
        self.result = Some(BoardValidator::new(dictionary).validate(&self.initial));
        self
    }

    /// Runs the word validation without the connectivity gate.
    pub fn validate_words<D>(mut self, dictionary: &D) -> Self
    where
        D: Dictionary,
    {
        self.result = Some(BoardValidator::new(dictionary).validate_words(&self.initial));
        self
    }

    /// Returns the latest validation result.
    ///
    /// # Panics
    ///
    /// Panics if the board has not been validated yet.
    #[track_caller]
    #[must_use]
    pub fn result(&self) -> &ValidationResult {
        self.result
            .as_ref()
            .expect("call validate or validate_words before asserting on the result")
    }

    /// Asserts the connectivity of the initial board.
    #[track_caller]
    pub fn assert_connected(self, expected: bool) -> Self {
        let actual = is_single_connected_region(&self.initial);
        assert_eq!(
            actual, expected,
            "Expected connectivity {expected}, got {actual} for board:\n{}",
            self.initial
        );
        self
    }

    /// Asserts the overall verdict.
    #[track_caller]
    pub fn assert_verdict(self, expected: Verdict) -> Self {
        let actual = self.result().verdict();
        assert_eq!(
            actual, expected,
            "Expected verdict {expected:?}, got {actual:?} for board:\n{}",
            self.initial
        );
        self
    }

    /// Asserts whether the board passed.
    #[track_caller]
    pub fn assert_all_valid(self, expected: bool) -> Self {
        let actual = self.result().all_valid();
        assert_eq!(
            actual, expected,
            "Expected all_valid to be {expected}, got {actual} (verdict {:?})",
            self.result().verdict()
        );
        self
    }

    /// Asserts the state of the tile at `pos`.
    #[track_caller]
    pub fn assert_state(self, pos: Position, expected: TileState) -> Self {
        let actual = self.result().grid()[pos].state();
        assert_eq!(
            actual, expected,
            "Expected tile {pos} to be {expected}, but it is {actual}"
        );
        self
    }

    /// Asserts the number of tiles classified as valid.
    #[track_caller]
    pub fn assert_correct_letters(self, expected: usize) -> Self {
        let actual = self.result().correct_letter_count();
        assert_eq!(
            actual, expected,
            "Expected {expected} correct letters, got {actual}"
        );
        self
    }

    /// Asserts the texts of the rejected words, in check order.
    #[track_caller]
    pub fn assert_invalid_words(self, expected: &[&str]) -> Self {
        let actual: Vec<_> = self.result().invalid_words().map(|w| w.text()).collect();
        assert_eq!(actual, expected, "Unexpected invalid words");
        self
    }

    /// Asserts that no word reached the dictionary.
    #[track_caller]
    pub fn assert_no_words_checked(self) -> Self {
        let checked = self.result().words();
        assert!(
            checked.is_empty(),
            "Expected no words to be checked, got {checked:?}"
        );
        self
    }
}
