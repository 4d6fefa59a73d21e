//! Board validation engine for Letterlace.
//!
//! Given a snapshot of the board, the engine decides whether the placed
//! letters form an acceptable crossword and classifies every tile for display.
//!
//! # Components
//!
//! - [`dictionary`]: the [`Dictionary`] membership oracle and the [`WordList`] implementation
//! - [`connectivity`]: checks that all letters form one orthogonally connected group
//! - [`extractor`]: reads candidate words (runs of two or more letters) off rows and columns
//! - [`validator`]: [`BoardValidator`], which combines the above into a [`ValidationResult`]
//!
//! # Pipeline
//!
//! [`BoardValidator::validate`] first gates on connectivity, then extracts row
//! words followed by column words, looks each one up, and classifies tiles:
//! tiles of accepted words become valid, then any valid tile that is also part
//! of a rejected word is demoted to invalid.
//!
//! # Examples
//!
//! ```
//! use letterlace_core::Grid;
//! use letterlace_validator::{BoardValidator, WordList};
//!
//! let dictionary = WordList::parse("cat\ncot\ntop\ntip\n")?;
//! let validator = BoardValidator::new(dictionary);
//!
//! let grid: Grid = "
//!     cat
//!     o.o
//!     tip
//! "
//! .parse()?;
//!
//! let result = validator.validate(&grid);
//! assert!(result.all_valid());
//! assert_eq!(result.correct_letter_count(), 8);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod connectivity;
pub mod dictionary;
pub mod extractor;
pub mod testing;
pub mod validator;

pub use self::{
    connectivity::{connected_regions, is_single_connected_region},
    dictionary::{Dictionary, DictionaryError, WordList},
    extractor::{
        CandidateWord, extract_all_words, extract_column_words, extract_row_words, extract_words,
    },
    validator::{BoardValidator, CheckedWord, ValidationResult, Verdict},
};
