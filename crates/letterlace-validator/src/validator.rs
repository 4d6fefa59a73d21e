//! Board validation and per-tile classification.

use letterlace_core::{Grid, Tile, TileState};

use crate::{CandidateWord, Dictionary, extract_all_words, is_single_connected_region};

/// Overall outcome of a validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum Verdict {
    /// Every candidate word is in the dictionary.
    #[display("accepted")]
    Accepted,
    /// No letters are placed.
    #[display("board is empty")]
    EmptyBoard,
    /// The letters form more than one group.
    #[display("letters are not connected")]
    Disconnected,
    /// At least one candidate word is not in the dictionary.
    #[display("board contains invalid words")]
    InvalidWords,
}

/// A candidate word together with its dictionary verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedWord {
    word: CandidateWord,
    is_valid: bool,
}

impl CheckedWord {
    /// Returns the candidate word.
    #[must_use]
    #[inline]
    pub fn word(&self) -> &CandidateWord {
        &self.word
    }

    /// Returns `true` if the dictionary contains the word.
    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }
}

/// The annotated board and overall verdict produced by [`BoardValidator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    grid: Grid,
    verdict: Verdict,
    words: Vec<CheckedWord>,
}

impl ValidationResult {
    fn rejected(grid: &Grid, verdict: Verdict) -> Self {
        let mut grid = grid.clone();
        reset_states(&mut grid);
        Self {
            grid,
            verdict,
            words: vec![],
        }
    }

    /// Returns the board with recomputed tile states.
    ///
    /// Tile identities, positions and letters are those of the input board.
    #[must_use]
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consumes the result and returns the annotated board.
    #[must_use]
    #[inline]
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Consumes the result and returns the annotated board and whether it passed.
    #[must_use]
    pub fn into_parts(self) -> (Grid, bool) {
        let all_valid = self.all_valid();
        (self.grid, all_valid)
    }

    /// Returns the overall verdict.
    #[must_use]
    #[inline]
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Returns `true` if the board was accepted.
    #[must_use]
    #[inline]
    pub fn all_valid(&self) -> bool {
        self.verdict.is_accepted()
    }

    /// Returns every candidate word that was checked, row words first.
    ///
    /// Empty when validation was short-circuited by the connectivity gate.
    #[must_use]
    #[inline]
    pub fn words(&self) -> &[CheckedWord] {
        &self.words
    }

    /// Returns the candidate words missing from the dictionary.
    pub fn invalid_words(&self) -> impl Iterator<Item = &CandidateWord> {
        self.words
            .iter()
            .filter(|checked| !checked.is_valid)
            .map(CheckedWord::word)
    }

    /// Returns the number of tiles classified as [`TileState::Valid`].
    #[must_use]
    pub fn correct_letter_count(&self) -> usize {
        self.grid.states().filter(|state| state.is_valid()).count()
    }
}

/// Validates boards against a [`Dictionary`].
///
/// Two entry points are provided:
///
/// - [`validate`](Self::validate) checks connectivity first and only looks at
///   words if all letters form one group.
/// - [`validate_words`](Self::validate_words) skips the connectivity check, for
///   callers that gate on [`is_single_connected_region`] themselves.
///
/// Neither entry point modifies its input; both return a new annotated board.
///
/// # Examples
///
/// ```
/// use letterlace_core::{Grid, Position, TileState};
/// use letterlace_validator::{BoardValidator, Verdict, WordList};
///
/// let validator = BoardValidator::new(WordList::from_iter(["cat"]));
/// let grid: Grid = "
///     cat
///     o..
///     t..
/// "
/// .parse()?;
///
/// let result = validator.validate(&grid);
/// assert_eq!(result.verdict(), Verdict::InvalidWords);
/// // "cot" is not a word, so the shared tile is demoted.
/// assert_eq!(result.grid()[Position::new(0, 0)].state(), TileState::Invalid);
/// assert_eq!(result.grid()[Position::new(0, 1)].state(), TileState::Valid);
/// assert_eq!(result.correct_letter_count(), 2);
/// # Ok::<(), letterlace_core::GridParseError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BoardValidator<D> {
    dictionary: D,
}

impl<D> BoardValidator<D>
where
    D: Dictionary,
{
    /// Creates a validator backed by `dictionary`.
    #[must_use]
    pub fn new(dictionary: D) -> Self {
        Self { dictionary }
    }

    /// Returns the dictionary used for word checks.
    #[must_use]
    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    /// Validates a board, rejecting it early if its letters are not connected.
    ///
    /// An empty board yields [`Verdict::EmptyBoard`] with every tile idle. A
    /// board whose letters form more than one group yields
    /// [`Verdict::Disconnected`] with every letter marked invalid; no words are
    /// extracted or looked up in that case. Otherwise this is
    /// [`validate_words`](Self::validate_words).
    #[must_use]
    pub fn validate(&self, grid: &Grid) -> ValidationResult {
        if grid.letter_count() == 0 {
            log::debug!("validation skipped: board is empty");
            return ValidationResult::rejected(grid, Verdict::EmptyBoard);
        }
        if !is_single_connected_region(grid) {
            log::debug!("validation skipped: letters are not connected");
            return ValidationResult::rejected(grid, Verdict::Disconnected);
        }
        self.validate_words(grid)
    }

    /// Checks every candidate word and classifies each tile, without a
    /// connectivity check.
    ///
    /// The board passes iff every candidate word is in the dictionary; a board
    /// with no candidates therefore passes. Tiles are then classified in two
    /// passes over the candidates:
    ///
    /// 1. every tile of a valid word becomes [`TileState::Valid`];
    /// 2. every tile of an invalid word that is currently valid is demoted to
    ///    [`TileState::Invalid`].
    ///
    /// Letters untouched by either pass stay invalid and empty tiles stay idle.
    #[must_use]
    pub fn validate_words(&self, grid: &Grid) -> ValidationResult {
        let words: Vec<_> = extract_all_words(grid)
            .into_iter()
            .map(|word| {
                let is_valid = self.dictionary.contains(word.text());
                log::trace!(
                    "{} word {:?} at {}: {}",
                    word.orientation(),
                    word.text(),
                    word.start(),
                    if is_valid { "valid" } else { "invalid" }
                );
                CheckedWord { word, is_valid }
            })
            .collect();
        let all_valid = words.iter().all(CheckedWord::is_valid);

        let mut annotated = grid.clone();
        reset_states(&mut annotated);

        // Pass B depends on the outcome of pass A for every word, so the two
        // loops must not be interleaved.
        for checked in words.iter().filter(|checked| checked.is_valid) {
            for_each_spanned_tile(&mut annotated, &checked.word, |tile| {
                tile.set_state(TileState::Valid);
            });
        }
        for checked in words.iter().filter(|checked| !checked.is_valid) {
            for_each_spanned_tile(&mut annotated, &checked.word, |tile| {
                if tile.state().is_valid() {
                    tile.set_state(TileState::Invalid);
                }
            });
        }

        let verdict = if all_valid {
            Verdict::Accepted
        } else {
            Verdict::InvalidWords
        };
        log::debug!("validated {} candidate words: {verdict}", words.len());

        ValidationResult {
            grid: annotated,
            verdict,
            words,
        }
    }
}

fn reset_states(grid: &mut Grid) {
    for tile in grid.tiles_mut() {
        let state = if tile.is_occupied() {
            TileState::Invalid
        } else {
            TileState::Idle
        };
        tile.set_state(state);
    }
}

fn for_each_spanned_tile<F>(grid: &mut Grid, word: &CandidateWord, mut f: F)
where
    F: FnMut(&mut Tile),
{
    let size = grid.size();
    for pos in word.positions() {
        // Column words must never reach past the last row.
        if word.orientation().is_column() && pos.row() >= size {
            continue;
        }
        if let Some(tile) = grid.tile_mut(pos) {
            f(tile);
        }
    }
}
