//! Candidate word extraction.
//!
//! A candidate word is a maximal run of two or more consecutive letters along a
//! row or a column. Runs break only at empty tiles and at the board edge.

use letterlace_core::{Grid, Line, Orientation, Position};

/// A run of letters read off the board, waiting for a dictionary check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateWord {
    text: String,
    start: Position,
    orientation: Orientation,
    len: u8,
}

impl CandidateWord {
    /// Returns the lowercased text of the word.
    #[must_use]
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the position of the word's first letter.
    #[must_use]
    #[inline]
    pub const fn start(&self) -> Position {
        self.start
    }

    /// Returns the direction the word is read in.
    #[must_use]
    #[inline]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the number of tiles the word spans.
    #[must_use]
    #[inline]
    pub const fn len(&self) -> u8 {
        self.len
    }

    /// Returns `true` if the word spans no tiles. Extracted words never do.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the positions the word spans, first letter first.
    ///
    /// Positions are computed from the start and length only and are not
    /// clipped to any board.
    pub fn positions(&self) -> impl ExactSizeIterator<Item = Position> + '_ {
        (0..self.len).map(|i| self.orientation.step(self.start, i))
    }
}

/// Returns the candidate words along every line of the given orientation.
///
/// Lines are scanned in increasing index order and each line from its lowest
/// index, so the result is ordered by line and then by start offset.
#[must_use]
pub fn extract_words(grid: &Grid, orientation: Orientation) -> Vec<CandidateWord> {
    match orientation {
        Orientation::Row => extract_row_words(grid),
        Orientation::Column => extract_column_words(grid),
    }
}

/// Returns the candidate words of both orientations, row words first.
///
/// # Examples
///
/// ```
/// use letterlace_core::{Grid, Orientation, Position};
/// use letterlace_validator::extract_all_words;
///
/// let grid: Grid = "
///     CAT
///     O..
///     T..
/// "
/// .parse()?;
///
/// let words = extract_all_words(&grid);
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[0].text(), "cat");
/// assert_eq!(words[1].text(), "cot");
/// assert_eq!(words[1].orientation(), Orientation::Column);
/// assert_eq!(words[1].start(), Position::new(0, 0));
/// # Ok::<(), letterlace_core::GridParseError>(())
/// ```
#[must_use]
pub fn extract_all_words(grid: &Grid) -> Vec<CandidateWord> {
    Orientation::ALL
        .into_iter()
        .flat_map(|orientation| extract_words(grid, orientation))
        .collect()
}

/// Returns the candidate words read left to right along each row.
#[must_use]
pub fn extract_row_words(grid: &Grid) -> Vec<CandidateWord> {
    let mut words = vec![];
    for line in Line::all(Orientation::Row, grid.size()) {
        scan_line(grid, line, &mut words);
    }
    words
}

/// Returns the candidate words read top to bottom along each column.
#[must_use]
pub fn extract_column_words(grid: &Grid) -> Vec<CandidateWord> {
    let mut words = vec![];
    for line in Line::all(Orientation::Column, grid.size()) {
        scan_line(grid, line, &mut words);
    }
    words
}

#[derive(Debug)]
struct Run {
    start: Position,
    text: String,
    len: u8,
}

impl Run {
    fn new(start: Position) -> Self {
        Self {
            start,
            text: String::new(),
            len: 0,
        }
    }

    fn push(&mut self, c: char) {
        self.text.push(c);
        self.len += 1;
    }

    fn complete(self, orientation: Orientation, words: &mut Vec<CandidateWord>) {
        // Single letters are never words.
        if self.len < 2 {
            return;
        }
        words.push(CandidateWord {
            text: self.text.to_lowercase(),
            start: self.start,
            orientation,
            len: self.len,
        });
    }
}

fn scan_line(grid: &Grid, line: Line, words: &mut Vec<CandidateWord>) {
    let orientation = line.orientation();
    let mut run: Option<Run> = None;

    for pos in line.positions(grid.size()) {
        match grid[pos].letter_value() {
            Some(c) => run.get_or_insert_with(|| Run::new(pos)).push(c),
            None => {
                if let Some(run) = run.take() {
                    run.complete(orientation, words);
                }
            }
        }
    }

    if let Some(run) = run {
        run.complete(orientation, words);
    }
}
