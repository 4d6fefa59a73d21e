//! Dictionary membership oracle.

use std::{
    collections::{BTreeSet, HashSet, hash_set},
    fs, io,
    path::Path,
    str::FromStr,
};

/// A set of accepted words.
///
/// The validator only ever asks whether a word is present. Callers pass
/// already-lowercased text; implementations perform no case folding, trimming
/// or other normalisation and answer `false` for anything they do not know.
///
/// Lookups must be free of side effects so that one dictionary can serve any
/// number of validations, including concurrent ones.
pub trait Dictionary {
    /// Returns `true` if `word` is an accepted word.
    fn contains(&self, word: &str) -> bool;
}

impl Dictionary for HashSet<String> {
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}

impl Dictionary for BTreeSet<String> {
    fn contains(&self, word: &str) -> bool {
        BTreeSet::contains(self, word)
    }
}

impl<D> Dictionary for &D
where
    D: Dictionary + ?Sized,
{
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

impl<D> Dictionary for Box<D>
where
    D: Dictionary + ?Sized,
{
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

/// Errors that can occur while loading a [`WordList`].
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum DictionaryError {
    /// The word list file could not be read.
    #[display("failed to read word list: {_0}")]
    #[from]
    Io(io::Error),
    /// A line holds something other than a single word.
    #[display("invalid entry on line {line}: {entry:?}")]
    InvalidEntry {
        /// One-based line number.
        line: usize,
        /// The offending entry, trimmed.
        entry: String,
    },
}

/// An in-memory word list, the standard [`Dictionary`].
///
/// The text format has one word per line. Entries are trimmed and lowercased;
/// blank lines and lines starting with `#` are skipped.
///
/// # Examples
///
/// ```
/// use letterlace_validator::{Dictionary, WordList};
///
/// let words = WordList::parse("# animals\nCat\ncow\n\n")?;
/// assert_eq!(words.len(), 2);
/// assert!(words.contains("cat"));
/// assert!(!words.contains("Cat"));
/// # Ok::<(), letterlace_validator::DictionaryError>(())
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    /// Creates an empty word list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a word list from text.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::InvalidEntry`] if a line contains more than one word.
    pub fn parse(contents: &str) -> Result<Self, DictionaryError> {
        let mut words = HashSet::new();
        for (i, raw) in contents.lines().enumerate() {
            let entry = raw.trim();
            if entry.is_empty() || entry.starts_with('#') {
                continue;
            }
            if entry.contains(char::is_whitespace) {
                return Err(DictionaryError::InvalidEntry {
                    line: i + 1,
                    entry: entry.to_owned(),
                });
            }
            words.insert(entry.to_lowercase());
        }
        log::debug!("parsed word list with {} entries", words.len());
        Ok(Self { words })
    }

    /// Reads and parses a word list file.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Io`] if the file cannot be read, or
    /// [`DictionaryError::InvalidEntry`] if its contents are malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Returns the number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the list holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns an iterator over the words in arbitrary order.
    pub fn iter(&self) -> hash_set::Iter<'_, String> {
        self.words.iter()
    }
}

impl Dictionary for WordList {
    #[inline]
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

impl FromStr for WordList {
    type Err = DictionaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<S> FromIterator<S> for WordList
where
    S: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a String;
    type IntoIter = hash_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let words = WordList::parse("# header\n\n  dog  \n#cat\nEMU\n").unwrap();
        let mut sorted: Vec<_> = words.iter().cloned().collect();
        sorted.sort();
        assert_eq!(sorted, ["dog", "emu"]);
    }

    #[test]
    fn test_parse_rejects_phrases() {
        let err = WordList::parse("cat\nice cream\n").unwrap_err();
        assert!(matches!(
            err,
            DictionaryError::InvalidEntry { line: 2, ref entry } if entry == "ice cream"
        ));
    }

    #[test]
    fn test_contains_does_not_normalise() {
        let words: WordList = ["cat"].into_iter().collect();
        assert!(words.contains("cat"));
        assert!(!words.contains("CAT"));
        assert!(!words.contains(" cat"));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = WordList::load("/nonexistent/letterlace/words.txt").unwrap_err();
        assert!(matches!(err, DictionaryError::Io(_)));
    }

    #[test]
    fn test_std_sets_are_dictionaries() {
        let hash: HashSet<String> = ["sun".to_owned()].into_iter().collect();
        let btree: BTreeSet<String> = ["sun".to_owned()].into_iter().collect();
        let boxed: Box<dyn Dictionary> = Box::new(hash.clone());
        assert!(Dictionary::contains(&hash, "sun"));
        assert!(Dictionary::contains(&btree, "sun"));
        assert!(boxed.contains("sun"));
        assert!(!Dictionary::contains(&&btree, "moon"));
    }
}
