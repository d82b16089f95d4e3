//! Stopword list loading.
//!
//! The list is a plain-text file with one word per line. It is loaded once
//! per run; a missing or unreadable file is reported as
//! [`ChatstreakError::MissingResource`].
//!
//! # Example
//!
//! ```
//! use chatstreak::stopwords::StopwordSet;
//!
//! let stopwords = StopwordSet::parse("the\nand\n\n  of  \n");
//! assert_eq!(stopwords.len(), 3);
//! assert!(stopwords.contains("of"));
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::ChatstreakError;

/// Set of words excluded from the vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a stopword file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstreakError::MissingResource`] if the file can't be read.
    pub fn from_file(path: &Path) -> Result<Self, ChatstreakError> {
        let text = fs::read_to_string(path)
            .map_err(|e| ChatstreakError::missing_resource("stopword list", path, e))?;
        let set = Self::parse(&text);
        tracing::debug!(path = %path.display(), words = set.len(), "loaded stopwords");
        Ok(set)
    }

    /// Parses one word per line. Lines are trimmed and blank lines skipped.
    pub fn parse(text: &str) -> Self {
        // Trimming drops stray `\r` and trailing spaces, which would
        // otherwise never match a segmented token.
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }

    /// Returns `true` if `word` is a stopword.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Adds a word to the set.
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        self.words.insert(word.into())
    }

    /// Number of stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for StopwordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}
