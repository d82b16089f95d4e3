//! Word frequency table over all message contents.
//!
//! The pipeline:
//!
//! 1. join every record's content with the configured delimiter
//! 2. remove attachment placeholders such as `[Image]`
//! 3. segment the corpus with a [`WordSegmenter`]
//! 4. drop stopwords, short tokens, tokens with digits and author names
//! 5. count, most frequent first; equal counts keep first-seen order
//!
//! # Example
//!
//! ```
//! use chatstreak::config::VocabularyConfig;
//! use chatstreak::core::segmenter::UnicodeWordSegmenter;
//! use chatstreak::core::vocabulary::TokenFilterPipeline;
//! use chatstreak::parser::TranscriptParser;
//! use chatstreak::stopwords::StopwordSet;
//!
//! let parsed = TranscriptParser::new().parse_str(
//!     "Alice 2024/01/01 09:00:00\nthe cake is great\n\
//!      Bob 2024/01/01 09:01:00\ngreat cake Alice[Image]",
//! );
//! let stopwords = StopwordSet::parse("the\nis");
//! let config = VocabularyConfig::default();
//!
//! let table = TokenFilterPipeline::new(&config, &stopwords, UnicodeWordSegmenter)
//!     .run(&parsed.records)?;
//!
//! assert_eq!(table.top(2)[0].token, "cake");
//! assert_eq!(table.get("great"), Some(2));
//! assert_eq!(table.get("Alice"), None);
//! # Ok::<(), chatstreak::ChatstreakError>(())
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::Record;
use crate::config::VocabularyConfig;
use crate::core::segmenter::{WordSegmenter, validate_coverage};
use crate::error::ChatstreakError;
use crate::stopwords::StopwordSet;

static DIGIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d").expect("digit pattern is a valid regex"));

// ============================================================================
// Frequency table
// ============================================================================

/// One vocabulary entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenCount {
    /// The token text.
    pub token: String,
    /// Number of occurrences in the filtered token stream.
    pub count: usize,
}

/// Tokens with their counts, most frequent first.
///
/// Tokens with equal counts appear in the order they were first seen in the
/// filtered token stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenFrequencyTable {
    entries: Vec<TokenCount>,
}

impl TokenFrequencyTable {
    /// All entries in table order.
    pub fn entries(&self) -> &[TokenCount] {
        &self.entries
    }

    /// The first `n` entries (fewer if the table is shorter).
    pub fn top(&self, n: usize) -> &[TokenCount] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Count of `token`, if present.
    pub fn get(&self, token: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|entry| entry.token == token)
            .map(|entry| entry.count)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no token survived filtering.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    /// Iterates over entries in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, TokenCount> {
        self.entries.iter()
    }

    /// Converts into `(token, count)` pairs, e.g. for a word-cloud renderer.
    pub fn into_pairs(self) -> Vec<(String, usize)> {
        self.entries
            .into_iter()
            .map(|entry| (entry.token, entry.count))
            .collect()
    }
}

impl<'a> IntoIterator for &'a TokenFrequencyTable {
    type Item = &'a TokenCount;
    type IntoIter = std::slice::Iter<'a, TokenCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Counts tokens into a frequency table.
///
/// # Example
///
/// ```
/// use chatstreak::core::vocabulary::count_tokens;
///
/// let table = count_tokens(["b", "a", "a", "c", "b"]);
/// let order: Vec<&str> = table.iter().map(|e| e.token.as_str()).collect();
/// assert_eq!(order, vec!["b", "a", "c"]);
/// ```
pub fn count_tokens<I, S>(tokens: I) -> TokenFrequencyTable
where
    I: IntoIterator<Item = S>,
    S: Into<String> + AsRef<str>,
{
    let mut entries: Vec<TokenCount> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for token in tokens {
        if let Some(&pos) = positions.get(token.as_ref()) {
            entries[pos].count += 1;
        } else {
            let token: String = token.into();
            positions.insert(token.clone(), entries.len());
            entries.push(TokenCount { token, count: 1 });
        }
    }

    // stable: equal counts stay in first-seen order
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    TokenFrequencyTable { entries }
}

// ============================================================================
// Corpus preparation
// ============================================================================

/// Joins every record's content, in record order, with `delimiter`.
pub fn build_corpus(records: &[Record], delimiter: &str) -> String {
    records
        .iter()
        .map(Record::content)
        .collect::<Vec<_>>()
        .join(delimiter)
}

/// Removes every occurrence of each placeholder.
///
/// # Example
///
/// ```
/// use chatstreak::core::vocabulary::strip_placeholders;
///
/// let placeholders = vec!["[Image]".to_string(), "[Emoji]".to_string()];
/// assert_eq!(strip_placeholders("look[Image][Emoji]!", &placeholders), "look!");
/// ```
pub fn strip_placeholders(corpus: &str, placeholders: &[String]) -> String {
    placeholders
        .iter()
        .filter(|placeholder| !placeholder.is_empty())
        .fold(corpus.to_string(), |text, placeholder| {
            text.replace(placeholder.as_str(), "")
        })
}

// ============================================================================
// Filtering
// ============================================================================

/// Why a token was removed from the vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Only whitespace.
    Blank,
    /// Listed in the stopword set.
    Stopword,
    /// Fewer characters than the configured minimum.
    TooShort,
    /// Contains a numeric digit.
    ContainsDigit,
    /// Equal to the name of a chat participant.
    AuthorName,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Blank => write!(f, "blank"),
            Rejection::Stopword => write!(f, "stopword"),
            Rejection::TooShort => write!(f, "too short"),
            Rejection::ContainsDigit => write!(f, "contains digit"),
            Rejection::AuthorName => write!(f, "author name"),
        }
    }
}

/// Predicates deciding which tokens enter the vocabulary.
///
/// # Example
///
/// ```
/// use chatstreak::config::VocabularyConfig;
/// use chatstreak::core::vocabulary::TokenFilter;
/// use chatstreak::stopwords::StopwordSet;
///
/// let stopwords = StopwordSet::parse("the");
/// let config = VocabularyConfig::default();
/// let filter = TokenFilter::new(&stopwords, &config).with_authors(["Alice"]);
///
/// let kept = filter.apply(["the", "ok", "a", "Alice", "42nd", "hello"]);
/// assert_eq!(kept, vec!["ok", "hello"]);
/// ```
#[derive(Debug, Clone)]
pub struct TokenFilter<'a> {
    stopwords: &'a StopwordSet,
    authors: HashSet<&'a str>,
    min_chars: usize,
    skip_blank: bool,
}

impl<'a> TokenFilter<'a> {
    /// Creates a filter with no author names.
    pub fn new(stopwords: &'a StopwordSet, config: &VocabularyConfig) -> Self {
        Self {
            stopwords,
            authors: HashSet::new(),
            min_chars: config.min_token_chars,
            skip_blank: config.skip_blank_tokens,
        }
    }

    /// Adds participant names; tokens equal to one (case-sensitive) are dropped.
    #[must_use]
    pub fn with_authors(mut self, authors: impl IntoIterator<Item = &'a str>) -> Self {
        self.authors.extend(authors);
        self
    }

    /// Returns why `token` would be dropped, or `None` if it is kept.
    pub fn rejection(&self, token: &str) -> Option<Rejection> {
        if self.skip_blank && !token.is_empty() && token.chars().all(char::is_whitespace) {
            Some(Rejection::Blank)
        } else if self.stopwords.contains(token) {
            Some(Rejection::Stopword)
        } else if token.chars().count() < self.min_chars {
            Some(Rejection::TooShort)
        } else if DIGIT_RE.is_match(token) {
            Some(Rejection::ContainsDigit)
        } else if self.authors.contains(token) {
            Some(Rejection::AuthorName)
        } else {
            None
        }
    }

    /// Returns `true` if `token` enters the vocabulary.
    pub fn keeps(&self, token: &str) -> bool {
        self.rejection(token).is_none()
    }

    /// Keeps the surviving tokens, in order.
    pub fn apply<I, S>(&self, tokens: I) -> Vec<S>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tokens
            .into_iter()
            .filter(|token| self.keeps(token.as_ref()))
            .collect()
    }
}

/// Filters segmented tokens, dropping the names of the records' authors too.
pub fn filter_tokens(
    tokens: Vec<String>,
    records: &[Record],
    stopwords: &StopwordSet,
    config: &VocabularyConfig,
) -> Vec<String> {
    TokenFilter::new(stopwords, config)
        .with_authors(records.iter().map(Record::author))
        .apply(tokens)
}

// ============================================================================
// Pipeline
// ============================================================================

/// The full vocabulary branch: corpus, segmentation, filtering, counting.
#[derive(Debug)]
pub struct TokenFilterPipeline<'a, S> {
    config: &'a VocabularyConfig,
    stopwords: &'a StopwordSet,
    segmenter: S,
}

impl<'a, S: WordSegmenter> TokenFilterPipeline<'a, S> {
    /// Creates a pipeline.
    pub fn new(config: &'a VocabularyConfig, stopwords: &'a StopwordSet, segmenter: S) -> Self {
        Self {
            config,
            stopwords,
            segmenter,
        }
    }

    /// Builds the frequency table for `records`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstreakError::Segmentation`] if the segmenter fails or its
    /// tokens don't cover the corpus.
    pub fn run(&self, records: &[Record]) -> Result<TokenFrequencyTable, ChatstreakError> {
        let corpus = build_corpus(records, &self.config.delimiter);
        let corpus = strip_placeholders(&corpus, &self.config.placeholders);

        let tokens = self.segmenter.segment(&corpus)?;
        validate_coverage(&corpus, &tokens)?;
        let candidates = tokens.len();

        let kept = filter_tokens(tokens, records, self.stopwords, self.config);

        tracing::debug!(
            segmenter = self.segmenter.name(),
            candidates,
            kept = kept.len(),
            "filtered tokens"
        );
        Ok(count_tokens(kept))
    }
}
