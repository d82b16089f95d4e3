//! Running the whole pipeline over a parsed transcript.
//!
//! After parsing, the records feed two independent branches:
//!
//! - activity: message counts, weekday histogram, active dates and streaks
//! - vocabulary: the word frequency table
//!
//! A failure in the vocabulary branch is stored in [`Report::vocabulary`]
//! and never hides the activity results.
//!
//! # Example
//!
//! ```
//! use chatstreak::config::VocabularyConfig;
//! use chatstreak::core::analysis::analyze;
//! use chatstreak::core::segmenter::UnicodeWordSegmenter;
//! use chatstreak::parser::TranscriptParser;
//! use chatstreak::stopwords::StopwordSet;
//!
//! let parsed = TranscriptParser::new()
//!     .parse_str("Alice 2024/01/01 09:00:00\nHi\nBob 2024/01/02 10:00:00\nHello");
//!
//! let report = analyze(
//!     &parsed,
//!     &StopwordSet::new(),
//!     &UnicodeWordSegmenter,
//!     &VocabularyConfig::default(),
//! );
//!
//! assert_eq!(report.streaks["Alice"].length, 1);
//! assert_eq!(report.vocabulary.as_ref().unwrap().get("Hello"), Some(1));
//! ```

use std::collections::BTreeMap;

use crate::config::VocabularyConfig;
use crate::error::ChatstreakError;
use crate::parser::{ParseDiagnostics, ParsedTranscript};
use crate::stopwords::StopwordSet;

use super::activity::{AuthorCount, index_active_dates, message_counts, weekday_histogram};
use super::segmenter::WordSegmenter;
use super::streak::{StreakResult, streaks_by_author};
use super::vocabulary::{TokenFilterPipeline, TokenFrequencyTable};

/// Everything computed for one transcript.
#[derive(Debug)]
pub struct Report {
    /// What happened to each block during parsing.
    pub diagnostics: ParseDiagnostics,
    /// Messages per author, most active first.
    pub message_counts: Vec<AuthorCount>,
    /// Messages per weekday, Monday = 1.
    pub weekday_histogram: BTreeMap<u32, usize>,
    /// Longest streak per author, ordered by author.
    pub streaks: BTreeMap<String, StreakResult>,
    /// Word frequency table, or why it could not be built.
    pub vocabulary: Result<TokenFrequencyTable, ChatstreakError>,
}

impl Report {
    /// Number of distinct authors.
    pub fn author_count(&self) -> usize {
        self.streaks.len()
    }

    /// The table if the vocabulary branch succeeded.
    pub fn vocabulary(&self) -> Option<&TokenFrequencyTable> {
        self.vocabulary.as_ref().ok()
    }

    /// The author with the longest streak. Ties go to the earliest streak start,
    /// then to the author name.
    pub fn longest_streak(&self) -> Option<(&str, &StreakResult)> {
        self.streaks
            .iter()
            .min_by(|(a_name, a), (b_name, b)| {
                b.length
                    .cmp(&a.length)
                    .then(a.start.cmp(&b.start))
                    .then(a_name.cmp(b_name))
            })
            .map(|(author, streak)| (author.as_str(), streak))
    }
}

/// Runs both branches over `parsed`.
pub fn analyze<S>(
    parsed: &ParsedTranscript,
    stopwords: &StopwordSet,
    segmenter: S,
    config: &VocabularyConfig,
) -> Report
where
    S: WordSegmenter,
{
    let records = &parsed.records;

    let index = index_active_dates(records);
    let streaks = streaks_by_author(&index);

    let vocabulary = TokenFilterPipeline::new(config, stopwords, segmenter).run(records);
    if let Err(err) = &vocabulary {
        tracing::warn!("vocabulary branch failed: {err}");
    }

    Report {
        diagnostics: parsed.diagnostics,
        message_counts: message_counts(records),
        weekday_histogram: weekday_histogram(records),
        streaks,
        vocabulary,
    }
}
