//! # Chatstreak
//!
//! A Rust library for computing activity statistics over group chat
//! transcripts exported as plain text.
//!
//! ## Overview
//!
//! A transcript is a sequence of messages, each starting with a header line
//! `<author> <YYYY/M/D> <H:MM:SS>` followed by free-form content lines:
//!
//! ```text
//! 【Admin】Alice 2024/1/5 9:03:12
//! Good morning everyone
//! Bob 2024/1/5 9:04:00
//! [Image]
//! ```
//!
//! From it chatstreak computes:
//! - message counts per author and a weekday histogram
//! - the longest run of consecutive active days for every author
//! - a word frequency table with stopwords, short tokens, numbers and
//!   participant names removed
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatstreak::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let stopwords = StopwordSet::from_file("stopwords.txt".as_ref())?;
//!     let parsed = TranscriptParser::new().parse("chat.txt".as_ref())?;
//!
//!     let segmenter = JiebaSegmenter::new();
//!     let report = analyze(&parsed, &stopwords, &segmenter, &VocabularyConfig::default());
//!
//!     for (author, streak) in &report.streaks {
//!         println!("{author}: {} days", streak.length);
//!     }
//!     write_json(&report, "chat_report.json")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parsing`] - Splitting the transcript into blocks and blocks into records
//! - [`parser`] - [`TranscriptParser`](parser::TranscriptParser) entry point with diagnostics
//! - [`record`] - The [`Record`] type
//! - [`core`] - Activity index, streaks, vocabulary, report, writers
//! - [`stopwords`] - [`StopwordSet`](stopwords::StopwordSet)
//! - [`config`] - [`VocabularyConfig`](config::VocabularyConfig)
//! - [`format`] - [`OutputFormat`](format::OutputFormat)
//! - [`cli`] - CLI argument types (requires `cli` feature)
//! - [`error`] - Error types ([`ChatstreakError`], [`Result`])
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod parser;
pub mod parsing;
pub mod record;
pub mod stopwords;

// Re-export the main types at the crate root for convenience
pub use error::{ChatstreakError, Result};
pub use record::Record;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatstreak::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Record;

    // Error types
    pub use crate::error::{ChatstreakError, DropReason, RecordError, Result};

    // Parsing
    pub use crate::parser::{ParseDiagnostics, ParsedTranscript, TranscriptParser};

    // Collaborators and config
    pub use crate::config::VocabularyConfig;
    pub use crate::stopwords::StopwordSet;

    // Analysis
    pub use crate::core::{
        ActiveDateSet, Report, StreakResult, TokenFrequencyTable, UnicodeWordSegmenter,
        WordSegmenter, analyze, longest_streak,
    };
    #[cfg(feature = "jieba")]
    pub use crate::core::JiebaSegmenter;

    // Output
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, words_to_csv, write_csv, write_words_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, write_json};
    pub use crate::format::{OutputFormat, write_to_format};
}
