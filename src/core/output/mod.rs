//! Report writers.
//!
//! This module provides writers for the two output formats:
//! - [`write_csv`] / [`to_csv`] - per-author table, semicolon delimiter - requires `csv-output` feature
//! - [`write_words_csv`] / [`words_to_csv`] - `Word;Count` table for word-cloud renderers - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - the whole report as one JSON document - requires `json-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatstreak::Result<()> {
//! use chatstreak::config::VocabularyConfig;
//! use chatstreak::core::analysis::analyze;
//! use chatstreak::core::output::{to_csv, write_json};
//! use chatstreak::core::segmenter::UnicodeWordSegmenter;
//! use chatstreak::parser::TranscriptParser;
//! use chatstreak::stopwords::StopwordSet;
//!
//! let parsed = TranscriptParser::new().parse("chat.txt".as_ref())?;
//! let stopwords = StopwordSet::from_file("stopwords.txt".as_ref())?;
//! let report = analyze(&parsed, &stopwords, UnicodeWordSegmenter, &VocabularyConfig::default());
//!
//! write_json(&report, "report.json")?;
//! let table = to_csv(&report)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, words_to_csv, write_csv, write_words_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
