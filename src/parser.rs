//! Transcript parser: raw text in, records and diagnostics out.
//!
//! This is the single entry point for turning a transcript export into
//! [`Record`]s. Blocks that fail to parse are dropped and counted, never
//! fatal.
//!
//! # Example
//!
//! ```rust
//! use chatstreak::parser::TranscriptParser;
//!
//! let text = "\
//! Alice 2024/01/01 09:00:00
//! Hi
//! Alice2024/01/01 09:00:00
//! (author glued to the date)
//! Bob 2024/01/02 10:00:00
//! Hello";
//!
//! let parsed = TranscriptParser::new().parse_str(text);
//!
//! assert_eq!(parsed.records.len(), 2);
//! assert_eq!(parsed.diagnostics.blocks, 3);
//! assert_eq!(parsed.diagnostics.malformed_header, 1);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Record;
use crate::error::{ChatstreakError, DropReason, RecordError};
use crate::parsing::{Segmenter, parse_block};

/// Counts of what happened to every block of a transcript.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseDiagnostics {
    /// Non-empty blocks produced by segmentation.
    pub blocks: usize,
    /// Blocks that became records.
    pub records: usize,
    /// Blocks dropped because the header had fewer than three tokens.
    pub malformed_header: usize,
    /// Blocks dropped because date and time didn't parse.
    pub invalid_timestamp: usize,
}

impl ParseDiagnostics {
    /// Creates empty diagnostics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of dropped blocks.
    pub fn dropped(&self) -> usize {
        self.malformed_header + self.invalid_timestamp
    }

    /// Number of blocks dropped for `reason`.
    pub fn dropped_for(&self, reason: DropReason) -> usize {
        match reason {
            DropReason::MalformedHeader => self.malformed_header,
            DropReason::InvalidTimestamp => self.invalid_timestamp,
        }
    }

    fn record_drop(&mut self, reason: DropReason) {
        match reason {
            DropReason::MalformedHeader => self.malformed_header += 1,
            DropReason::InvalidTimestamp => self.invalid_timestamp += 1,
        }
    }
}

/// Result of parsing one transcript.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTranscript {
    /// Records in transcript order.
    pub records: Vec<Record>,
    /// What happened to each block.
    pub diagnostics: ParseDiagnostics,
}

impl ParsedTranscript {
    /// Returns `true` if no record was produced.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Parser for plain-text chat transcripts.
///
/// # Example
///
/// ```rust,no_run
/// use chatstreak::parser::TranscriptParser;
///
/// let parsed = TranscriptParser::new().parse("chat.txt".as_ref())?;
/// println!("{} records, {} dropped", parsed.records.len(), parsed.diagnostics.dropped());
/// # Ok::<(), chatstreak::ChatstreakError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TranscriptParser;

impl TranscriptParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Returns the human-readable name of this parser.
    #[allow(clippy::unused_self)]
    pub fn name(&self) -> &'static str {
        "Transcript"
    }

    /// Reads and parses a transcript file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstreakError::Io`] if the file can't be read or isn't UTF-8.
    pub fn parse(&self, path: &Path) -> Result<ParsedTranscript, ChatstreakError> {
        let content = fs::read_to_string(path)?;
        Ok(self.parse_str(&content))
    }

    /// Parses a transcript already held in memory.
    pub fn parse_str(&self, content: &str) -> ParsedTranscript {
        let mut parsed = ParsedTranscript::default();

        for result in self.records(content) {
            parsed.diagnostics.blocks += 1;
            match result {
                Ok(record) => parsed.records.push(record),
                Err(err) => {
                    tracing::debug!(reason = %err.reason(), "dropping block: {err}");
                    parsed.diagnostics.record_drop(err.reason());
                }
            }
        }
        parsed.diagnostics.records = parsed.records.len();

        tracing::info!(
            blocks = parsed.diagnostics.blocks,
            records = parsed.diagnostics.records,
            dropped = parsed.diagnostics.dropped(),
            "parsed transcript"
        );
        parsed
    }

    /// Lazily parses blocks one at a time, in transcript order.
    ///
    /// A leading UTF-8 byte order mark is ignored.
    #[allow(clippy::unused_self)]
    pub fn records<'a>(
        self,
        content: &'a str,
    ) -> impl Iterator<Item = Result<Record, RecordError>> + 'a {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        Segmenter::new(content).map(parse_block)
    }
}
