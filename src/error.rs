//! Unified error types for chatstreak.
//!
//! Two layers of errors exist:
//!
//! - [`ChatstreakError`] covers failures of a whole run or of a whole
//!   pipeline branch (unreadable transcript, missing stopword list, a word
//!   segmenter that broke its contract, writer failures).
//! - [`RecordError`] covers a single transcript block that could not become a
//!   [`Record`](crate::Record). These are absorbed by the parser and only
//!   surface as counts in [`ParseDiagnostics`](crate::parser::ParseDiagnostics).
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Developers** get source error chains for debugging

use std::fmt;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A specialized [`Result`] type for chatstreak operations.
///
/// # Example
///
/// ```rust
/// use chatstreak::error::Result;
/// use chatstreak::Record;
///
/// fn my_function() -> Result<Vec<Record>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatstreakError>;

/// The error type for all run-level chatstreak operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstreakError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The transcript file doesn't exist
    /// - The transcript is not valid UTF-8
    /// - Writing a report fails
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A resource a collaborator depends on could not be loaded.
    ///
    /// The stopword list is the only such resource today. Without it the
    /// vocabulary table would be meaningless, so this is fatal for a run.
    #[error("Cannot load {resource} from {}: {source}", path.display())]
    MissingResource {
        /// What was being loaded (e.g. "stopword list")
        resource: &'static str,
        /// Where it was expected
        path: PathBuf,
        /// The underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// The word segmenter failed or returned tokens that do not cover the corpus.
    ///
    /// Only the vocabulary branch is affected; activity statistics and
    /// streaks are still produced.
    #[error("Word segmentation failed: {message}")]
    Segmentation {
        /// Description of what went wrong
        message: String,
    },

    /// The input doesn't have the expected structure.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatstreakError {
    /// Creates a missing-resource error.
    pub fn missing_resource(resource: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        ChatstreakError::MissingResource {
            resource,
            path: path.into(),
            source,
        }
    }

    /// Creates a segmentation error.
    pub fn segmentation(message: impl Into<String>) -> Self {
        ChatstreakError::Segmentation {
            message: message.into(),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatstreakError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstreakError::Io(_))
    }

    /// Returns `true` if a collaborator resource could not be loaded.
    pub fn is_missing_resource(&self) -> bool {
        matches!(self, ChatstreakError::MissingResource { .. })
    }

    /// Returns `true` if word segmentation failed.
    pub fn is_segmentation(&self) -> bool {
        matches!(self, ChatstreakError::Segmentation { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatstreakError::InvalidFormat { .. })
    }
}

// ============================================================================
// Per-record errors
// ============================================================================

/// Why a single transcript block was rejected.
///
/// These never abort a run. [`TranscriptParser`](crate::parser::TranscriptParser)
/// drops the block and counts it by [`DropReason`].
#[derive(Debug, Error)]
pub enum RecordError {
    /// The header has fewer than three whitespace-separated tokens
    /// (author, date, time) after the leading tag is stripped.
    #[error("Malformed header '{header}': expected author, date and time, found {tokens} token(s)")]
    MalformedHeader {
        /// The header line after tag stripping
        header: String,
        /// Number of whitespace tokens found
        tokens: usize,
    },

    /// The date and time tokens do not form a valid calendar timestamp.
    #[error("Invalid timestamp '{date} {time}': {source}")]
    InvalidTimestamp {
        /// The date token from the header
        date: String,
        /// The time token from the header
        time: String,
        /// The underlying chrono error
        #[source]
        source: chrono::ParseError,
    },
}

impl RecordError {
    /// Returns the diagnostic bucket this error is counted under.
    pub fn reason(&self) -> DropReason {
        match self {
            RecordError::MalformedHeader { .. } => DropReason::MalformedHeader,
            RecordError::InvalidTimestamp { .. } => DropReason::InvalidTimestamp,
        }
    }
}

/// Diagnostic bucket for dropped blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    /// See [`RecordError::MalformedHeader`].
    MalformedHeader,
    /// See [`RecordError::InvalidTimestamp`].
    InvalidTimestamp,
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropReason::MalformedHeader => write!(f, "malformed header"),
            DropReason::InvalidTimestamp => write!(f, "invalid timestamp"),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
