//! Parsed chat message type.
//!
//! A [`Record`] is what a single transcript block becomes once its header
//! has been split into author, date and time, and its content lines have been
//! joined. Records are never mutated after parsing; both the activity branch
//! and the vocabulary branch read the same slice of records.
//!
//! # Example
//!
//! ```
//! use chatstreak::Record;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(9, 0, 0)
//!     .unwrap();
//! let record = Record::new("Alice", ts, "Hi");
//!
//! assert_eq!(record.author(), "Alice");
//! assert_eq!(record.date(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
//! assert_eq!(record.weekday_number(), 1); // 2024-01-01 is a Monday
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One parsed chat message.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `author` | `String` | First header token, never empty |
/// | `timestamp` | `NaiveDateTime` | Header date and time combined, no timezone |
/// | `content` | `String` | Content lines joined without separator, tag-stripped |
///
/// Transcripts carry wall-clock times without an offset, so the timestamp is
/// kept naive rather than pinned to UTC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    author: String,
    timestamp: NaiveDateTime,
    content: String,
}

impl Record {
    /// Creates a record from its parts.
    pub fn new(
        author: impl Into<String>,
        timestamp: NaiveDateTime,
        content: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            timestamp,
            content: content.into(),
        }
    }

    /// Returns the author identifier.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the message timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the message content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the calendar date of the message, time-of-day discarded.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Returns the weekday as 1..=7 with Monday = 1.
    pub fn weekday_number(&self) -> u32 {
        self.timestamp.weekday().num_days_from_monday() + 1
    }

    /// Returns `true` if the content is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}
