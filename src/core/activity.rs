//! Per-author activity: active dates, message counts and weekdays.
//!
//! [`index_active_dates`] groups records by author and keeps the distinct
//! calendar dates each author was active on. The index is rebuilt from the
//! records on every run and feeds [`streak`](super::streak).
//!
//! # Example
//!
//! ```
//! use chatstreak::core::activity::{index_active_dates, message_counts};
//! use chatstreak::parser::TranscriptParser;
//!
//! let parsed = TranscriptParser::new().parse_str(
//!     "Alice 2024/01/01 09:00:00\nHi\n\
//!      Alice 2024/01/01 18:00:00\nagain\n\
//!      Bob 2024/01/02 10:00:00\nHello",
//! );
//!
//! let index = index_active_dates(&parsed.records);
//! assert_eq!(index["Alice"].len(), 1); // two messages, one day
//!
//! let counts = message_counts(&parsed.records);
//! assert_eq!(counts[0].author, "Alice");
//! assert_eq!(counts[0].messages, 2);
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Record;

/// Distinct dates on which one author posted, ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActiveDateSet {
    dates: Vec<NaiveDate>,
}

impl ActiveDateSet {
    /// Builds a set from dates in any order; duplicates are removed.
    pub fn from_dates(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        let unique: BTreeSet<NaiveDate> = dates.into_iter().collect();
        Self {
            dates: unique.into_iter().collect(),
        }
    }

    /// Dates in ascending order.
    pub fn as_slice(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Number of distinct active dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns `true` if the author has no active date.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Earliest active date.
    pub fn first(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }

    /// Latest active date.
    pub fn last(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    /// Returns `true` if the author was active on `date`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.binary_search(&date).is_ok()
    }

    /// Iterates over the dates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }
}

/// Groups records by author into active date sets.
///
/// Authors are ordered by name; each set holds the distinct dates of that
/// author's records, ascending.
pub fn index_active_dates(records: &[Record]) -> BTreeMap<String, ActiveDateSet> {
    let mut by_author: BTreeMap<&str, BTreeSet<NaiveDate>> = BTreeMap::new();
    for record in records {
        by_author
            .entry(record.author())
            .or_default()
            .insert(record.date());
    }

    by_author
        .into_iter()
        .map(|(author, dates)| (author.to_string(), ActiveDateSet::from_dates(dates)))
        .collect()
}

/// Number of messages posted by one author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorCount {
    /// Author identifier.
    pub author: String,
    /// Number of records.
    pub messages: usize,
}

/// Counts messages per author, most active first.
///
/// Authors with equal counts keep the order in which they first appear.
pub fn message_counts(records: &[Record]) -> Vec<AuthorCount> {
    let mut counts: Vec<AuthorCount> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for record in records {
        match positions.get(record.author()) {
            Some(&pos) => counts[pos].messages += 1,
            None => {
                positions.insert(record.author(), counts.len());
                counts.push(AuthorCount {
                    author: record.author().to_string(),
                    messages: 1,
                });
            }
        }
    }

    // stable sort keeps first-seen order among ties
    counts.sort_by(|a, b| b.messages.cmp(&a.messages));
    counts
}

/// Counts messages per weekday (Monday = 1 .. Sunday = 7).
///
/// Only weekdays that occur are present; keys are ascending.
pub fn weekday_histogram(records: &[Record]) -> BTreeMap<u32, usize> {
    let mut histogram = BTreeMap::new();
    for record in records {
        *histogram.entry(record.weekday_number()).or_insert(0) += 1;
    }
    histogram
}
