//! Longest run of consecutive active days.
//!
//! Given an author's ascending, deduplicated active dates, dates are split
//! into runs wherever the gap to the previous date is not exactly one day.
//! The longest run wins; among equally long runs the earliest one wins.
//!
//! # Example
//!
//! ```
//! use chatstreak::core::streak::longest_streak;
//! use chrono::NaiveDate;
//!
//! let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
//! let streak = longest_streak(&[d(1), d(2), d(10), d(11)]);
//!
//! assert_eq!(streak.length, 2);
//! assert_eq!(streak.start, Some(d(1)));
//! assert_eq!(streak.end, Some(d(2)));
//! ```

use std::cmp::Reverse;
use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::activity::ActiveDateSet;

/// Longest consecutive-day run of one author.
///
/// `length == 0` (with no dates) only happens for an empty date set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StreakResult {
    /// Number of days in the run.
    pub length: usize,
    /// First day of the run.
    pub start: Option<NaiveDate>,
    /// Last day of the run.
    pub end: Option<NaiveDate>,
}

impl StreakResult {
    /// Result for an author with no active dates.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Result for a one-day run.
    pub fn single(date: NaiveDate) -> Self {
        Self {
            length: 1,
            start: Some(date),
            end: Some(date),
        }
    }
}

impl From<DateRun> for StreakResult {
    fn from(run: DateRun) -> Self {
        Self {
            length: run.length,
            start: Some(run.start),
            end: Some(run.end),
        }
    }
}

/// A maximal run of consecutive dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRun {
    /// Run identifier: the number of run breaks seen before this run.
    pub id: usize,
    /// First date in the run.
    pub start: NaiveDate,
    /// Last date in the run.
    pub end: NaiveDate,
    /// Number of dates in the run.
    pub length: usize,
}

/// Assigns every date a run identifier.
///
/// The identifier is a running count of breaks, where a break is any gap
/// other than exactly one day. The first date belongs to run 0.
fn run_ids(dates: &[NaiveDate]) -> Vec<usize> {
    let mut id = 0;
    let mut ids = Vec::with_capacity(dates.len());
    let mut prev: Option<NaiveDate> = None;

    for &date in dates {
        if let Some(prev) = prev {
            if (date - prev).num_days() != 1 {
                id += 1;
            }
        }
        ids.push(id);
        prev = Some(date);
    }
    ids
}

/// Groups ascending dates into runs of consecutive days, in chronological order.
///
/// # Example
///
/// ```
/// use chatstreak::core::streak::consecutive_runs;
/// use chrono::NaiveDate;
///
/// let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
/// let runs = consecutive_runs(&[d(1), d(2), d(3), d(7)]);
///
/// assert_eq!(runs.len(), 2);
/// assert_eq!(runs[0].length, 3);
/// assert_eq!(runs[1].start, d(7));
/// ```
pub fn consecutive_runs(dates: &[NaiveDate]) -> Vec<DateRun> {
    let mut runs: Vec<DateRun> = Vec::new();

    for (&date, id) in dates.iter().zip(run_ids(dates)) {
        match runs.last_mut() {
            Some(run) if run.id == id => {
                run.end = date;
                run.length += 1;
            }
            _ => runs.push(DateRun {
                id,
                start: date,
                end: date,
                length: 1,
            }),
        }
    }
    runs
}

/// Computes the longest consecutive-day streak.
///
/// `dates` must be ascending and free of duplicates, as produced by
/// [`ActiveDateSet`]. Ties go to the earliest run.
pub fn longest_streak(dates: &[NaiveDate]) -> StreakResult {
    debug_assert!(
        dates.windows(2).all(|w| w[0] < w[1]),
        "dates must be strictly ascending"
    );

    match dates {
        [] => StreakResult::empty(),
        [date] => StreakResult::single(*date),
        _ => consecutive_runs(dates)
            .into_iter()
            .min_by_key(|run| (Reverse(run.length), run.id))
            .map(StreakResult::from)
            .unwrap_or_default(),
    }
}

/// Computes the streak of every author, keyed by author.
pub fn streaks_by_author(
    index: &BTreeMap<String, ActiveDateSet>,
) -> BTreeMap<String, StreakResult> {
    index
        .iter()
        .map(|(author, dates)| (author.clone(), longest_streak(dates.as_slice())))
        .collect()
}
