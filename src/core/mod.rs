//! Core analysis logic for chatstreak.
//!
//! This module contains:
//! - [`activity`] - Active dates per author, message counts, weekday histogram
//! - [`streak`] - Longest run of consecutive active days
//! - [`segmenter`] - Word segmentation seam
//! - [`vocabulary`] - Token filtering and frequency counting
//! - [`analysis`] - Runs everything and collects a [`Report`]
//! - [`output`] - Format writers (CSV, JSON)
//!
//! # Quick Start
//!
//! ```rust
//! use chatstreak::core::{ActiveDateSet, longest_streak};
//! use chrono::NaiveDate;
//!
//! let dates = ActiveDateSet::from_dates([
//!     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
//! ]);
//! assert_eq!(longest_streak(dates.as_slice()).length, 2);
//! ```

pub mod activity;
pub mod analysis;
pub mod output;
pub mod segmenter;
pub mod streak;
pub mod vocabulary;

pub use activity::{
    ActiveDateSet, AuthorCount, index_active_dates, message_counts, weekday_histogram,
};
pub use analysis::{Report, analyze};
#[cfg(feature = "jieba")]
pub use segmenter::JiebaSegmenter;
pub use segmenter::{UnicodeWordSegmenter, WordSegmenter};
pub use streak::{StreakResult, longest_streak, streaks_by_author};
pub use vocabulary::{TokenCount, TokenFilter, TokenFilterPipeline, TokenFrequencyTable};

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, words_to_csv, write_csv, write_words_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, write_json};
