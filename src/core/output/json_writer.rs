//! JSON output writer.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::core::activity::AuthorCount;
use crate::core::analysis::Report;
use crate::core::streak::StreakResult;
use crate::core::vocabulary::TokenFrequencyTable;
use crate::error::Result;
use crate::parser::ParseDiagnostics;

/// Serialized shape of a [`Report`].
#[derive(Serialize)]
struct JsonReport<'a> {
    diagnostics: &'a ParseDiagnostics,
    message_counts: &'a [AuthorCount],
    weekday_histogram: &'a BTreeMap<u32, usize>,
    streaks: &'a BTreeMap<String, StreakResult>,
    vocabulary: JsonVocabulary<'a>,
}

/// Either the word table or the reason it is missing.
#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum JsonVocabulary<'a> {
    Words(&'a TokenFrequencyTable),
    Error(String),
}

impl<'a> JsonReport<'a> {
    fn from_report(report: &'a Report) -> Self {
        Self {
            diagnostics: &report.diagnostics,
            message_counts: &report.message_counts,
            weekday_histogram: &report.weekday_histogram,
            streaks: &report.streaks,
            vocabulary: match &report.vocabulary {
                Ok(table) => JsonVocabulary::Words(table),
                Err(err) => JsonVocabulary::Error(err.to_string()),
            },
        }
    }
}

/// Writes the report to a JSON file.
///
/// # Format
/// ```json
/// {
///   "diagnostics": {"blocks": 2, "records": 2, "malformed_header": 0, "invalid_timestamp": 0},
///   "message_counts": [{"author": "Alice", "messages": 2}],
///   "weekday_histogram": {"1": 1, "2": 1},
///   "streaks": {"Alice": {"length": 2, "start": "2024-01-01", "end": "2024-01-02"}},
///   "vocabulary": {"words": [{"token": "hello", "count": 2}]}
/// }
/// ```
pub fn write_json(report: &Report, output_path: impl AsRef<Path>) -> Result<()> {
    let json = to_json(report)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts the report to a pretty-printed JSON string.
///
/// Same format as [`write_json`].
pub fn to_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonReport::from_report(
        report,
    ))?)
}
