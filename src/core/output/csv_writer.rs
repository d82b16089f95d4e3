//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;

use crate::core::analysis::Report;
use crate::core::vocabulary::TokenFrequencyTable;
use crate::error::{ChatstreakError, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

fn semicolon_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new().delimiter(b';').from_writer(writer)
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

fn into_string(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| ChatstreakError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| ChatstreakError::invalid_format("csv", e.to_string()))
}

fn write_authors<W: Write>(report: &Report, writer: &mut csv::Writer<W>) -> Result<()> {
    writer.write_record(["Author", "Messages", "LongestStreak", "Start", "End"])?;

    for count in &report.message_counts {
        let streak = report
            .streaks
            .get(&count.author)
            .copied()
            .unwrap_or_default();
        writer.write_record([
            count.author.clone(),
            count.messages.to_string(),
            streak.length.to_string(),
            format_date(streak.start),
            format_date(streak.end),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

fn write_words<W: Write>(table: &TokenFrequencyTable, writer: &mut csv::Writer<W>) -> Result<()> {
    writer.write_record(["Word", "Count"])?;
    for entry in table {
        writer.write_record([entry.token.clone(), entry.count.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the per-author table to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Author`, `Messages`, `LongestStreak`, `Start`, `End`
/// - Rows in message count order; dates as `YYYY-MM-DD`
/// - Encoding: UTF-8
pub fn write_csv(report: &Report, output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    write_authors(report, &mut semicolon_writer(file))
}

/// Converts the per-author table to a CSV string.
///
/// Same format as [`write_csv`].
pub fn to_csv(report: &Report) -> Result<String> {
    let mut writer = semicolon_writer(Vec::new());
    write_authors(report, &mut writer)?;
    into_string(writer)
}

/// Writes the token table as `Word;Count` rows, most frequent first.
pub fn write_words_csv(table: &TokenFrequencyTable, output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    write_words(table, &mut semicolon_writer(file))
}

/// Converts the token table to a CSV string.
pub fn words_to_csv(table: &TokenFrequencyTable) -> Result<String> {
    let mut writer = semicolon_writer(Vec::new());
    write_words(table, &mut writer)?;
    into_string(writer)
}
