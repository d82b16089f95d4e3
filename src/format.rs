//! Output format types for the chatstreak library.
//!
//! These types don't depend on CLI frameworks, so they can be used from
//! library code as well as the binary.
//!
//! # Example
//!
//! ```rust
//! use chatstreak::format::OutputFormat;
//!
//! let format = OutputFormat::from_path("report.csv")?;
//! assert_eq!(format, OutputFormat::Csv);
//! assert_eq!(format.extension(), "csv");
//! # Ok::<(), chatstreak::ChatstreakError>(())
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::analysis::Report;
use crate::error::ChatstreakError;

/// Output format for the report.
///
/// - [`Json`](OutputFormat::Json) - the whole report in one document (default)
/// - [`Csv`](OutputFormat::Csv) - the per-author table only
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// JSON document with diagnostics, counts, streaks and vocabulary
    #[default]
    Json,

    /// CSV with semicolon delimiter, one row per author
    Csv,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstreakError::InvalidFormat`] for unknown extensions.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ChatstreakError> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ChatstreakError::invalid_format(
                "output",
                format!("Unknown file extension: '.{ext}'. Expected one of: json, csv"),
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Csv => write!(f, "CSV"),
        }
    }
}

/// Writes the report to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format(
    report: &Report,
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<(), ChatstreakError> {
    match format {
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(report, path),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(report, path),
        #[allow(unreachable_patterns)]
        _ => Err(ChatstreakError::invalid_format(
            "output",
            format!(
                "Output format {format:?} requires the '{}' feature to be enabled",
                match format {
                    OutputFormat::Json => "json-output",
                    OutputFormat::Csv => "csv-output",
                }
            ),
        )),
    }
}
