//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options
//! - [`SegmenterKind`] - Word segmenter options
//!
//! # Example
//!
//! ```rust
//! use chatstreak::cli::Args;
//! use clap::Parser;
//!
//! let args = Args::parse_from(["chatstreak", "chat.txt", "--top", "10"]);
//! assert_eq!(args.top, 10);
//! assert_eq!(args.vocabulary_config().min_token_chars, 2);
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::VocabularyConfig;
use crate::core::segmenter::{JiebaSegmenter, UnicodeWordSegmenter, WordSegmenter};
use crate::format;

/// Default report path; its extension follows the report format.
pub const DEFAULT_OUTPUT: &str = "chat_report.json";

/// Compute posting streaks, activity statistics and a word frequency table
/// from a plain-text group chat transcript.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstreak")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstreak chat.txt
    chatstreak chat.txt --stopwords cn_stopwords.txt -o report.json
    chatstreak chat.txt -f csv --words words.csv
    chatstreak chat.txt -o streaks.csv --segmenter unicode
    chatstreak chat.txt --placeholder '[Sticker]' --top 20")]
pub struct Args {
    /// Path to the transcript
    pub input: PathBuf,

    /// Stopword list, one word per line
    #[arg(long, value_name = "PATH", default_value = "stopwords.txt")]
    pub stopwords: PathBuf,

    /// Path to report file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Report format [default: from the output extension, else json]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Word segmenter for the vocabulary
    #[arg(long, value_enum, default_value = "jieba")]
    pub segmenter: SegmenterKind,

    /// Also write the word frequency table as `Word;Count` CSV
    #[arg(long, value_name = "PATH")]
    pub words: Option<PathBuf>,

    /// Number of top words shown in the summary
    #[arg(long, value_name = "N", default_value_t = 5)]
    pub top: usize,

    /// Attachment placeholder to strip (repeatable, replaces the defaults)
    #[arg(long = "placeholder", value_name = "TEXT")]
    pub placeholders: Vec<String>,

    /// Separator used when joining message contents
    #[arg(long, value_name = "TEXT")]
    pub delimiter: Option<String>,

    /// Show debug logs on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Maps the vocabulary flags onto a [`VocabularyConfig`].
    pub fn vocabulary_config(&self) -> VocabularyConfig {
        let mut config = VocabularyConfig::new();
        if !self.placeholders.is_empty() {
            config = config.with_placeholders(self.placeholders.iter().cloned());
        }
        if let Some(ref delimiter) = self.delimiter {
            config = config.with_delimiter(delimiter.clone());
        }
        config
    }

    /// Resolves the report format.
    ///
    /// `--format` wins. Otherwise a custom `-o` path picks the format by its
    /// extension; unknown extensions and the default path give JSON.
    pub fn report_format(&self) -> format::OutputFormat {
        if let Some(format) = self.format {
            return format.into();
        }
        if self.output == DEFAULT_OUTPUT {
            return format::OutputFormat::default();
        }
        format::OutputFormat::from_path(&self.output).unwrap_or_else(|err| {
            tracing::warn!("{err}; writing JSON");
            format::OutputFormat::default()
        })
    }

    /// Builds the selected word segmenter.
    pub fn word_segmenter(&self) -> Box<dyn WordSegmenter> {
        match self.segmenter {
            SegmenterKind::Jieba => Box::new(JiebaSegmenter::new()),
            SegmenterKind::Unicode => Box::new(UnicodeWordSegmenter),
        }
    }

    /// Default log filter when `RUST_LOG` is not set.
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

/// Output format options.
///
/// - [`Json`](OutputFormat::Json) - Full report (default)
/// - [`Csv`](OutputFormat::Csv) - Per-author table with semicolon delimiter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Full report as JSON
    #[default]
    Json,

    /// Per-author table as CSV
    Csv,
}

// Conversion to library format type
impl From<OutputFormat> for format::OutputFormat {
    fn from(kind: OutputFormat) -> format::OutputFormat {
        match kind {
            OutputFormat::Json => format::OutputFormat::Json,
            OutputFormat::Csv => format::OutputFormat::Csv,
        }
    }
}

/// Word segmenter options.
///
/// - [`Jieba`](SegmenterKind::Jieba) - Chinese dictionary segmentation (default)
/// - [`Unicode`](SegmenterKind::Unicode) - Unicode word boundaries, for
///   space-separated languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum SegmenterKind {
    /// Dictionary-based, splits Chinese text into words
    #[default]
    Jieba,

    /// Unicode word boundaries
    Unicode,
}

/// Adjusts the report extension to the format when the default path is used.
pub fn adjust_output_extension(output: &str, format: format::OutputFormat) -> String {
    if output != DEFAULT_OUTPUT {
        return output.to_string();
    }
    format!("chat_report.{}", format.extension())
}
