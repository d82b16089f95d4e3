//! Configuration types for the analysis pipeline.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies. The binary maps its flags onto
//! these.
//!
//! # Example
//!
//! ```rust
//! use chatstreak::config::VocabularyConfig;
//!
//! let config = VocabularyConfig::new()
//!     .with_delimiter(". ")
//!     .with_placeholders(["<image>", "<sticker>"])
//!     .with_min_token_chars(3);
//!
//! assert_eq!(config.placeholders.len(), 2);
//! ```

use serde::{Deserialize, Serialize};

/// Placeholders that chat exports put in place of non-text attachments.
///
/// The English QQ export writes `[Image]` and `[Emoji]`; the Chinese client
/// writes `[图片]` and `[表情]` for the same attachments.
pub const DEFAULT_PLACEHOLDERS: &[&str] = &["[Image]", "[Emoji]", "[图片]", "[表情]"];

/// Separator placed between message contents when building the corpus.
pub const DEFAULT_DELIMITER: &str = "。";

/// Configuration for the vocabulary (word frequency) branch.
///
/// # Example
///
/// ```rust
/// use chatstreak::config::VocabularyConfig;
///
/// let config = VocabularyConfig::default();
/// assert_eq!(config.delimiter, "。");
/// assert_eq!(config.min_token_chars, 2);
/// assert!(config.skip_blank_tokens);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Joins message contents into one corpus (default: `"。"`)
    pub delimiter: String,

    /// Attachment placeholders removed from the corpus before segmentation
    pub placeholders: Vec<String>,

    /// Tokens with fewer characters are dropped (default: 2)
    pub min_token_chars: usize,

    /// Drop whitespace-only tokens (default: true)
    pub skip_blank_tokens: bool,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            placeholders: DEFAULT_PLACEHOLDERS.iter().map(|p| (*p).to_string()).collect(),
            min_token_chars: 2,
            skip_blank_tokens: true,
        }
    }
}

impl VocabularyConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the corpus delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Replaces the attachment placeholders.
    #[must_use]
    pub fn with_placeholders<I, S>(mut self, placeholders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.placeholders = placeholders.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the minimum token length in characters.
    #[must_use]
    pub fn with_min_token_chars(mut self, chars: usize) -> Self {
        self.min_token_chars = chars;
        self
    }

    /// Sets whether whitespace-only tokens are dropped.
    #[must_use]
    pub fn with_skip_blank_tokens(mut self, skip: bool) -> Self {
        self.skip_blank_tokens = skip;
        self
    }
}
