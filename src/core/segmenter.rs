//! Word segmentation seam.
//!
//! Splitting running text into words is language specific (Chinese text
//! has no spaces, for one). The vocabulary pipeline only relies on the
//! [`WordSegmenter`] trait. Two implementations ship with the crate:
//!
//! - [`JiebaSegmenter`] - dictionary segmentation for Chinese (feature `jieba`)
//! - [`UnicodeWordSegmenter`] - UAX #29 word boundaries, no dictionary
//!
//! A segmenter must return tokens that cover the whole input with no gaps:
//! concatenated in order they reproduce the input exactly. Output that breaks
//! this rule is rejected by [`validate_coverage`].
//!
//! # Example
//!
//! ```
//! use chatstreak::core::segmenter::{UnicodeWordSegmenter, WordSegmenter};
//!
//! let tokens = UnicodeWordSegmenter.segment("hello, world")?;
//! assert_eq!(tokens, vec!["hello", ",", " ", "world"]);
//! # Ok::<(), chatstreak::ChatstreakError>(())
//! ```

#[cfg(feature = "jieba")]
use jieba_rs::Jieba;
use unicode_segmentation::UnicodeSegmentation;

use crate::error::ChatstreakError;

/// Splits a corpus into an ordered sequence of tokens.
///
/// Implementations must be deterministic and must cover the input with no
/// gaps, including whitespace and punctuation.
pub trait WordSegmenter {
    /// Returns the human-readable name of this segmenter.
    fn name(&self) -> &'static str;

    /// Segments `text` into tokens.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstreakError::Segmentation`] if the text can't be segmented.
    fn segment(&self, text: &str) -> Result<Vec<String>, ChatstreakError>;
}

impl<T: WordSegmenter + ?Sized> WordSegmenter for &T {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn segment(&self, text: &str) -> Result<Vec<String>, ChatstreakError> {
        (**self).segment(text)
    }
}

impl<T: WordSegmenter + ?Sized> WordSegmenter for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn segment(&self, text: &str) -> Result<Vec<String>, ChatstreakError> {
        (**self).segment(text)
    }
}

/// Segmenter based on Unicode word boundaries (UAX #29).
///
/// Works well for space-separated scripts. Han ideographs come out one
/// character per token, which the length filter then drops; use
/// [`JiebaSegmenter`] for Chinese transcripts.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeWordSegmenter;

impl WordSegmenter for UnicodeWordSegmenter {
    fn name(&self) -> &'static str {
        "Unicode word boundaries"
    }

    fn segment(&self, text: &str) -> Result<Vec<String>, ChatstreakError> {
        Ok(text.split_word_bounds().map(str::to_string).collect())
    }
}

/// Dictionary-based segmenter for Chinese text, backed by `jieba-rs`.
///
/// Uses the bundled dictionary with HMM discovery of unknown words. Latin
/// words and numbers stay whole; whitespace and punctuation come out as
/// their own tokens, so the output still covers the input.
///
/// Loading the dictionary takes a moment, so build one segmenter and reuse it.
#[cfg(feature = "jieba")]
pub struct JiebaSegmenter {
    jieba: Jieba,
}

#[cfg(feature = "jieba")]
impl JiebaSegmenter {
    /// Creates a segmenter with the default dictionary.
    pub fn new() -> Self {
        Self {
            jieba: Jieba::new(),
        }
    }
}

#[cfg(feature = "jieba")]
impl Default for JiebaSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "jieba")]
impl std::fmt::Debug for JiebaSegmenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JiebaSegmenter").finish_non_exhaustive()
    }
}

#[cfg(feature = "jieba")]
impl WordSegmenter for JiebaSegmenter {
    fn name(&self) -> &'static str {
        "jieba"
    }

    fn segment(&self, text: &str) -> Result<Vec<String>, ChatstreakError> {
        Ok(self
            .jieba
            .cut(text, true)
            .into_iter()
            .map(str::to_string)
            .collect())
    }
}

/// Checks that `tokens` concatenate back to exactly `text`.
///
/// # Errors
///
/// Returns [`ChatstreakError::Segmentation`] pointing at the first byte where
/// the tokens diverge from the input.
pub fn validate_coverage(text: &str, tokens: &[String]) -> Result<(), ChatstreakError> {
    let mut offset = 0;
    for (i, token) in tokens.iter().enumerate() {
        if !text[offset..].starts_with(token.as_str()) {
            return Err(ChatstreakError::segmentation(format!(
                "token #{i} {token:?} does not match the input at byte {offset}"
            )));
        }
        offset += token.len();
    }

    if offset != text.len() {
        return Err(ChatstreakError::segmentation(format!(
            "tokens cover {offset} of {} bytes",
            text.len()
        )));
    }
    Ok(())
}
