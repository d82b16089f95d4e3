//! Splitting a raw transcript into message blocks.
//!
//! Transcripts have no framing bytes. A message starts at any line that
//! looks like a header, i.e. some prefix (author, possibly a `【...】` tag)
//! followed by a `YYYY/M/D` date and an `H:MM:SS` time on the same line:
//!
//! ```text
//! 【Admin】Alice 2024/1/5 9:03:12
//! first content line
//! second content line
//! Bob 2024/1/5 9:04:00
//! reply
//! ```
//!
//! Every following line belongs to that message until the next header line
//! or the end of input.

use std::sync::LazyLock;

use regex::Regex;

/// Header shape: non-empty prefix, then date and time separated by whitespace.
pub const HEADER_PATTERN: &str = r"^.+\d{4}/\d{1,2}/\d{1,2}\s\d{1,2}:\d{2}:\d{2}";

static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HEADER_PATTERN).expect("header pattern is a valid regex"));

/// Returns `true` if `line` starts a new message block.
///
/// # Example
///
/// ```
/// use chatstreak::parsing::is_header_line;
///
/// assert!(is_header_line("Alice 2024/01/01 09:00:00"));
/// assert!(is_header_line("【Admin】Bob 2024/1/5 9:03:12"));
/// assert!(!is_header_line("just some text"));
/// // the date needs a prefix in front of it
/// assert!(!is_header_line("2024/01/01 09:00:00"));
/// ```
pub fn is_header_line(line: &str) -> bool {
    HEADER_RE.is_match(line)
}

/// Lazy iterator over the message blocks of a transcript.
///
/// Blocks borrow from the input and are trimmed. Blocks that are empty
/// after trimming are skipped. Text before the first header forms its own
/// block, which the record parser later rejects.
///
/// # Example
///
/// ```
/// use chatstreak::parsing::Segmenter;
///
/// let text = "Alice 2024/01/01 09:00:00\nHi\nBob 2024/01/02 10:00:00\nHello";
/// let blocks: Vec<&str> = Segmenter::new(text).collect();
///
/// assert_eq!(blocks, vec![
///     "Alice 2024/01/01 09:00:00\nHi",
///     "Bob 2024/01/02 10:00:00\nHello",
/// ]);
/// ```
#[derive(Debug, Clone)]
pub struct Segmenter<'a> {
    rest: &'a str,
}

impl<'a> Segmenter<'a> {
    /// Creates a segmenter over the whole transcript.
    pub fn new(text: &'a str) -> Self {
        Self { rest: text }
    }

    /// Byte length of the block at the start of `rest`.
    ///
    /// The first line always belongs to the current block, whether or not
    /// it is a header.
    fn block_len(&self) -> usize {
        let mut offset = 0;
        for (i, line) in self.rest.split_inclusive('\n').enumerate() {
            if i > 0 && is_header_line(line) {
                return offset;
            }
            offset += line.len();
        }
        offset
    }
}

impl<'a> Iterator for Segmenter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.rest.is_empty() {
            let (block, rest) = self.rest.split_at(self.block_len());
            self.rest = rest;

            let block = block.trim();
            if !block.is_empty() {
                return Some(block);
            }
        }
        None
    }
}

impl std::iter::FusedIterator for Segmenter<'_> {}

/// Collects all blocks of `text` in transcript order.
pub fn segment_blocks(text: &str) -> Vec<&str> {
    Segmenter::new(text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_line_variants() {
        assert!(is_header_line("Alice 2024/01/01 09:00:00"));
        assert!(is_header_line("Alice 2024/1/1 9:00:00"));
        assert!(is_header_line("Alice(123456) 2024/12/31 23:59:59"));
        assert!(is_header_line("【Admin】Alice 2024/1/1 9:00:00"));
        // trailing text after the time is allowed
        assert!(is_header_line("Alice 2024/1/1 9:00:00 extra"));
    }

    #[test]
    fn test_non_header_lines() {
        assert!(!is_header_line(""));
        assert!(!is_header_line("hello world"));
        assert!(!is_header_line("Alice 2024/01/01"));
        assert!(!is_header_line("Alice 2024-01-01 09:00:00"));
        assert!(!is_header_line("Alice 24/01/01 09:00:00"));
        assert!(!is_header_line("Alice 2024/01/01 9:0:00"));
        assert!(!is_header_line("2024/01/01 09:00:00"));
    }

    #[test]
    fn test_segment_two_messages() {
        let text = "Alice 2024/01/01 09:00:00\nHi\nBob 2024/01/02 10:00:00\nHello";
        let blocks = segment_blocks(text);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], "Alice 2024/01/01 09:00:00\nHi");
        assert_eq!(blocks[1], "Bob 2024/01/02 10:00:00\nHello");
    }

    #[test]
    fn test_segment_multiline_content() {
        let text = "Alice 2024/01/01 09:00:00\nline one\nline two\n\nline four\n";
        let blocks = segment_blocks(text);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0], "Alice 2024/01/01 09:00:00\nline one\nline two\n\nline four");
    }

    #[test]
    fn test_segment_leading_text_is_own_block() {
        let text = "Message history\n==========\n\nAlice 2024/01/01 09:00:00\nHi";
        let blocks = segment_blocks(text);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], "Message history\n==========");
        assert_eq!(blocks[1], "Alice 2024/01/01 09:00:00\nHi");
    }

    #[test]
    fn test_segment_header_without_content() {
        let text = "Alice 2024/01/01 09:00:00\nBob 2024/01/01 09:00:01\n";
        let blocks = segment_blocks(text);
        assert_eq!(
            blocks,
            vec!["Alice 2024/01/01 09:00:00", "Bob 2024/01/01 09:00:01"]
        );
    }

    #[test]
    fn test_segment_empty_and_whitespace() {
        assert!(segment_blocks("").is_empty());
        assert!(segment_blocks("   \n\n\t\n").is_empty());
    }

    #[test]
    fn test_segment_crlf() {
        let text = "Alice 2024/01/01 09:00:00\r\nHi\r\nBob 2024/01/02 10:00:00\r\nHello\r\n";
        let blocks = segment_blocks(text);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], "Alice 2024/01/01 09:00:00\r\nHi");
        assert_eq!(blocks[1], "Bob 2024/01/02 10:00:00\r\nHello");
    }

    #[test]
    fn test_segmenter_is_lazy_and_fused() {
        let text = "Alice 2024/01/01 09:00:00\nHi\nBob 2024/01/02 10:00:00\nHello";
        let mut seg = Segmenter::new(text);
        assert_eq!(seg.next(), Some("Alice 2024/01/01 09:00:00\nHi"));
        assert_eq!(seg.next(), Some("Bob 2024/01/02 10:00:00\nHello"));
        assert_eq!(seg.next(), None);
        assert_eq!(seg.next(), None);
    }

    #[test]
    fn test_resegmenting_joined_blocks_is_stable() {
        let text = "intro\nAlice 2024/01/01 09:00:00\nHi\n\n\nBob 2024/01/02 10:00:00\nHello\n  ";
        let blocks = segment_blocks(text);
        let joined = blocks.join("\n");
        assert_eq!(segment_blocks(&joined), blocks);
    }
}
