//! Transcript parsing building blocks.
//!
//! - [`segment`] splits raw text into message blocks
//! - [`transcript`] turns one block into a [`Record`](crate::Record)
//!
//! [`TranscriptParser`](crate::parser::TranscriptParser) wires both together
//! and keeps count of rejected blocks.

pub mod segment;
pub mod transcript;

// Re-export commonly used items
pub use segment::{HEADER_PATTERN, Segmenter, is_header_line, segment_blocks};
pub use transcript::{TIMESTAMP_FORMAT, parse_block, parse_timestamp, strip_leading_tag};
