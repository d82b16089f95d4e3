//! Turning one message block into a [`Record`].
//!
//! A block is a header line followed by zero or more content lines:
//!
//! ```text
//! 【Admin】Alice 2024/1/5 9:03:12      <- header: [tag] author date time
//! 【Reply】see you                      <- content, tag stripped
//! tomorrow
//! ```
//!
//! Content lines are joined without a separator, so the block above has the
//! content `see youtomorrow`.

use chrono::NaiveDateTime;

use crate::Record;
use crate::error::RecordError;

/// chrono format for the combined `date time` string.
///
/// chrono accepts one- or two-digit month, day and hour for `%m`, `%d`, `%H`,
/// which matches the header pattern.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

const TAG_OPEN: char = '【';
const TAG_CLOSE: char = '】';

/// Removes one leading `【...】` tag group, if present.
///
/// The group ends at the first closing bracket. Text without a leading tag,
/// or with an unclosed one, is returned unchanged.
///
/// # Example
///
/// ```
/// use chatstreak::parsing::strip_leading_tag;
///
/// assert_eq!(strip_leading_tag("【Admin】Alice"), "Alice");
/// assert_eq!(strip_leading_tag("Alice【Admin】"), "Alice【Admin】");
/// assert_eq!(strip_leading_tag("【unclosed Alice"), "【unclosed Alice");
/// ```
pub fn strip_leading_tag(text: &str) -> &str {
    text.strip_prefix(TAG_OPEN)
        .and_then(|rest| {
            rest.find(TAG_CLOSE)
                .map(|end| &rest[end + TAG_CLOSE.len_utf8()..])
        })
        .unwrap_or(text)
}

/// Combines header date and time tokens into a timestamp.
///
/// # Example
///
/// ```
/// use chatstreak::parsing::parse_timestamp;
///
/// let ts = parse_timestamp("2024/1/5", "9:03:12").unwrap();
/// assert_eq!(ts.to_string(), "2024-01-05 09:03:12");
///
/// assert!(parse_timestamp("2024/02/30", "10:00:00").is_err());
/// ```
pub fn parse_timestamp(date: &str, time: &str) -> Result<NaiveDateTime, RecordError> {
    let combined = format!("{date} {time}");
    NaiveDateTime::parse_from_str(&combined, TIMESTAMP_FORMAT).map_err(|source| {
        RecordError::InvalidTimestamp {
            date: date.to_string(),
            time: time.to_string(),
            source,
        }
    })
}

/// Parses one message block.
///
/// The header (first line, trimmed, leading tag removed) must split on
/// whitespace into at least author, date and time. Extra header tokens are
/// ignored. The content is every following line joined without a separator,
/// trimmed, with one leading tag removed.
///
/// # Errors
///
/// - [`RecordError::MalformedHeader`] if the header has fewer than 3 tokens
/// - [`RecordError::InvalidTimestamp`] if date and time don't form a valid timestamp
///
/// # Example
///
/// ```
/// use chatstreak::parsing::parse_block;
///
/// let record = parse_block("【Admin】Alice 2024/01/01 09:00:00\nHi\nthere").unwrap();
/// assert_eq!(record.author(), "Alice");
/// assert_eq!(record.content(), "Hithere");
///
/// assert!(parse_block("Alice 2024/01/01").is_err());
/// ```
pub fn parse_block(block: &str) -> Result<Record, RecordError> {
    let mut lines = block.lines();
    let header = strip_leading_tag(lines.next().unwrap_or_default().trim());

    let tokens: Vec<&str> = header.split_whitespace().collect();
    let &[author, date, time, ..] = tokens.as_slice() else {
        return Err(RecordError::MalformedHeader {
            header: header.to_string(),
            tokens: tokens.len(),
        });
    };

    let content: String = lines.collect();
    let content = strip_leading_tag(content.trim());

    let timestamp = parse_timestamp(date, time)?;

    Ok(Record::new(author, timestamp, content))
}
