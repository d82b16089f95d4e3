//! Integration tests for the full pipeline with real files

use chatstreak::core::streak::StreakResult;
use chatstreak::core::vocabulary::TokenFilter;
use chatstreak::prelude::*;
use chrono::NaiveDate;
use std::fs;
use tempfile::{TempDir, tempdir};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// Creates a temporary directory with a transcript and a stopword list.
fn setup_fixtures() -> TempDir {
    let dir = tempdir().unwrap();

    let transcript = "\
【群主】Alice 2024/1/1 9:00:00
Happy new year everyone[Image]

Bob 2024/1/1 9:05:12
Happy new year Alice
Carol 2024/1/2 21:00:00
anyone up for hiking this weekend
Alice 2024/1/2 8:00:00
hiking sounds great
count me in
Alice 2024/1/3 7:30:00
【Lv3】morning hiking plan ready
Bob 2024/1/5 12:00:00
[Emoji][Emoji]
Alice 2024/1/9 10:00:00
hiking photos from the weekend
";
    fs::write(dir.path().join("chat.txt"), transcript).unwrap();
    fs::write(dir.path().join("stopwords.txt"), "the\nfrom\nfor\nup\nin\nme\n").unwrap();
    dir
}

fn analyze_fixture(dir: &TempDir) -> Report {
    let stopwords = StopwordSet::from_file(&dir.path().join("stopwords.txt")).unwrap();
    let parsed = TranscriptParser::new()
        .parse(&dir.path().join("chat.txt"))
        .unwrap();
    analyze(
        &parsed,
        &stopwords,
        UnicodeWordSegmenter,
        &VocabularyConfig::default(),
    )
}

// ============================================================================
// End-to-end scenario
// ============================================================================

#[test]
fn test_two_message_transcript() {
    let parsed = TranscriptParser::new()
        .parse_str("Alice 2024/01/01 09:00:00\nHi\nBob 2024/01/02 10:00:00\nHello");

    assert_eq!(parsed.records.len(), 2);

    let alice = &parsed.records[0];
    assert_eq!(alice.author(), "Alice");
    assert_eq!(
        alice.timestamp(),
        d(2024, 1, 1).and_hms_opt(9, 0, 0).unwrap()
    );
    assert_eq!(alice.content(), "Hi");

    let bob = &parsed.records[1];
    assert_eq!(bob.author(), "Bob");
    assert_eq!(bob.timestamp(), d(2024, 1, 2).and_hms_opt(10, 0, 0).unwrap());
    assert_eq!(bob.content(), "Hello");

    let report = analyze(
        &parsed,
        &StopwordSet::new(),
        UnicodeWordSegmenter,
        &VocabularyConfig::default(),
    );
    assert_eq!(report.streaks["Alice"], StreakResult::single(d(2024, 1, 1)));
    assert_eq!(report.streaks["Bob"], StreakResult::single(d(2024, 1, 2)));
}

#[test]
fn test_fixture_records_and_diagnostics() {
    let dir = setup_fixtures();
    let report = analyze_fixture(&dir);

    assert_eq!(report.diagnostics.blocks, 7);
    assert_eq!(report.diagnostics.records, 7);
    assert_eq!(report.diagnostics.dropped(), 0);
}

#[test]
fn test_fixture_message_counts() {
    let dir = setup_fixtures();
    let report = analyze_fixture(&dir);

    let counts: Vec<(&str, usize)> = report
        .message_counts
        .iter()
        .map(|c| (c.author.as_str(), c.messages))
        .collect();
    assert_eq!(counts, vec![("Alice", 4), ("Bob", 2), ("Carol", 1)]);
}

#[test]
fn test_fixture_streaks() {
    let dir = setup_fixtures();
    let report = analyze_fixture(&dir);

    let alice = report.streaks["Alice"];
    assert_eq!(alice.length, 3);
    assert_eq!(alice.start, Some(d(2024, 1, 1)));
    assert_eq!(alice.end, Some(d(2024, 1, 3)));

    // Bob posted on Jan 1 and Jan 5; the earlier run wins the tie
    assert_eq!(report.streaks["Bob"], StreakResult::single(d(2024, 1, 1)));
    assert_eq!(report.streaks["Carol"], StreakResult::single(d(2024, 1, 2)));

    let authors: Vec<&str> = report.streaks.keys().map(String::as_str).collect();
    assert_eq!(authors, vec!["Alice", "Bob", "Carol"]);
}

#[test]
fn test_fixture_weekday_histogram() {
    let dir = setup_fixtures();
    let report = analyze_fixture(&dir);

    // 2024-01-01 is a Monday
    assert_eq!(report.weekday_histogram.get(&1), Some(&2));
    assert_eq!(report.weekday_histogram.get(&2), Some(&3));
    assert_eq!(report.weekday_histogram.get(&3), Some(&1));
    assert_eq!(report.weekday_histogram.get(&5), Some(&1));
    assert_eq!(report.weekday_histogram.get(&4), None);
    assert_eq!(report.weekday_histogram.values().sum::<usize>(), 7);
}

#[test]
fn test_fixture_vocabulary() {
    let dir = setup_fixtures();
    let report = analyze_fixture(&dir);
    let table = report.vocabulary().unwrap();

    assert_eq!(table.entries()[0].token, "hiking");
    assert_eq!(table.get("hiking"), Some(4));
    assert_eq!(table.get("Happy"), Some(2));
    assert_eq!(table.get("new"), Some(2));

    // author names, stopwords, placeholders and tags are gone
    assert_eq!(table.get("Alice"), None);
    assert_eq!(table.get("the"), None);
    assert_eq!(table.get("Image"), None);
    assert_eq!(table.get("Emoji"), None);
    assert_eq!(table.get("Lv3"), None);

    for entry in table {
        assert!(entry.token.chars().count() >= 2, "{:?}", entry.token);
    }
    let counts: Vec<usize> = table.iter().map(|e| e.count).collect();
    assert!(counts.windows(2).all(|w| w[0] >= w[1]));
}

// ============================================================================
// Streaks and filtering
// ============================================================================

#[test]
fn test_streak_tie_goes_to_earliest_run() {
    let dates = ActiveDateSet::from_dates([
        d(2024, 1, 1),
        d(2024, 1, 2),
        d(2024, 1, 10),
        d(2024, 1, 11),
    ]);
    let streak = longest_streak(dates.as_slice());

    assert_eq!(streak.length, 2);
    assert_eq!(streak.start, Some(d(2024, 1, 1)));
    assert_eq!(streak.end, Some(d(2024, 1, 2)));
}

#[test]
fn test_single_date_streak() {
    let dates = ActiveDateSet::from_dates([d(2024, 3, 5)]);
    assert_eq!(
        longest_streak(dates.as_slice()),
        StreakResult {
            length: 1,
            start: Some(d(2024, 3, 5)),
            end: Some(d(2024, 3, 5)),
        }
    );
}

#[test]
fn test_filter_exclusions() {
    let stopwords = StopwordSet::parse("the");
    let config = VocabularyConfig::default();
    let filter = TokenFilter::new(&stopwords, &config).with_authors(["Alice"]);

    let kept = filter.apply(["the", "ok", "a", "Alice", "42nd", "hello"]);
    assert_eq!(kept, vec!["ok", "hello"]);
}

// ============================================================================
// Malformed input
// ============================================================================

#[test]
fn test_malformed_header_is_dropped() {
    // "Alice 2024/01/01" has no time, so it is not a header; it only opens
    // a block because it comes first
    let text = "Alice 2024/01/01\nno time here\n\
                Bob 2024/01/02 10:00:00\nHello\n\
                Carol 2024/01/03 11:00:00\nHey";
    let parsed = TranscriptParser::new().parse_str(text);

    assert_eq!(parsed.diagnostics.blocks, 3);
    assert_eq!(parsed.diagnostics.malformed_header, 1);
    let authors: Vec<&str> = parsed.records.iter().map(Record::author).collect();
    assert_eq!(authors, vec!["Bob", "Carol"]);
}

#[test]
fn test_invalid_date_is_dropped_and_run_continues() {
    let text = "Alice 2024/02/30 09:00:00\nimpossible day\n\
                Bob 2024/13/01 10:00:00\nimpossible month\n\
                Carol 2024/02/29 11:00:00\nleap day";
    let parsed = TranscriptParser::new().parse_str(text);

    assert_eq!(parsed.diagnostics.invalid_timestamp, 2);
    assert_eq!(parsed.records.len(), 1);
    assert_eq!(parsed.records[0].date(), d(2024, 2, 29));
}

#[test]
fn test_missing_transcript_is_io_error() {
    let dir = tempdir().unwrap();
    let err = TranscriptParser::new()
        .parse(&dir.path().join("missing.txt"))
        .unwrap_err();
    assert!(err.is_io());
}

#[test]
fn test_missing_stopwords_is_fatal_resource_error() {
    let dir = tempdir().unwrap();
    let err = StopwordSet::from_file(&dir.path().join("missing.txt")).unwrap_err();
    assert!(err.is_missing_resource());
}

// ============================================================================
// Collaborator seam
// ============================================================================

/// Splits on ASCII spaces and keeps the spaces, like a dictionary segmenter
/// would for text that needs no dictionary.
struct SpaceKeepingSegmenter;

impl WordSegmenter for SpaceKeepingSegmenter {
    fn name(&self) -> &'static str {
        "space"
    }

    fn segment(&self, text: &str) -> Result<Vec<String>> {
        Ok(text.split_inclusive(' ').map(str::to_string).collect())
    }
}

#[test]
fn test_custom_segmenter_is_used() {
    let parsed = TranscriptParser::new()
        .parse_str("Alice 2024/01/01 09:00:00\nhello world\nBob 2024/01/01 09:01:00\nhello");
    let report = analyze(
        &parsed,
        &StopwordSet::new(),
        SpaceKeepingSegmenter,
        &VocabularyConfig::default(),
    );

    let table = report.vocabulary().unwrap();
    // "hello " (with the space) and "world。hello" come out of this segmenter
    assert_eq!(table.get("hello "), Some(1));
    assert_eq!(table.get("world。hello"), Some(1));
}

struct GappySegmenter;

impl WordSegmenter for GappySegmenter {
    fn name(&self) -> &'static str {
        "gappy"
    }

    fn segment(&self, text: &str) -> Result<Vec<String>> {
        Ok(text.split_whitespace().map(str::to_string).collect())
    }
}

#[test]
fn test_segmenter_with_gaps_fails_vocabulary_only() {
    let parsed = TranscriptParser::new()
        .parse_str("Alice 2024/01/01 09:00:00\nhello world\nAlice 2024/01/02 09:00:00\nagain");
    let report = analyze(
        &parsed,
        &StopwordSet::new(),
        GappySegmenter,
        &VocabularyConfig::default(),
    );

    assert!(report.vocabulary.as_ref().unwrap_err().is_segmentation());
    assert_eq!(report.streaks["Alice"].length, 2);
}

// ============================================================================
// Chinese transcripts
// ============================================================================

const CHINESE_TRANSCRIPT: &str = "\
小明 2024/3/1 20:00:00
我们明天去爬山吧
小红 2024/3/1 20:05:00
好的，爬山很开心[图片]
小明 2024/3/2 9:00:00
【回复】天气很好，我们出发
";

fn chinese_report<S: WordSegmenter>(segmenter: S) -> Report {
    let parsed = TranscriptParser::new().parse_str(CHINESE_TRANSCRIPT);
    analyze(
        &parsed,
        &StopwordSet::parse("好的\n"),
        segmenter,
        &VocabularyConfig::default(),
    )
}

#[test]
fn test_jieba_counts_chinese_words() {
    let report = chinese_report(JiebaSegmenter::new());
    let table = report.vocabulary().unwrap();

    assert_eq!(table.get("我们"), Some(2));
    assert_eq!(table.get("天气"), Some(1));
    assert_eq!(table.get("明天"), Some(1));
    assert_eq!(table.get("好的"), None);
    assert!(table.iter().all(|entry| entry.token.chars().count() >= 2));
    assert_eq!(report.streaks["小明"].length, 2);
}

#[test]
fn test_unicode_segmenter_drops_han_characters() {
    let report = chinese_report(UnicodeWordSegmenter);
    assert!(report.vocabulary().unwrap().is_empty());
}
