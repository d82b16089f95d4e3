//! Example: Using chatstreak as a library
//!
//! This example demonstrates how to use chatstreak in your own projects.
//!
//! Run with: cargo run --example library_usage

use chatstreak::core::vocabulary::TokenFilter;
use chatstreak::prelude::*;

const TRANSCRIPT: &str = "\
【群主】Alice 2024/3/1 9:00:00
Morning everyone, coffee at ten?[Image]
Bob 2024/3/1 9:02:10
coffee sounds great
Alice 2024/3/2 8:45:00
coffee again today
Alice 2024/3/3 8:50:00
【Reply】same time tomorrow
Carol 2024/3/3 25:00:00
this one has a broken clock
Bob 2024/3/5 18:00:00
weekend plans anyone
";

/// A segmenter that only splits on spaces, keeping them as tokens.
struct SpaceSegmenter;

impl WordSegmenter for SpaceSegmenter {
    fn name(&self) -> &'static str {
        "spaces"
    }

    fn segment(&self, text: &str) -> Result<Vec<String>> {
        let mut tokens = Vec::new();
        let mut start = 0;
        for (i, c) in text.char_indices() {
            if c == ' ' {
                if start < i {
                    tokens.push(text[start..i].to_string());
                }
                tokens.push(" ".to_string());
                start = i + 1;
            }
        }
        if start < text.len() {
            tokens.push(text[start..].to_string());
        }
        Ok(tokens)
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== chatstreak Library Usage Examples ===\n");

    // Example 1: Parse a transcript
    println!("1. Parsing a transcript:");
    let parsed = TranscriptParser::new().parse_str(TRANSCRIPT);

    for record in &parsed.records {
        println!(
            "   [{}] {}: {}",
            record.timestamp(),
            record.author(),
            record.content()
        );
    }
    println!(
        "   ({} records, {} dropped)",
        parsed.diagnostics.records,
        parsed.diagnostics.dropped()
    );

    // Example 2: Streak of a single date set
    println!("\n2. Longest streak for hand-picked dates:");
    let dates = ActiveDateSet::from_dates(
        ["2024-01-01", "2024-01-02", "2024-01-10", "2024-01-11"]
            .iter()
            .filter_map(|d| d.parse().ok()),
    );
    let streak = longest_streak(dates.as_slice());
    println!(
        "   {} days, {:?} to {:?}",
        streak.length, streak.start, streak.end
    );

    // Example 3: Token filtering on its own
    println!("\n3. Filtering tokens:");
    let stopwords = StopwordSet::parse("the\nat");
    let config = VocabularyConfig::default();
    let filter = TokenFilter::new(&stopwords, &config).with_authors(["Alice"]);
    let kept = filter.apply(["the", "ok", "a", "Alice", "42nd", "hello"]);
    println!("   Kept: {:?}", kept);

    // Example 4: Full analysis
    println!("\n4. Full analysis:");
    let report = analyze(&parsed, &stopwords, UnicodeWordSegmenter, &config);

    for count in &report.message_counts {
        let streak = report.streaks[&count.author];
        println!(
            "   {:<6} {} messages, longest streak {} days",
            count.author, count.messages, streak.length
        );
    }
    if let Some(table) = report.vocabulary() {
        for entry in table.top(3) {
            println!("   word {:?} x{}", entry.token, entry.count);
        }
    }

    // Example 5: Plug in a different segmenter
    println!("\n5. Custom segmenter:");
    let report = analyze(&parsed, &stopwords, SpaceSegmenter, &config);
    match &report.vocabulary {
        Ok(table) => println!("   {} distinct words via spaces", table.len()),
        Err(e) => println!("   vocabulary failed: {e}"),
    }

    // Example 6: Chinese text needs a dictionary segmenter
    println!("\n6. Chinese transcript with jieba:");
    let chinese = TranscriptParser::new()
        .parse_str("小明 2024/3/1 20:00:00\n我们明天去爬山吧\n小红 2024/3/2 8:00:00\n天气很好，我们出发");
    let jieba = JiebaSegmenter::new();
    let chinese_report = analyze(&chinese, &stopwords, &jieba, &config);
    if let Some(table) = chinese_report.vocabulary() {
        for entry in table.top(3) {
            println!("   word {:?} x{}", entry.token, entry.count);
        }
    }

    // Example 7: Output to strings
    println!("\n7. Output formats:");
    let csv = to_csv(&report)?;
    println!("   CSV:\n{}", indent(&csv));

    let json = to_json(&report)?;
    println!("   JSON is {} bytes", json.len());

    if let Some(table) = report.vocabulary() {
        println!("   Words CSV:\n{}", indent(&words_to_csv(table)?));
    }

    println!("\n=== Done ===");
    Ok(())
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("      {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
