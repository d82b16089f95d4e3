//! # chatstreak CLI
//!
//! Command-line interface for chatstreak library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatstreak::ChatstreakError;
use chatstreak::cli::{Args, adjust_output_extension};
use chatstreak::core::output::write_words_csv;
use chatstreak::core::{Report, analyze};
use chatstreak::error::DropReason;
use chatstreak::format::write_to_format;
use chatstreak::parser::TranscriptParser;
use chatstreak::stopwords::StopwordSet;

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(args: &Args) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run() -> Result<(), ChatstreakError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();
    init_logging(&args);

    let format = args.report_format();
    let output_path = adjust_output_extension(&args.output, format);

    // Print header
    println!("📦 chatstreak v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:     {}", args.input.display());
    println!("🚫 Stopwords: {}", args.stopwords.display());
    println!("💾 Output:    {}", output_path);
    println!("📄 Format:    {}", format);
    println!();

    // A missing stopword list fails before the transcript is read
    let stopwords = StopwordSet::from_file(&args.stopwords)?;
    println!("   Loaded {} stopwords", stopwords.len());

    let segmenter = args.word_segmenter();
    println!("✂️  Segmenter: {}", segmenter.name());

    let parser = TranscriptParser::new();
    println!("⏳ Parsing {}...", parser.name());
    let parse_start = Instant::now();
    let parsed = parser.parse(&args.input)?;
    println!(
        "   Found {} messages in {} blocks ({:.2}s)",
        parsed.diagnostics.records,
        parsed.diagnostics.blocks,
        parse_start.elapsed().as_secs_f64()
    );

    println!("📊 Analyzing...");
    let config = args.vocabulary_config();
    let report = analyze(&parsed, &stopwords, &segmenter, &config);

    println!("💾 Writing {}...", format);
    write_to_format(&report, &output_path, format)?;

    if let Some(ref words_path) = args.words {
        match report.vocabulary() {
            Some(table) => {
                write_words_csv(table, words_path)?;
                println!("   Word table saved to {}", words_path.display());
            }
            None => println!("⚠️  Word table not written: vocabulary unavailable"),
        }
    }

    println!();
    println!("✅ Done! Report saved to {}", output_path);

    print_summary(&report, args.top);

    println!();
    println!("⚡ Total time: {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}

fn print_summary(report: &Report, top: usize) {
    let diagnostics = &report.diagnostics;

    println!();
    println!("📊 Summary:");
    println!("   Records:   {}", diagnostics.records);
    if diagnostics.dropped() > 0 {
        println!("   Dropped:   {} blocks", diagnostics.dropped());
        for reason in [DropReason::MalformedHeader, DropReason::InvalidTimestamp] {
            let count = diagnostics.dropped_for(reason);
            if count > 0 {
                println!("     {reason}: {count}");
            }
        }
    }

    println!();
    println!("👥 Messages per author:");
    for count in &report.message_counts {
        println!("   {:<20} {}", count.author, count.messages);
    }

    println!();
    println!("📅 Messages per weekday:");
    for (&day, &messages) in &report.weekday_histogram {
        let name = WEEKDAYS.get(day as usize - 1).copied().unwrap_or("?");
        println!("   {name}  {messages}");
    }

    println!();
    println!("🔥 Longest streaks:");
    for (author, streak) in &report.streaks {
        match (streak.start, streak.end) {
            (Some(start), Some(end)) => println!(
                "   {:<20} {} days ({} → {})",
                author, streak.length, start, end
            ),
            _ => println!("   {:<20} 0 days", author),
        }
    }

    println!();
    match &report.vocabulary {
        Ok(table) => {
            println!("💬 Top {} words ({} distinct):", top, table.len());
            for entry in table.top(top) {
                println!("   {:<20} {}", entry.token, entry.count);
            }
        }
        Err(e) => println!("⚠️  Vocabulary unavailable: {}", e),
    }
}
