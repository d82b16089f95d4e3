//! Synthetic transcript generator for stress testing chatstreak.
//!
//! Usage: cargo run --bin gen_test --features gen-test -- [messages] [output]
//! Example: cargo run --bin gen_test --features gen-test -- 100000 heavy_chat.txt

use chrono::{Days, NaiveDate};
use rand::Rng;
use rand::seq::SliceRandom;
use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};

const AUTHORS: &[&str] = &[
    "Alice",
    "Bob",
    "Carol",
    "小明",
    "小红",
    "老王",
    "Иван",
    "user_42",
    "🔥FireUser🔥",
];

const TAGS: &[&str] = &["【管理员】", "【群主】", "【Admin】", "【Lv5 Legend】"];

const PLACEHOLDERS: &[&str] = &["[Image]", "[Emoji]", "[图片]", "[表情]"];

const PHRASES: &[&str] = &[
    "good morning everyone",
    "has anyone tried the new build",
    "see you tomorrow",
    "lunch together today",
    "the meeting moved to friday",
    "今天天气不错",
    "大家早上好",
    "明天见",
    "哈哈哈哈",
    "Привет всем",
];

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(2).map(|s| s.as_str()).unwrap_or("heavy_chat.txt");

    println!("🧪 Transcript Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Messages: {}", count);
    println!("   Output:   {}", output);
    println!();

    generate_transcript(count, output)
}

fn generate_transcript(count: usize, output: &str) -> io::Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::with_capacity(1024 * 1024, file); // 1MB buffer

    let mut rng = rand::thread_rng();
    let start = std::time::Instant::now();
    let mut bytes_written: usize = 0;

    let mut day = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default();
    let mut second_of_day: u32 = 8 * 3600;

    for i in 0..count {
        // New day roughly every 40 messages; sometimes skip a few days
        if rng.gen_ratio(1, 40) {
            let gap = if rng.gen_ratio(1, 4) { rng.gen_range(2..=5) } else { 1 };
            day = day.checked_add_days(Days::new(gap)).unwrap_or(day);
            second_of_day = 8 * 3600;
        }
        second_of_day = (second_of_day + rng.gen_range(1..600)).min(86_399);

        let block = generate_block(&mut rng, i, day, second_of_day);
        bytes_written += block.len();
        writer.write_all(block.as_bytes())?;

        if (i + 1) % 10000 == 0 {
            let elapsed = start.elapsed().as_secs_f64();
            let mps = (i + 1) as f64 / elapsed;
            let mb = bytes_written as f64 / 1_000_000.0;
            eprint!(
                "\r   Generated {}/{} ({:.1} MB, {:.0} msg/s)",
                i + 1,
                count,
                mb,
                mps
            );
        }
    }

    writer.flush()?;

    let elapsed = start.elapsed();
    let mb = bytes_written as f64 / 1_000_000.0;

    println!("\n\n✅ Done!");
    println!("   Size: {:.2} MB", mb);
    println!("   Time: {:.2}s", elapsed.as_secs_f64());
    println!(
        "   Speed: {:.0} msg/s",
        count as f64 / elapsed.as_secs_f64()
    );
    Ok(())
}

fn generate_block(rng: &mut impl Rng, index: usize, day: NaiveDate, second_of_day: u32) -> String {
    let (h, m, s) = (second_of_day / 3600, second_of_day / 60 % 60, second_of_day % 60);
    let date = day.format("%Y/%-m/%-d");

    let header = match index % 500 {
        // System line without an author
        250 => format!("{} {date} {h}:{m:02}:{s:02}", TAGS[0]),
        // Impossible calendar date
        499 => format!("Bob 2023/2/30 {h}:{m:02}:{s:02}"),
        _ => {
            let author = AUTHORS.choose(rng).copied().unwrap_or("Alice");
            let tag = if rng.gen_ratio(1, 5) {
                TAGS.choose(rng).copied().unwrap_or_default()
            } else {
                ""
            };
            format!("{tag}{author} {date} {h}:{m:02}:{s:02}")
        }
    };

    format!("{header}\n{}\n\n", generate_content(rng, index))
}

fn generate_content(rng: &mut impl Rng, index: usize) -> String {
    let phrase = PHRASES.choose(rng).copied().unwrap_or_default();
    match index % 12 {
        0..=5 => phrase.to_string(),

        // Attachments
        6 => PLACEHOLDERS.choose(rng).copied().unwrap_or_default().to_string(),
        7 => format!("{phrase}{}", PLACEHOLDERS.choose(rng).copied().unwrap_or_default()),

        // Multi-line
        8 => format!("{phrase}\nsecond line\n\nthird line after a blank"),

        // Numbers and mentions
        9 => format!("@{} room {} at {}pm", AUTHORS[index % AUTHORS.len()], index % 900, index % 12),

        // Tagged content
        10 => format!("{}{phrase}", TAGS[index % TAGS.len()]),

        // Empty
        _ => String::new(),
    }
}
