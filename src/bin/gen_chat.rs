//! Synthetic chat export generator for stress testing chatlens.
//!
//! Usage: cargo run --features gen-test --bin gen_chat -- [messages] [output] [layout]
//! Example: cargo run --features gen-test --bin gen_chat -- 50000 heavy_chat.txt dash

use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};

use rand::Rng;
use rand::seq::SliceRandom;

const SENDERS: &[&str] = &[
    "Alice",
    "Bob",
    "Charlie",
    "Иван",
    "村上",
    "  Alice  ", // whitespace variant, must collapse with "Alice"
    "User With Spaces",
    "🔥FireUser🔥",
];

const CONTENTS: &[&str] = &[
    "Normal message with some text",
    "Message with semicolons; here; and; there",
    "Message with \"quotes\" and 'apostrophes'",
    "Кириллица: Привет мир!",
    "日本語: こんにちは",
    "Emoji spam: 🎉🔥💀🎉🔥💀",
    "<Media omitted>",
    "https://example.com/some/long/link?with=params",
    "short",
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(10_000);
    let output = args.get(2).map(|s| s.as_str()).unwrap_or("heavy_chat.txt");
    let layout = args.get(3).map(|s| s.as_str()).unwrap_or("bracketed");

    println!("🧪 Export Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Messages: {count}");
    println!("   Output:   {output}");
    println!("   Layout:   {layout}");
    println!();

    match layout {
        "bracketed" | "us" => generate(count, output, stamp_bracketed_us),
        "dot" => generate(count, output, stamp_bracketed_dot),
        "dash" => generate(count, output, stamp_dash_dot),
        _ => {
            eprintln!("Unknown layout: {layout}. Use 'bracketed', 'dot' or 'dash'");
            std::process::exit(1);
        }
    }
}

fn stamp_bracketed_us(i: usize, sender: &str, content: &str) -> String {
    format!(
        "[{}/{}/24, {}:{:02}:00 {}] {}: {}\n",
        (i % 12) + 1,
        (i % 28) + 1,
        (i % 12) + 1,
        i % 60,
        if i % 2 == 0 { "AM" } else { "PM" },
        sender,
        content
    )
}

fn stamp_bracketed_dot(i: usize, sender: &str, content: &str) -> String {
    format!(
        "[{:02}.{:02}.24, {:02}:{:02}:00] {}: {}\n",
        (i % 28) + 1,
        (i % 12) + 1,
        i % 24,
        i % 60,
        sender,
        content
    )
}

fn stamp_dash_dot(i: usize, sender: &str, content: &str) -> String {
    format!(
        "{:02}.{:02}.2024, {:02}:{:02} - {}: {}\n",
        (i % 28) + 1,
        (i % 12) + 1,
        i % 24,
        i % 60,
        sender,
        content
    )
}

fn generate(count: usize, output: &str, stamp: fn(usize, &str, &str) -> String) {
    let file = File::create(output).expect("Failed to create output file");
    let mut writer = BufWriter::with_capacity(1024 * 1024, file);

    let mut rng = rand::thread_rng();
    let start = std::time::Instant::now();
    let mut bytes_written: usize = 0;

    for i in 0..count {
        let sender = SENDERS.choose(&mut rng).unwrap();
        let content = CONTENTS.choose(&mut rng).unwrap();

        let line = stamp(i, sender, content);
        bytes_written += line.len();
        writer.write_all(line.as_bytes()).unwrap();

        // Occasionally emit continuation and garbage lines
        if rng.gen_range(0..10) == 0 {
            let extra = "continuation line of the previous message\n";
            writer.write_all(extra.as_bytes()).unwrap();
            bytes_written += extra.len();
        }
        if i % 1000 == 500 {
            let garbage = "---- no timestamp, no sender ----\n";
            writer.write_all(garbage.as_bytes()).unwrap();
            bytes_written += garbage.len();
        }

        if (i + 1) % 10000 == 0 {
            let elapsed = start.elapsed().as_secs_f64();
            let mps = (i + 1) as f64 / elapsed;
            let mb = bytes_written as f64 / 1_000_000.0;
            eprint!("\r   Generated {}/{} ({mb:.1} MB, {mps:.0} msg/s)", i + 1, count);
        }
    }

    writer.flush().unwrap();

    let elapsed = start.elapsed();
    let mb = bytes_written as f64 / 1_000_000.0;

    println!("\n✅ Done!");
    println!("   Size: {mb:.2} MB");
    println!("   Time: {:.2}s", elapsed.as_secs_f64());
    println!("   Speed: {:.0} msg/s", count as f64 / elapsed.as_secs_f64());
}
