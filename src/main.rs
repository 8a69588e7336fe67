//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatlens::cli::Args;
use chatlens::config::ScanConfig;
use chatlens::filter::{FilterConfig, apply_filters};
use chatlens::parser::ExportParser;
use chatlens::report::{ReportFormat, to_report_string, write_report};
use chatlens::summary::ChatSummary;
use chatlens::{ChatlensError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();
    let format: ReportFormat = args.format.into();

    // Print header
    println!("💬 chatlens v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    if let Some(ref output) = args.output {
        println!("💾 Output:  {output}");
    }
    println!("📄 Format:  {format}");

    // Build filter configuration
    let mut filter_config = FilterConfig::new();

    if let Some(ref after) = args.after {
        filter_config = filter_config.with_date_from(after)?;
        println!("📅 After:   {after}");
    }

    if let Some(ref before) = args.before {
        filter_config = filter_config.with_date_to(before)?;
        println!("📅 Before:  {before}");
    }

    if let Some(ref from) = args.from {
        filter_config = filter_config.with_sender(from.clone());
        println!("👤 From:    {from}");
    }

    println!();

    // Build scan configuration
    let mut scan_config = ScanConfig::new();
    if args.include_system {
        scan_config = scan_config.with_skip_system_notices(false);
    }
    if let Some(limit) = args.max_size {
        scan_config = scan_config.with_max_file_size(limit);
    }

    // Step 1: Validate and parse
    println!("⏳ Parsing export...");
    let parse_start = Instant::now();
    let parser = ExportParser::with_config(scan_config);
    let messages = parser.parse(Path::new(&args.input))?;
    println!(
        "   Found {} messages ({:.2}s)",
        messages.len(),
        parse_start.elapsed().as_secs_f64()
    );

    // Step 2: Filter
    let messages = if filter_config.is_active() {
        println!("🔍 Filtering messages...");
        let filtered = apply_filters(messages, &filter_config);
        println!("   {} messages after filtering", filtered.len());
        filtered
    } else {
        messages
    };

    // Step 3: Aggregate
    let summary = ChatSummary::from_messages(&messages);
    if summary.is_empty() {
        return Err(ChatlensError::no_messages(Some(args.input.clone().into())));
    }

    // Step 4: Render
    match args.output {
        Some(ref path) => {
            println!("💾 Writing {format} report...");
            write_report(&summary, path, format)?;
            println!();
            println!("✅ Done! Report saved to {path}");
        }
        None => {
            println!();
            print!("{}", to_report_string(&summary, format)?);
        }
    }

    // Summary footer
    println!();
    println!("📊 Summary:");
    println!("   Participants: {}", summary.participant_count());
    println!("   Messages:     {}", summary.total_messages);
    if let Some((name, count)) = summary.top_participant() {
        println!("   Most active:  {name} ({count} messages)");
    }
    if let Some(range) = &summary.date_range {
        println!(
            "   Date range:   {} to {}",
            range.start.format("%Y-%m-%d"),
            range.end.format("%Y-%m-%d")
        );
    }

    println!();
    println!("⚡ Total time: {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}
