//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`ReportFormat`] - CLI-side report format enum
//!
//! The CLI-side [`ReportFormat`] mirrors
//! [`report::ReportFormat`](crate::report::ReportFormat) so that the
//! library type stays free of CLI framework derives; `From` bridges them.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Summarize an exported chat log: participants, message counts,
/// date range.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat_export.txt
    chatlens chat_export.txt -f json -o summary.json
    chatlens chat_export.txt --from Alice
    chatlens chat_export.txt --after 2024-01-01 --before 2024-06-30
    chatlens chat_export.txt --include-system")]
pub struct Args {
    /// Path to the exported chat log (.txt)
    pub input: String,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Keep only messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep only messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Keep only messages from this participant
    #[arg(long, value_name = "USER")]
    pub from: Option<String>,

    /// Count system notices as regular messages
    #[arg(long)]
    pub include_system: bool,

    /// Maximum accepted input size in bytes
    #[arg(long, value_name = "BYTES")]
    pub max_size: Option<u64>,
}

/// Report format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable participant table (default)
    #[default]
    #[value(alias = "txt")]
    Text,

    /// Pretty-printed JSON
    Json,

    /// CSV with semicolon delimiter
    Csv,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "JSON"),
            ReportFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            _ => Err(format!(
                "Unknown format: '{s}'. Expected one of: text, json, csv"
            )),
        }
    }
}

// Conversion to the library format type
impl From<ReportFormat> for crate::report::ReportFormat {
    fn from(format: ReportFormat) -> crate::report::ReportFormat {
        match format {
            ReportFormat::Text => crate::report::ReportFormat::Text,
            ReportFormat::Json => crate::report::ReportFormat::Json,
            ReportFormat::Csv => crate::report::ReportFormat::Csv,
        }
    }
}
