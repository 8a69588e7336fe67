//! # Chatlens
//!
//! A Rust library for parsing exported chat logs and aggregating them into
//! summaries: participants, per-participant message counts, and the date
//! range a conversation covers.
//!
//! ## Overview
//!
//! Chat applications export conversations as line-based text files, one
//! message per line with locale-dependent timestamp layouts, multiline
//! messages continued on following lines, and system notices interspersed.
//! Chatlens auto-detects the layout, scans the file in a single pass, and
//! produces a [`ChatSummary`] the caller can render or serialize.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatlens::parser::ExportParser;
//! use chatlens::summary::ChatSummary;
//!
//! fn main() -> chatlens::Result<()> {
//!     let parser = ExportParser::new();
//!     let messages = parser.parse("chat_export.txt".as_ref())?;
//!
//!     let summary = ChatSummary::from_messages(&messages);
//!     for name in summary.participants() {
//!         println!("{name}: {} messages", summary.count_for(name));
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Input boundary
//!
//! [`ExportParser::parse`](parser::ExportParser::parse) validates before it
//! reads: only `.txt` files are accepted, and files above the configured
//! size ceiling (5 MiB by default) are rejected from metadata alone. Use
//! [`parse_str`](parser::ExportParser::parse_str) to bypass the boundary
//! for content already in memory.
//!
//! ## Module Structure
//!
//! - [`parser`] — export line-layout detection and parsing
//! - [`summary`] — [`ChatSummary`], [`DateRange`] aggregation
//! - [`filter`] — date-range and sender filtering
//! - [`intake`] — input validation and loading
//! - [`report`] — text/JSON/CSV report rendering
//! - [`config`] — [`ScanConfig`](config::ScanConfig)
//! - [`cli`] — CLI types (feature `cli`)
//! - [`error`] — unified error types ([`ChatlensError`], [`Result`])
//! - [`prelude`] — convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod intake;
pub mod message;
pub mod parser;
pub mod report;
pub mod summary;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlensError, Result};
pub use message::Message;
pub use summary::{ChatSummary, DateRange};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::{ChatSummary, DateRange, Message};

    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Parsing
    pub use crate::config::ScanConfig;
    pub use crate::parser::ExportParser;

    // Filtering
    pub use crate::filter::{FilterConfig, apply_filters};

    // Intake boundary
    pub use crate::intake::{has_export_extension, load_export};

    // Reports
    pub use crate::report::{ReportFormat, render_text, to_report_string, write_report};

    #[cfg(feature = "csv-report")]
    pub use crate::report::to_csv;
    #[cfg(feature = "json-report")]
    pub use crate::report::to_json;
}
