//! Line-based chat export parser.
//!
//! Export files vary by locale. The parser auto-detects the line layout by
//! sampling the first lines of the file (see
//! [`ScanConfig::detection_window`]).
//!
//! Supported layouts:
//! - `[1/15/24, 10:30:45 AM] Sender: Message` (bracketed, 12-hour)
//! - `[15.01.24, 10:30:45] Sender: Message` (bracketed, dotted)
//! - `15.01.2024, 20:40 - Sender: Message` (dash, dotted)
//! - `15/01/2024, 10:30 - Sender: Message` (dash, slashed)
//!
//! Lines that match the detected layout start a new message. Lines that
//! don't are continuations of the previous message and are stitched back
//! onto it; they are never counted as messages of their own. System
//! notices (encryption banners, join/leave notices) are skipped unless
//! configured otherwise.

use std::path::Path;
use std::sync::OnceLock;

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;

use crate::Message;
use crate::config::ScanConfig;
use crate::error::{ChatlensError, Result};
use crate::intake;

/// Detected export line layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineLayout {
    /// `[1/15/24, 10:30:45 AM] Sender: Message`
    BracketedUs = 0,
    /// `[15.01.24, 10:30:45] Sender: Message`
    BracketedDot = 1,
    /// `15.01.2024, 20:40 - Sender: Message`
    DashDot = 2,
    /// `15/01/2024, 10:30 - Sender: Message`
    DashSlash = 3,
}

impl LineLayout {
    const ALL: [LineLayout; 4] = [
        LineLayout::BracketedUs,
        LineLayout::BracketedDot,
        LineLayout::DashDot,
        LineLayout::DashSlash,
    ];

    /// Regex pattern for this layout.
    ///
    /// Captures: 1 = date, 2 = time, 3 = sender, 4 = first content line.
    fn pattern(self) -> &'static str {
        match self {
            LineLayout::BracketedUs => {
                r"^\[(\d{1,2}/\d{1,2}/\d{2,4}),\s(\d{1,2}:\d{2}(?::\d{2})?(?:\s?[APap][Mm])?)\]\s([^:]+):\s?(.*)"
            }
            LineLayout::BracketedDot => {
                r"^\[(\d{1,2}\.\d{1,2}\.\d{2,4}),\s(\d{1,2}:\d{2}(?::\d{2})?)\]\s([^:]+):\s?(.*)"
            }
            LineLayout::DashDot => {
                r"^(\d{1,2}\.\d{1,2}\.\d{2,4}),\s(\d{1,2}:\d{2}(?::\d{2})?)\s-\s([^:]+):\s?(.*)"
            }
            LineLayout::DashSlash => {
                r"^(\d{1,2}/\d{1,2}/\d{2,4}),\s(\d{1,2}:\d{2}(?::\d{2})?)\s-\s([^:]+):\s?(.*)"
            }
        }
    }

    /// Compiled regex for this layout, built once per process.
    fn regex(self) -> &'static Regex {
        static CACHE: [OnceLock<Regex>; 4] = [
            OnceLock::new(),
            OnceLock::new(),
            OnceLock::new(),
            OnceLock::new(),
        ];
        CACHE[self as usize].get_or_init(|| Regex::new(self.pattern()).expect("valid layout pattern"))
    }

    /// Chrono parse formats tried in order for `"{date} {time}"`.
    fn timestamp_formats(self) -> &'static [&'static str] {
        match self {
            LineLayout::BracketedUs => &[
                "%m/%d/%y %I:%M:%S %p",
                "%m/%d/%Y %I:%M:%S %p",
                "%m/%d/%y %I:%M %p",
                "%m/%d/%Y %I:%M %p",
                "%m/%d/%y %I:%M:%S%p",
                "%m/%d/%y %I:%M%p",
                "%m/%d/%y %H:%M:%S",
                "%m/%d/%Y %H:%M:%S",
                "%m/%d/%y %H:%M",
                "%m/%d/%Y %H:%M",
                // Day-first fallback for bracketed exports from day-first locales
                "%d/%m/%Y %H:%M:%S",
                "%d/%m/%Y %H:%M",
            ],
            LineLayout::BracketedDot | LineLayout::DashDot => &[
                "%d.%m.%y %H:%M:%S",
                "%d.%m.%Y %H:%M:%S",
                "%d.%m.%y %H:%M",
                "%d.%m.%Y %H:%M",
            ],
            LineLayout::DashSlash => &[
                "%d/%m/%y %H:%M:%S",
                "%d/%m/%Y %H:%M:%S",
                "%d/%m/%y %H:%M",
                "%d/%m/%Y %H:%M",
            ],
        }
    }
}

/// Picks the layout whose pattern matches the most sample lines.
///
/// Returns `None` when no layout matches any line.
fn detect_layout(sample: &[&str]) -> Option<LineLayout> {
    let mut best: Option<(LineLayout, usize)> = None;
    for layout in LineLayout::ALL {
        let hits = sample
            .iter()
            .filter(|line| layout.regex().is_match(line))
            .count();
        if hits > 0 && best.is_none_or(|(_, top)| hits > top) {
            best = Some((layout, hits));
        }
    }
    best.map(|(layout, _)| layout)
}

/// Notice phrases matched anywhere in the (lowercased) content.
const NOTICE_PHRASES: &[&str] = &[
    "end-to-end encrypted",
    "created group",
    "created this group",
    "added",
    "removed",
    "changed the subject",
    "changed this group's icon",
    "changed the group description",
    "changed their phone number",
    "joined using this group's invite link",
    "pinned a message",
    "security code changed",
    "turned on disappearing messages",
    "turned off disappearing messages",
    "now an admin",
];

/// Short notice verbs matched only as the entire content.
const NOTICE_EXACT: &[&str] = &["left", "joined"];

/// Check if a matched line is a system notice rather than a user message.
fn is_system_notice(sender: &str, content: &str) -> bool {
    let sender = sender.trim();
    if sender.is_empty() {
        return true;
    }
    let sender_lower = sender.to_lowercase();
    if sender_lower == "system" || sender_lower.contains("whatsapp") {
        return true;
    }

    let content_lower = content.trim().to_lowercase();
    if NOTICE_EXACT.iter().any(|verb| content_lower == *verb) {
        return true;
    }
    NOTICE_PHRASES
        .iter()
        .any(|phrase| content_lower.contains(phrase))
}

/// Parses a `"{date} {time}"` stamp with the layout's format table.
fn parse_timestamp(date: &str, time: &str, layout: LineLayout) -> Option<DateTime<Utc>> {
    let stamp = format!("{date} {time}");
    layout
        .timestamp_formats()
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&stamp, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Parser for exported chat log text files.
///
/// # Example
///
/// ```rust,no_run
/// use chatlens::parser::ExportParser;
///
/// let parser = ExportParser::new();
/// let messages = parser.parse("chat_export.txt".as_ref())?;
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub struct ExportParser {
    config: ScanConfig,
}

impl ExportParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ScanConfig::default(),
        }
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Validates, loads and parses an export file.
    ///
    /// The intake boundary runs first: a non-`.txt` path or an oversized
    /// file is rejected before any content is read.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError`] if the file fails intake validation,
    /// cannot be read, or matches no known line layout.
    pub fn parse(&self, path: &Path) -> Result<Vec<Message>> {
        let content = intake::load_export(path, &self.config)?;
        self.parse_str(&content)
    }

    /// Parses an export file (convenience method accepting a `&str` path).
    pub fn parse_file(&self, path: &str) -> Result<Vec<Message>> {
        self.parse(Path::new(path))
    }

    /// Parses export content from a string.
    ///
    /// Empty or whitespace-only content parses to an empty message list;
    /// non-empty content that matches no known layout is an
    /// [`ChatlensError::InvalidFormat`] error.
    pub fn parse_str(&self, content: &str) -> Result<Vec<Message>> {
        let lines: Vec<&str> = content.lines().collect();
        if lines.iter().all(|line| line.trim().is_empty()) {
            return Ok(vec![]);
        }

        // lines is non-empty past the blank-input check above
        let window = self.config.detection_window.clamp(1, lines.len());
        let layout = detect_layout(&lines[..window]).ok_or_else(|| {
            ChatlensError::invalid_format(
                "could not detect a known export line layout; \
                 make sure the file is a chat export",
            )
        })?;
        let regex = layout.regex();

        let mut messages: Vec<Message> = Vec::new();
        for line in &lines {
            if line.trim().is_empty() {
                continue;
            }

            if let Some(caps) = regex.captures(line) {
                let date = caps.get(1).map_or("", |m| m.as_str());
                let time = caps.get(2).map_or("", |m| m.as_str());
                let sender = caps.get(3).map_or("", |m| m.as_str()).trim();
                let text = caps.get(4).map_or("", |m| m.as_str());

                if self.config.skip_system_notices && is_system_notice(sender, text) {
                    continue;
                }

                let mut msg = Message::new(sender, text);
                if let Some(ts) = parse_timestamp(date, time, layout) {
                    msg = msg.with_timestamp(ts);
                }
                messages.push(msg);
            } else if let Some(last) = messages.last_mut() {
                // Continuation line of a multiline message.
                last.content.push('\n');
                last.content.push_str(line);
            }
            // Orphan continuation before the first message: dropped.
        }

        Ok(messages)
    }
}

impl Default for ExportParser {
    fn default() -> Self {
        Self::new()
    }
}
