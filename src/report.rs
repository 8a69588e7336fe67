//! Summary report rendering.
//!
//! A [`ChatSummary`] can be rendered three ways:
//!
//! - [`Text`](ReportFormat::Text) - aligned participant table (default)
//! - [`Json`](ReportFormat::Json) - pretty-printed JSON (feature `json-report`)
//! - [`Csv`](ReportFormat::Csv) - semicolon-delimited rows (feature `csv-report`)
//!
//! # Example
//!
//! ```rust
//! use chatlens::report::{ReportFormat, to_report_string};
//! use chatlens::summary::ChatSummary;
//! use chatlens::Message;
//!
//! let summary = ChatSummary::from_messages(&[Message::new("Alice", "Hi")]);
//! let text = to_report_string(&summary, ReportFormat::Text)?;
//! assert!(text.contains("Alice"));
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ChatlensError, Result};
use crate::summary::ChatSummary;

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ReportFormat {
    /// Human-readable participant table (default)
    #[default]
    Text,

    /// Pretty-printed JSON object
    Json,

    /// CSV with semicolon delimiter
    Csv,
}

impl ReportFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "json", "csv"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [ReportFormat] {
        &[ReportFormat::Text, ReportFormat::Json, ReportFormat::Csv]
    }

    /// Detects format from a file path based on extension.
    pub fn from_path(path: &str) -> Result<Self> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();
        match ext.as_str() {
            "txt" | "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            _ => Err(ChatlensError::invalid_format(format!(
                "unknown report extension: '.{ext}'. Expected one of: txt, json, csv"
            ))),
        }
    }
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

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                ReportFormat::all_names().join(", ")
            )),
        }
    }
}

/// Participant rows ordered by message count (descending), then name.
fn ranked_rows(summary: &ChatSummary) -> Vec<(&str, usize)> {
    let mut rows: Vec<(&str, usize)> = summary
        .counts
        .iter()
        .map(|(name, &count)| (name.as_str(), count))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    rows
}

/// Renders the summary as an aligned text table.
pub fn render_text(summary: &ChatSummary) -> String {
    let mut out = String::new();

    out.push_str(&format!("Participants: {}\n", summary.participant_count()));
    out.push_str(&format!("Messages:     {}\n", summary.total_messages));
    if let Some(range) = &summary.date_range {
        out.push_str(&format!(
            "Date range:   {} to {} ({} days)\n",
            range.start.format("%Y-%m-%d"),
            range.end.format("%Y-%m-%d"),
            range.days()
        ));
    }

    let rows = ranked_rows(summary);
    if !rows.is_empty() {
        out.push('\n');
        let width = rows
            .iter()
            .map(|(name, _)| name.chars().count())
            .max()
            .unwrap_or(0);
        for (name, count) in rows {
            out.push_str(&format!(
                "  {name:<width$}  {count:>6}  {share:>5.1}%\n",
                share = summary.share_of(name)
            ));
        }
    }

    out
}

/// Renders the summary as pretty-printed JSON.
#[cfg(feature = "json-report")]
pub fn to_json(summary: &ChatSummary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

/// Renders the summary as semicolon-delimited CSV.
///
/// Columns: `participant;messages;share`. A `total` row closes the file.
#[cfg(feature = "csv-report")]
pub fn to_csv(summary: &ChatSummary) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(vec![]);

    writer.write_record(["participant", "messages", "share"])?;
    for (name, count) in ranked_rows(summary) {
        let count_field = count.to_string();
        let share_field = format!("{:.1}", summary.share_of(name));
        writer.write_record([name, count_field.as_str(), share_field.as_str()])?;
    }
    let total_field = summary.total_messages.to_string();
    let total_share = if summary.total_messages == 0 { "0.0" } else { "100.0" };
    writer.write_record(["total", total_field.as_str(), total_share])?;

    let bytes = writer
        .into_inner()
        .map_err(|e| ChatlensError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|source| ChatlensError::utf8("CSV report", source))
}

/// Renders the summary as a string in the selected format.
///
/// # Errors
///
/// Returns an error if the required feature for the format is not enabled
/// or rendering fails.
pub fn to_report_string(summary: &ChatSummary, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(summary)),
        #[cfg(feature = "json-report")]
        ReportFormat::Json => to_json(summary),
        #[cfg(feature = "csv-report")]
        ReportFormat::Csv => to_csv(summary),
        #[allow(unreachable_patterns)]
        _ => Err(ChatlensError::invalid_format(format!(
            "report format {format} requires the '{}' feature to be enabled",
            match format {
                ReportFormat::Json => "json-report",
                _ => "csv-report",
            }
        ))),
    }
}

/// Renders the summary and writes it to a file.
pub fn write_report(summary: &ChatSummary, path: &str, format: ReportFormat) -> Result<()> {
    let rendered = to_report_string(summary, format)?;
    std::fs::write(path, rendered)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Message;
    use chrono::TimeZone;
    use std::str::FromStr;

    fn sample_summary() -> ChatSummary {
        let base = chrono::Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        let messages = vec![
            Message::new("Alice", "1").with_timestamp(base),
            Message::new("Alice", "2").with_timestamp(base + chrono::Duration::days(3)),
            Message::new("Alice", "3"),
            Message::new("Bob", "4").with_timestamp(base + chrono::Duration::days(1)),
        ];
        ChatSummary::from_messages(&messages)
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!(ReportFormat::from_str("text").unwrap(), ReportFormat::Text);
        assert_eq!(ReportFormat::from_str("txt").unwrap(), ReportFormat::Text);
        assert_eq!(ReportFormat::from_str("JSON").unwrap(), ReportFormat::Json);
        assert_eq!(ReportFormat::from_str("csv").unwrap(), ReportFormat::Csv);
        assert!(ReportFormat::from_str("yaml").is_err());
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ReportFormat::from_path("out.txt").unwrap(), ReportFormat::Text);
        assert_eq!(ReportFormat::from_path("out.json").unwrap(), ReportFormat::Json);
        assert_eq!(ReportFormat::from_path("dir/out.CSV").unwrap(), ReportFormat::Csv);
        assert!(ReportFormat::from_path("out.pdf").is_err());
    }

    #[test]
    fn test_format_extension_and_default() {
        assert_eq!(ReportFormat::Text.extension(), "txt");
        assert_eq!(ReportFormat::Json.extension(), "json");
        assert_eq!(ReportFormat::Csv.extension(), "csv");
        assert_eq!(ReportFormat::default(), ReportFormat::Text);
        assert_eq!(ReportFormat::all().len(), 3);
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&sample_summary());
        assert!(text.contains("Participants: 2"));
        assert!(text.contains("Messages:     4"));
        assert!(text.contains("2024-01-15 to 2024-01-18 (3 days)"));
        assert!(text.contains("Alice"));
        assert!(text.contains("75.0%"));
        assert!(text.contains("25.0%"));
    }

    #[test]
    fn test_render_text_empty_summary() {
        let text = render_text(&ChatSummary::default());
        assert!(text.contains("Participants: 0"));
        assert!(text.contains("Messages:     0"));
        assert!(!text.contains("Date range"));
    }

    #[test]
    fn test_render_text_ranks_by_count() {
        let text = render_text(&sample_summary());
        let alice = text.find("Alice").unwrap();
        let bob = text.find("Bob").unwrap();
        assert!(alice < bob);
    }

    #[cfg(feature = "json-report")]
    #[test]
    fn test_to_json() {
        let json = to_json(&sample_summary()).unwrap();
        assert!(json.contains("\"total_messages\": 4"));
        assert!(json.contains("\"Alice\": 3"));
        assert!(json.contains("date_range"));
    }

    #[cfg(feature = "csv-report")]
    #[test]
    fn test_to_csv() {
        let csv = to_csv(&sample_summary()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("participant;messages;share"));
        assert_eq!(lines.next(), Some("Alice;3;75.0"));
        assert_eq!(lines.next(), Some("Bob;1;25.0"));
        assert_eq!(lines.next(), Some("total;4;100.0"));
    }

    #[cfg(feature = "csv-report")]
    #[test]
    fn test_to_csv_empty_summary() {
        let csv = to_csv(&ChatSummary::default()).unwrap();
        assert!(csv.contains("total;0;0.0"));
    }

    #[test]
    fn test_write_report_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        let path_str = path.to_str().unwrap();

        write_report(&sample_summary(), path_str, ReportFormat::Text).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Participants: 2"));
    }
}
