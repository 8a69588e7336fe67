//! Filter messages by date range and sender.
//!
//! [`FilterConfig`] narrows the message list before aggregation, the way
//! the analyzer UI narrows a chat to one participant or one period.
//! Filters combine with AND logic.
//!
//! # Examples
//!
//! ```
//! use chatlens::filter::{FilterConfig, apply_filters};
//! use chatlens::Message;
//!
//! let messages = vec![
//!     Message::new("Alice", "Hello"),
//!     Message::new("Bob", "Hi there"),
//!     Message::new("Alice", "How are you?"),
//! ];
//!
//! // Case-insensitive sender matching
//! let config = FilterConfig::new().with_sender("alice");
//! let filtered = apply_filters(messages, &config);
//! assert_eq!(filtered.len(), 2);
//! ```
//!
//! # Behavior Notes
//!
//! - Messages without timestamps are **excluded** when date filters are
//!   active
//! - Sender matching is case-insensitive for ASCII characters

use chrono::{DateTime, NaiveDate, Utc};

use crate::Message;
use crate::error::{ChatlensError, Result};

/// Configuration for filtering messages by date and sender.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Include only messages on or after this timestamp.
    pub after: Option<DateTime<Utc>>,

    /// Include only messages on or before this timestamp.
    pub before: Option<DateTime<Utc>>,

    /// Include only messages from this sender (case-insensitive).
    pub from: Option<String>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all messages pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive). Format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self> {
        let naive = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
            .map_err(|_| ChatlensError::invalid_date(date_str))?;
        self.after = Some(naive.and_hms_opt(0, 0, 0).unwrap().and_utc());
        Ok(self)
    }

    /// Sets the end date filter (inclusive). Format: `YYYY-MM-DD`.
    ///
    /// The whole end day is included.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self> {
        let naive = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
            .map_err(|_| ChatlensError::invalid_date(date_str))?;
        self.before = Some(naive.and_hms_opt(23, 59, 59).unwrap().and_utc());
        Ok(self)
    }

    /// Sets the sender filter. Matching is ASCII case-insensitive.
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.from = Some(sender.into());
        self
    }

    /// Sets the start timestamp directly.
    #[must_use]
    pub fn with_after(mut self, dt: DateTime<Utc>) -> Self {
        self.after = Some(dt);
        self
    }

    /// Sets the end timestamp directly.
    #[must_use]
    pub fn with_before(mut self, dt: DateTime<Utc>) -> Self {
        self.before = Some(dt);
        self
    }

    /// Returns `true` when any filter is set.
    pub fn is_active(&self) -> bool {
        self.after.is_some() || self.before.is_some() || self.from.is_some()
    }
}

/// Applies the configured filters, keeping matching messages.
///
/// An inactive config passes everything through untouched.
pub fn apply_filters(messages: Vec<Message>, config: &FilterConfig) -> Vec<Message> {
    if !config.is_active() {
        return messages;
    }

    messages
        .into_iter()
        .filter(|msg| {
            if let Some(from) = &config.from {
                if !msg.sender.eq_ignore_ascii_case(from) {
                    return false;
                }
            }

            if config.after.is_some() || config.before.is_some() {
                let Some(ts) = msg.timestamp else {
                    return false;
                };
                if let Some(after) = config.after {
                    if ts < after {
                        return false;
                    }
                }
                if let Some(before) = config.before {
                    if ts > before {
                        return false;
                    }
                }
            }

            true
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, month, day, 12, 0, 0).unwrap()
    }

    fn sample() -> Vec<Message> {
        vec![
            Message::new("Alice", "january").with_timestamp(ts(1, 10)),
            Message::new("Bob", "march").with_timestamp(ts(3, 5)),
            Message::new("Alice", "june").with_timestamp(ts(6, 20)),
            Message::new("Carol", "undated"),
        ]
    }

    #[test]
    fn test_inactive_config_passthrough() {
        let config = FilterConfig::new();
        assert!(!config.is_active());
        let messages = sample();
        let len = messages.len();
        assert_eq!(apply_filters(messages, &config).len(), len);
    }

    #[test]
    fn test_sender_filter_case_insensitive() {
        let config = FilterConfig::new().with_sender("ALICE");
        let filtered = apply_filters(sample(), &config);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|m| m.sender == "Alice"));
    }

    #[test]
    fn test_date_from_filter() {
        let config = FilterConfig::new().with_date_from("2024-03-01").unwrap();
        let filtered = apply_filters(sample(), &config);
        // march + june pass; january fails; undated excluded.
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_date_to_includes_whole_day() {
        let config = FilterConfig::new().with_date_to("2024-03-05").unwrap();
        let filtered = apply_filters(sample(), &config);
        // january + march (12:00 on the end day) pass.
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_combined_filters_and_logic() {
        let config = FilterConfig::new()
            .with_sender("Alice")
            .with_date_from("2024-02-01")
            .unwrap();
        let filtered = apply_filters(sample(), &config);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].content, "june");
    }

    #[test]
    fn test_undated_excluded_under_date_filters() {
        let config = FilterConfig::new().with_date_from("2024-01-01").unwrap();
        let filtered = apply_filters(sample(), &config);
        assert!(filtered.iter().all(|m| m.timestamp.is_some()));
    }

    #[test]
    fn test_invalid_date_rejected() {
        let err = FilterConfig::new().with_date_from("01-15-2024").unwrap_err();
        assert!(err.is_invalid_date());

        let err = FilterConfig::new().with_date_to("not a date").unwrap_err();
        assert!(err.is_invalid_date());
    }

    #[test]
    fn test_empty_input() {
        let config = FilterConfig::new().with_sender("Anyone");
        assert!(apply_filters(vec![], &config).is_empty());
    }
}
