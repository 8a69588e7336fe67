//! Aggregated chat statistics.
//!
//! [`ChatSummary`] is the value the whole crate exists to produce: who
//! participated, how many messages each participant sent, and the date
//! range the export covers. It is built in a single pass over the parsed
//! messages and is immutable afterwards.
//!
//! # Invariants
//!
//! - The per-sender counts always sum to [`ChatSummary::total_messages`].
//! - When a [`DateRange`] is present, `start <= end`.
//!
//! # Example
//!
//! ```
//! use chatlens::summary::ChatSummary;
//! use chatlens::Message;
//!
//! let messages = vec![
//!     Message::new("Alice", "Hello"),
//!     Message::new("Bob", "Hi"),
//!     Message::new("Alice", "How are you?"),
//! ];
//!
//! let summary = ChatSummary::from_messages(&messages);
//! assert_eq!(summary.total_messages, 3);
//! assert_eq!(summary.count_for("Alice"), 2);
//! assert_eq!(summary.participant_count(), 2);
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Message;

/// Inclusive timestamp range covered by an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Timestamp of the earliest message.
    pub start: DateTime<Utc>,
    /// Timestamp of the latest message.
    pub end: DateTime<Utc>,
}

impl DateRange {
    /// Creates a single-point range.
    pub fn point(ts: DateTime<Utc>) -> Self {
        Self { start: ts, end: ts }
    }

    /// Widens the range to include `ts`.
    pub fn extend(&mut self, ts: DateTime<Utc>) {
        if ts < self.start {
            self.start = ts;
        }
        if ts > self.end {
            self.end = ts;
        }
    }

    /// Whole days between start and end.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

/// Aggregated summary of one parsed export.
///
/// Built once per file by [`from_messages`](Self::from_messages) and
/// discarded when the caller moves on; nothing here persists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatSummary {
    /// Total number of countable messages.
    pub total_messages: usize,

    /// Message count per participant. The key set is the participant set.
    pub counts: BTreeMap<String, usize>,

    /// Range of message timestamps, when any message carried one.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub date_range: Option<DateRange>,
}

impl ChatSummary {
    /// Aggregates messages in a single pass.
    ///
    /// Messages without timestamps count toward totals but do not extend
    /// the date range.
    pub fn from_messages(messages: &[Message]) -> Self {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        let mut date_range: Option<DateRange> = None;

        for msg in messages {
            *counts.entry(msg.sender.clone()).or_insert(0) += 1;
            if let Some(ts) = msg.timestamp {
                match date_range.as_mut() {
                    Some(range) => range.extend(ts),
                    None => date_range = Some(DateRange::point(ts)),
                }
            }
        }

        Self {
            total_messages: messages.len(),
            counts,
            date_range,
        }
    }

    /// Returns participant names in lexicographic order.
    pub fn participants(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// Number of distinct participants.
    pub fn participant_count(&self) -> usize {
        self.counts.len()
    }

    /// Message count for one participant (0 when absent).
    pub fn count_for(&self, sender: &str) -> usize {
        self.counts.get(sender).copied().unwrap_or(0)
    }

    /// Percentage of all messages sent by one participant.
    ///
    /// Returns 0.0 for an empty summary.
    pub fn share_of(&self, sender: &str) -> f64 {
        if self.total_messages == 0 {
            return 0.0;
        }
        self.count_for(sender) as f64 / self.total_messages as f64 * 100.0
    }

    /// The participant with the most messages.
    ///
    /// Ties resolve to the lexicographically first name. `None` for an
    /// empty summary.
    pub fn top_participant(&self) -> Option<(&str, usize)> {
        let mut top: Option<(&str, usize)> = None;
        for (name, &count) in &self.counts {
            if top.is_none_or(|(_, best)| count > best) {
                top = Some((name.as_str(), count));
            }
        }
        top
    }

    /// Returns `true` when the summary contains no messages.
    pub fn is_empty(&self) -> bool {
        self.total_messages == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_counts_sum_to_total() {
        let messages = vec![
            Message::new("A", "1"),
            Message::new("A", "2"),
            Message::new("A", "3"),
            Message::new("B", "4"),
            Message::new("B", "5"),
        ];
        let summary = ChatSummary::from_messages(&messages);
        assert_eq!(summary.total_messages, 5);
        assert_eq!(summary.count_for("A"), 3);
        assert_eq!(summary.count_for("B"), 2);
        assert_eq!(summary.counts.values().sum::<usize>(), summary.total_messages);
    }

    #[test]
    fn test_empty_summary() {
        let summary = ChatSummary::from_messages(&[]);
        assert!(summary.is_empty());
        assert_eq!(summary.total_messages, 0);
        assert_eq!(summary.participant_count(), 0);
        assert!(summary.date_range.is_none());
        assert!(summary.top_participant().is_none());
        assert_eq!(summary.share_of("anyone"), 0.0);
    }

    #[test]
    fn test_date_range_ordering() {
        let messages = vec![
            Message::new("A", "later").with_timestamp(ts(20, 18)),
            Message::new("B", "earliest").with_timestamp(ts(2, 9)),
            Message::new("A", "middle").with_timestamp(ts(10, 12)),
        ];
        let summary = ChatSummary::from_messages(&messages);
        let range = summary.date_range.unwrap();
        assert!(range.start <= range.end);
        assert_eq!(range.start, ts(2, 9));
        assert_eq!(range.end, ts(20, 18));
        assert_eq!(range.days(), 18);
    }

    #[test]
    fn test_timestampless_messages_count_but_dont_extend_range() {
        let messages = vec![
            Message::new("A", "no stamp"),
            Message::new("B", "stamped").with_timestamp(ts(5, 10)),
        ];
        let summary = ChatSummary::from_messages(&messages);
        assert_eq!(summary.total_messages, 2);
        let range = summary.date_range.unwrap();
        assert_eq!(range.start, range.end);
    }

    #[test]
    fn test_no_timestamps_means_no_range() {
        let messages = vec![Message::new("A", "x"), Message::new("B", "y")];
        let summary = ChatSummary::from_messages(&messages);
        assert!(summary.date_range.is_none());
    }

    #[test]
    fn test_participants_sorted() {
        let messages = vec![
            Message::new("Zoe", "1"),
            Message::new("Amy", "2"),
            Message::new("Mel", "3"),
        ];
        let summary = ChatSummary::from_messages(&messages);
        let names: Vec<&str> = summary.participants().collect();
        assert_eq!(names, vec!["Amy", "Mel", "Zoe"]);
    }

    #[test]
    fn test_top_participant_and_tie_break() {
        let messages = vec![
            Message::new("B", "1"),
            Message::new("B", "2"),
            Message::new("A", "3"),
            Message::new("A", "4"),
            Message::new("C", "5"),
        ];
        let summary = ChatSummary::from_messages(&messages);
        // A and B tie on 2; lexicographically first wins.
        assert_eq!(summary.top_participant(), Some(("A", 2)));
    }

    #[test]
    fn test_share_of() {
        let messages = vec![
            Message::new("A", "1"),
            Message::new("A", "2"),
            Message::new("A", "3"),
            Message::new("B", "4"),
        ];
        let summary = ChatSummary::from_messages(&messages);
        assert!((summary.share_of("A") - 75.0).abs() < f64::EPSILON);
        assert!((summary.share_of("B") - 25.0).abs() < f64::EPSILON);
        assert_eq!(summary.share_of("missing"), 0.0);
    }

    #[test]
    fn test_summary_serde_roundtrip() {
        let messages = vec![
            Message::new("A", "1").with_timestamp(ts(1, 8)),
            Message::new("B", "2").with_timestamp(ts(3, 9)),
        ];
        let summary = ChatSummary::from_messages(&messages);
        let json = serde_json::to_string(&summary).unwrap();
        let parsed: ChatSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, parsed);
    }

    #[test]
    fn test_empty_summary_serialization_skips_range() {
        let summary = ChatSummary::from_messages(&[]);
        let json = serde_json::to_string(&summary).unwrap();
        assert!(!json.contains("date_range"));
        assert!(json.contains("total_messages"));
    }

    #[test]
    fn test_date_range_extend() {
        let mut range = DateRange::point(ts(10, 12));
        range.extend(ts(5, 8));
        range.extend(ts(15, 20));
        range.extend(ts(12, 0)); // interior point, no change
        assert_eq!(range.start, ts(5, 8));
        assert_eq!(range.end, ts(15, 20));
    }
}
