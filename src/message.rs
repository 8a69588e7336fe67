//! Normalized chat message type.
//!
//! [`Message`] is what the export parser emits: one countable message with
//! a trimmed sender, the (possibly multiline) text content, and an optional
//! timestamp. Line-based text exports carry nothing else, so nothing else
//! is modeled.
//!
//! # Examples
//!
//! ```
//! use chatlens::Message;
//!
//! let msg = Message::new("Alice", "Hello, world!");
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.content(), "Hello, world!");
//! assert!(msg.timestamp().is_none());
//! ```
//!
//! Serialization omits a missing timestamp:
//!
//! ```
//! use chatlens::Message;
//!
//! let msg = Message::new("Alice", "Hello!");
//! let json = serde_json::to_string(&msg)?;
//! assert!(!json.contains("timestamp"));
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single parsed chat message.
///
/// Produced by [`ExportParser`](crate::parser::ExportParser); consumed by
/// [`ChatSummary::from_messages`](crate::summary::ChatSummary::from_messages)
/// and [`apply_filters`](crate::filter::apply_filters).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Display name of the message author, trimmed of surrounding
    /// whitespace so that name variants collapse to one participant.
    pub sender: String,

    /// Text content of the message.
    ///
    /// May contain newlines: continuation lines from the export are
    /// stitched back onto the message they belong to.
    pub content: String,

    /// When the message was sent.
    ///
    /// `None` when the matched line carried a timestamp the lenient
    /// parser could not interpret. The message still counts toward
    /// totals; it just doesn't extend the date range.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Message {
    /// Creates a new message with only sender and content.
    pub fn new(sender: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            content: content.into(),
            timestamp: None,
        }
    }

    /// Builder method to set the timestamp.
    ///
    /// ```
    /// use chatlens::Message;
    /// use chrono::Utc;
    ///
    /// let msg = Message::new("Alice", "Hello").with_timestamp(Utc::now());
    /// assert!(msg.timestamp().is_some());
    /// ```
    #[must_use]
    pub fn with_timestamp(mut self, ts: DateTime<Utc>) -> Self {
        self.timestamp = Some(ts);
        self
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the timestamp, if available.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    /// Returns `true` if this message's content is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}

impl Default for Message {
    fn default() -> Self {
        Self::new("", "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_message_new() {
        let msg = Message::new("Alice", "Hello");
        assert_eq!(msg.sender(), "Alice");
        assert_eq!(msg.content(), "Hello");
        assert!(msg.timestamp().is_none());
    }

    #[test]
    fn test_message_with_timestamp() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let msg = Message::new("Alice", "Hello").with_timestamp(ts);
        assert_eq!(msg.timestamp(), Some(ts));
    }

    #[test]
    fn test_message_is_empty() {
        assert!(Message::new("Alice", "").is_empty());
        assert!(Message::new("Alice", "   ").is_empty());
        assert!(!Message::new("Alice", "Hello").is_empty());
    }

    #[test]
    fn test_message_serialization_skips_none() {
        let msg = Message::new("Alice", "Hello");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("Alice"));
        assert!(!json.contains("timestamp"));
    }

    #[test]
    fn test_message_deserialization() {
        let json = r#"{"sender":"Bob","content":"Hi"}"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.sender(), "Bob");
        assert_eq!(msg.content(), "Hi");
        assert!(msg.timestamp().is_none());
    }

    #[test]
    fn test_message_serde_roundtrip_with_timestamp() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let msg = Message::new("Alice", "Hello").with_timestamp(ts);
        let json = serde_json::to_string(&msg).unwrap();
        let parsed: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(msg, parsed);
    }
}
