//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum that covers all error
//! cases in the library. This design follows the pattern used by popular
//! crates like `reqwest`, `serde_json`, and `csv`.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Developers** get source error chains for debugging
//!
//! Every failure is terminal for the current attempt: there is no retry
//! machinery anywhere in the crate. Callers reattempt with a new file.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
///
/// Each variant contains context about what went wrong and, where
/// applicable, the underlying source error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing a report)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The selected file is not a supported export file.
    ///
    /// Raised before any byte of the file is read; only `.txt` exports are
    /// accepted.
    #[error("Unsupported file type: {} (expected a .{expected} chat export)", path.display())]
    UnsupportedFile {
        /// The rejected path
        path: PathBuf,
        /// The accepted extension (without dot)
        expected: &'static str,
    },

    /// The selected file exceeds the configured size ceiling.
    #[error("File too large: {} is {size} bytes (limit: {limit} bytes)", path.display())]
    FileTooLarge {
        /// The rejected path
        path: PathBuf,
        /// Actual file size in bytes
        size: u64,
        /// Configured ceiling in bytes
        limit: u64,
    },

    /// The file content doesn't match any known export line layout.
    ///
    /// This occurs when the sampled lines match none of the supported
    /// timestamp/sender layouts, i.e. the file is probably not a chat
    /// export at all.
    #[error("Invalid export format: {message}")]
    InvalidFormat {
        /// Description of what's wrong
        message: String,
    },

    /// Parsing succeeded but produced no countable messages.
    ///
    /// Surfaced by application code when an export contains nothing but
    /// system notices or is empty.
    #[error("No messages found{}", path.as_ref().map(|p| format!(" in {}", p.display())).unwrap_or_default())]
    NoMessages {
        /// The input path, if available
        path: Option<PathBuf>,
    },

    /// Invalid date in a filter configuration.
    ///
    /// Date filters expect `YYYY-MM-DD`.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// UTF-8 encoding error.
    ///
    /// Occurs when file content is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// CSV report error.
    #[cfg(feature = "csv-report")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON report error.
    #[cfg(feature = "json-report")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates an unsupported-file error for a rejected path.
    pub fn unsupported_file(path: impl Into<PathBuf>) -> Self {
        ChatlensError::UnsupportedFile {
            path: path.into(),
            expected: crate::intake::EXPORT_EXTENSION,
        }
    }

    /// Creates a file-too-large error.
    pub fn file_too_large(path: impl Into<PathBuf>, size: u64, limit: u64) -> Self {
        ChatlensError::FileTooLarge {
            path: path.into(),
            size,
            limit,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        ChatlensError::InvalidFormat {
            message: message.into(),
        }
    }

    /// Creates a no-messages error.
    pub fn no_messages(path: Option<PathBuf>) -> Self {
        ChatlensError::NoMessages { path }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatlensError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates a UTF-8 error tied to a path or context description.
    pub fn utf8(context: impl Into<String>, source: std::string::FromUtf8Error) -> Self {
        ChatlensError::Utf8 {
            context: context.into(),
            source,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if this is an unsupported-file error.
    pub fn is_unsupported_file(&self) -> bool {
        matches!(self, ChatlensError::UnsupportedFile { .. })
    }

    /// Returns `true` if this is a file-too-large error.
    pub fn is_file_too_large(&self) -> bool {
        matches!(self, ChatlensError::FileTooLarge { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatlensError::InvalidFormat { .. })
    }

    /// Returns `true` if this is a no-messages error.
    pub fn is_no_messages(&self) -> bool {
        matches!(self, ChatlensError::NoMessages { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatlensError::InvalidDate { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_file_message() {
        let err = ChatlensError::unsupported_file("photo.png");
        assert!(err.to_string().contains("photo.png"));
        assert!(err.to_string().contains(".txt"));
        assert!(err.is_unsupported_file());
    }

    #[test]
    fn test_file_too_large_message() {
        let err = ChatlensError::file_too_large("big.txt", 10_000_000, 5_242_880);
        let text = err.to_string();
        assert!(text.contains("10000000"));
        assert!(text.contains("5242880"));
        assert!(err.is_file_too_large());
    }

    #[test]
    fn test_invalid_format() {
        let err = ChatlensError::invalid_format("no known line layout");
        assert!(err.to_string().contains("no known line layout"));
        assert!(err.is_invalid_format());
        assert!(!err.is_io());
    }

    #[test]
    fn test_no_messages_with_and_without_path() {
        let bare = ChatlensError::no_messages(None);
        assert_eq!(bare.to_string(), "No messages found");

        let with_path = ChatlensError::no_messages(Some("chat.txt".into()));
        assert!(with_path.to_string().contains("chat.txt"));
        assert!(with_path.is_no_messages());
    }

    #[test]
    fn test_invalid_date() {
        let err = ChatlensError::invalid_date("15-01-2024");
        assert!(err.to_string().contains("15-01-2024"));
        assert!(err.to_string().contains("YYYY-MM-DD"));
        assert!(err.is_invalid_date());
    }

    #[test]
    fn test_io_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: ChatlensError = io_err.into();
        assert!(err.is_io());
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_utf8_error() {
        let bad = String::from_utf8(vec![0xFF, 0xFE]).unwrap_err();
        let err = ChatlensError::utf8("chat.txt", bad);
        assert!(err.to_string().contains("chat.txt"));
    }
}
