//! Input boundary: validation and loading of export files.
//!
//! The intake step runs before the parser ever sees a byte:
//!
//! 1. Extension gate — only `.txt` files are accepted, checked before any
//!    read so that a wrong file type never invokes the parser.
//! 2. Size ceiling — files above [`ScanConfig::max_file_size`] are
//!    rejected from metadata alone.
//! 3. Read — bytes are loaded and decoded as UTF-8.
//!
//! Each failure maps to its own [`ChatlensError`] variant and is terminal
//! for the attempt.

use std::fs;
use std::path::Path;

use crate::config::ScanConfig;
use crate::error::{ChatlensError, Result};

/// The accepted export file extension (without dot).
pub const EXPORT_EXTENSION: &str = "txt";

/// Returns `true` if the path carries the accepted export extension.
///
/// Matching is ASCII case-insensitive, so `CHAT.TXT` is accepted.
///
/// ```
/// use chatlens::intake::has_export_extension;
/// use std::path::Path;
///
/// assert!(has_export_extension(Path::new("chat_export.txt")));
/// assert!(has_export_extension(Path::new("CHAT.TXT")));
/// assert!(!has_export_extension(Path::new("chat.json")));
/// assert!(!has_export_extension(Path::new("chat")));
/// ```
pub fn has_export_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(EXPORT_EXTENSION))
}

/// Validates and loads an export file into a string.
///
/// # Errors
///
/// - [`ChatlensError::UnsupportedFile`] when the extension is not `.txt`
/// - [`ChatlensError::FileTooLarge`] when the file exceeds
///   [`ScanConfig::max_file_size`]
/// - [`ChatlensError::Io`] when the file cannot be read
/// - [`ChatlensError::Utf8`] when the content is not valid UTF-8
pub fn load_export(path: &Path, config: &ScanConfig) -> Result<String> {
    if !has_export_extension(path) {
        return Err(ChatlensError::unsupported_file(path));
    }

    let metadata = fs::metadata(path)?;
    if metadata.len() > config.max_file_size {
        return Err(ChatlensError::file_too_large(
            path,
            metadata.len(),
            config.max_file_size,
        ));
    }

    let bytes = fs::read(path)?;
    String::from_utf8(bytes)
        .map_err(|source| ChatlensError::utf8(path.display().to_string(), source))
}
