//! Configuration for parsing and intake.
//!
//! [`ScanConfig`] is a plain builder-style struct without any CLI framework
//! dependencies; the CLI layer maps its flags onto it.
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::ScanConfig;
//!
//! let config = ScanConfig::new()
//!     .with_skip_system_notices(false)
//!     .with_max_file_size(10 * 1024 * 1024);
//! ```

use serde::{Deserialize, Serialize};

/// Default size ceiling for export files: 5 MiB.
///
/// Real chat exports are small; anything bigger is usually the wrong file.
/// Raise the ceiling via [`ScanConfig::with_max_file_size`] when needed.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// Default number of leading lines sampled for layout detection.
pub const DEFAULT_DETECTION_WINDOW: usize = 20;

/// Configuration for export scanning.
///
/// Controls the intake boundary (size ceiling) and the parse pass
/// (system notice handling, detection sample size).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Skip system notices (group created, user added/left, encryption
    /// banners) instead of counting them as messages (default: true)
    pub skip_system_notices: bool,

    /// Maximum accepted input file size in bytes (default: 5 MiB)
    pub max_file_size: u64,

    /// Number of leading lines sampled when auto-detecting the export
    /// line layout (default: 20)
    pub detection_window: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            skip_system_notices: true,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            detection_window: DEFAULT_DETECTION_WINDOW,
        }
    }
}

impl ScanConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether system notices are skipped.
    #[must_use]
    pub fn with_skip_system_notices(mut self, skip: bool) -> Self {
        self.skip_system_notices = skip;
        self
    }

    /// Sets the maximum accepted file size in bytes.
    #[must_use]
    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    /// Sets the layout detection sample size in lines.
    #[must_use]
    pub fn with_detection_window(mut self, lines: usize) -> Self {
        self.detection_window = lines;
        self
    }
}
