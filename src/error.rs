//! Unified error types for chatstash.
//!
//! This module provides a single [`StashError`] enum that covers all error
//! cases in the library. This design follows the pattern used by popular
//! crates like `reqwest`, `serde_json`, and `csv`.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Recoverable conditions never surface as errors**: a malformed
//!   timestamp is an absent timestamp, an unreadable backup file is skipped
//!   and reported in the run report. Only conditions that end the run
//!   (output write failure, clipboard failure) are `StashError`s.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A specialized [`Result`] type for chatstash operations.
///
/// # Example
///
/// ```rust
/// use chatstash::error::Result;
/// use chatstash::Interaction;
///
/// fn my_function() -> Result<Vec<Interaction>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, StashError>;

/// The error type for all chatstash operations.
///
/// Each variant contains context about what went wrong and, where applicable,
/// the underlying source error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StashError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The backup directory cannot be created
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A backup source file could not be read.
    ///
    /// During consolidation this is recovered locally: the file is skipped
    /// and the error is recorded in the
    /// [`ConsolidateReport`](crate::core::merger::ConsolidateReport).
    #[error("Failed to read backup file {}: {source}", path.display())]
    ReadFile {
        /// The file that could not be read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The output document could not be written.
    ///
    /// This is the one terminal failure of a consolidation run: the write is
    /// attempted exactly once and the underlying cause is propagated.
    #[error("Failed to write {}: {source}", path.display())]
    WriteOutput {
        /// The destination that could not be written
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A user-supplied timestamp string did not parse.
    ///
    /// Only raised for inputs that *must* be valid (e.g. a CLI timestamp
    /// override). Timestamps extracted from filenames or file content are
    /// treated as absent when malformed, never as errors.
    #[error("Invalid timestamp '{input}'. Expected format: {expected}")]
    InvalidTimestamp {
        /// The invalid timestamp string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// The system clipboard could not be accessed.
    #[cfg(feature = "clipboard")]
    #[error("Clipboard error: {message}")]
    Clipboard {
        /// Description of the underlying clipboard failure
        message: String,
    },

    /// The clipboard held no text after the configured number of attempts.
    #[cfg(feature = "clipboard")]
    #[error("No clipboard content found after {attempts} attempt(s)")]
    EmptyClipboard {
        /// How many read attempts were made
        attempts: usize,
    },
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl StashError {
    /// Creates a per-file read error.
    pub fn read_file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StashError::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Creates an output write error.
    pub fn write_output(path: &Path, source: io::Error) -> Self {
        StashError::WriteOutput {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Creates an invalid timestamp error.
    pub fn invalid_timestamp(input: impl Into<String>) -> Self {
        StashError::InvalidTimestamp {
            input: input.into(),
            expected: "YYYY-MM-DD HH:MM:SS",
        }
    }

    /// Creates a clipboard access error.
    #[cfg(feature = "clipboard")]
    pub fn clipboard(message: impl Into<String>) -> Self {
        StashError::Clipboard {
            message: message.into(),
        }
    }

    /// Returns `true` if this is a generic IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, StashError::Io(_))
    }

    /// Returns `true` if this is a per-file read error.
    pub fn is_read(&self) -> bool {
        matches!(self, StashError::ReadFile { .. })
    }

    /// Returns `true` if this is an output write error.
    pub fn is_write(&self) -> bool {
        matches!(self, StashError::WriteOutput { .. })
    }

    /// Returns `true` if this is a timestamp parse error.
    pub fn is_invalid_timestamp(&self) -> bool {
        matches!(self, StashError::InvalidTimestamp { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
