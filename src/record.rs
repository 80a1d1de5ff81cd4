//! Core record types for the consolidation pipeline.
//!
//! This module provides [`Interaction`], the normalized unit of transcript
//! text, and [`BackupFile`], the in-memory form of one backup source file.
//! The merge pipeline converts every `BackupFile` into zero or more
//! `Interaction`s, deduplicates them by [`fingerprint`](Interaction::fingerprint),
//! and renders the survivors into the consolidated document.
//!
//! # Overview
//!
//! An interaction consists of:
//! - **Required**: `body` — trimmed, UI-noise-free transcript text
//! - **Optional**: `timestamp` — when the backup containing it was created
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use chatstash::Interaction;
//!
//! let rec = Interaction::new("User: hello\nAssistant: hi!");
//! assert!(rec.timestamp().is_none());
//! assert_eq!(rec.body(), "User: hello\nAssistant: hi!");
//! ```
//!
//! ## Builder Pattern
//!
//! ```
//! use chatstash::Interaction;
//! use chrono::Utc;
//!
//! let rec = Interaction::new("User: hello").with_timestamp(Utc::now());
//! assert!(rec.timestamp().is_some());
//! ```
//!
//! ## Fingerprints
//!
//! Two interactions with the same trimmed body share a fingerprint even when
//! their timestamps differ — that is what makes cross-file deduplication
//! timestamp-independent:
//!
//! ```
//! use chatstash::Interaction;
//! use chrono::Utc;
//!
//! let a = Interaction::new("Same text");
//! let b = Interaction::new("  Same text  ").with_timestamp(Utc::now());
//! assert_eq!(a.fingerprint(), b.fingerprint());
//! ```

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use crate::error::{Result, StashError};
use crate::timestamp;

/// One timestamped block of transcript text extracted from a backup file.
///
/// A single backup file may yield one interaction (whole-file fallback) or
/// many (one per embedded `*Backup created on: ...*` header). The body is
/// already cleaned: UI-noise lines removed, blank runs collapsed, whitespace
/// trimmed.
///
/// # Serialization
///
/// Implements `Serialize` and `Deserialize`; the timestamp is omitted from
/// JSON when `None` and uses RFC 3339 when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    /// When the backup containing this interaction was created.
    ///
    /// `None` when neither the filename nor the content carried a parseable
    /// timestamp. Such records sort after all timestamped ones.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,

    /// Cleaned transcript text.
    pub body: String,
}

impl Interaction {
    /// Creates an interaction with no timestamp.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            timestamp: None,
            body: body.into(),
        }
    }

    /// Builder method to set the timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, ts: DateTime<Utc>) -> Self {
        self.timestamp = Some(ts);
        self
    }

    /// Returns the timestamp, if available.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    /// Returns the body text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns `true` if the body is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }

    /// Content fingerprint of the trimmed body, ignoring the timestamp.
    ///
    /// Used by the merger to detect duplicate interactions across files:
    /// the same text captured in two backups hashes identically no matter
    /// when each backup was taken.
    pub fn fingerprint(&self) -> u64 {
        xxh3_64(self.body.trim().as_bytes())
    }
}

/// One backup source file loaded into memory for a consolidation run.
///
/// Created when the file is read, immutable afterwards, and dropped at the
/// end of the run. The timestamp is resolved at construction from the
/// filename first, then from the embedded header (see [`crate::timestamp`]).
#[derive(Debug, Clone)]
pub struct BackupFile {
    /// Where the file was read from.
    pub path: PathBuf,
    /// Raw file content, before cleaning.
    pub raw: String,
    /// File-level timestamp, if the filename or content yielded one.
    pub timestamp: Option<DateTime<Utc>>,
}

impl BackupFile {
    /// Reads a backup file from disk and resolves its file-level timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`StashError::ReadFile`] when the file cannot be read or is
    /// not valid UTF-8. Callers in the merge pipeline recover by skipping
    /// the file.
    pub fn read(path: &Path) -> Result<Self> {
        let raw =
            std::fs::read_to_string(path).map_err(|e| StashError::read_file(path, e))?;
        Ok(Self::from_parts(path, raw))
    }

    /// Builds a record from an already-loaded content string.
    ///
    /// Useful for tests and for callers that obtained the text elsewhere.
    pub fn from_parts(path: &Path, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let timestamp = timestamp::extract(&name, &raw);
        Self {
            path: path.to_path_buf(),
            raw,
            timestamp,
        }
    }

    /// Returns the filename component of the source path.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
