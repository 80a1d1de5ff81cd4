//! Backup file writer.
//!
//! Takes captured conversation text plus its capture time and persists it as
//! a timestamped markdown file:
//!
//! ```text
//! backups/backup_20240101_100000.md
//! ─────────────────────────────────
//! *Backup created on: 2024-01-01 10:00:00*
//!
//! <captured text>
//! ```
//!
//! The header duplicates the filename timestamp on purpose: the filename
//! survives renames of the content, the header survives renames of the file,
//! and the consolidation side accepts either.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::config::DEFAULT_BACKUP_EXTENSION;
use crate::error::{Result, StashError};
use crate::timestamp;

/// Writes `content` to a new timestamped backup file under `dir`.
///
/// Creates the directory if needed. Returns the path of the written file.
///
/// # Example
///
/// ```
/// use chatstash::backup::write_backup;
/// use chrono::{TimeZone, Utc};
///
/// # fn main() -> chatstash::Result<()> {
/// let dir = tempfile::tempdir().unwrap();
/// let ts = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
/// let path = write_backup(dir.path(), "User: hello", ts)?;
/// assert!(path.ends_with("backup_20240101_100000.md"));
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns [`StashError::Io`] when the directory cannot be created and
/// [`StashError::WriteOutput`] when the file write fails.
pub fn write_backup(dir: &Path, content: &str, captured_at: DateTime<Utc>) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let filename = format!(
        "backup_{}.{}",
        timestamp::format_filename_stamp(captured_at),
        DEFAULT_BACKUP_EXTENSION
    );
    let path = dir.join(filename);

    let document = format!("{}\n\n{}", timestamp::format_header(captured_at), content);
    fs::write(&path, document).map_err(|e| StashError::write_output(&path, e))?;

    Ok(path)
}
