//! Rendering and writing of the consolidated document.
//!
//! Each kept interaction becomes a block of
//! `*Backup created on: <timestamp or "unknown">*` followed by its body;
//! blocks are joined with a horizontal rule so entry boundaries stay visible
//! in rendered markdown. The output file is fully rewritten on every run —
//! there is no append path and no partial-update path.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::error::{Result, StashError};
use crate::record::Interaction;
use crate::timestamp;

/// Separator between entries in the consolidated document.
pub const ENTRY_SEPARATOR: &str = "\n\n---\n\n";

/// Header line rendered for records whose timestamp could not be resolved.
pub const UNKNOWN_HEADER: &str = "*Backup created on: unknown*";

/// Renders kept interactions into the final document text.
///
/// # Example
///
/// ```
/// use chatstash::Interaction;
/// use chatstash::core::output::render;
/// use chrono::{TimeZone, Utc};
///
/// let ts = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
/// let records = vec![
///     Interaction::new("first").with_timestamp(ts),
///     Interaction::new("second"),
/// ];
/// let doc = render(&records);
/// assert!(doc.starts_with("*Backup created on: 2024-01-01 10:00:00*\nfirst"));
/// assert!(doc.contains("---"));
/// assert!(doc.contains("*Backup created on: unknown*\nsecond"));
/// ```
pub fn render(records: &[Interaction]) -> String {
    records
        .iter()
        .map(|record| format!("{}\n{}", header_line(record.timestamp), record.body))
        .collect::<Vec<_>>()
        .join(ENTRY_SEPARATOR)
}

fn header_line(ts: Option<DateTime<Utc>>) -> String {
    match ts {
        Some(ts) => timestamp::format_header(ts),
        None => UNKNOWN_HEADER.to_string(),
    }
}

/// Writes the rendered document to `path`, overwriting any previous run.
///
/// The write is attempted exactly once; on failure the underlying I/O error
/// is propagated with the destination path attached. Already-computed
/// results are never silently discarded — the caller decides whether to
/// retry a whole run.
pub fn write_document(document: &str, path: &Path) -> Result<()> {
    fs::write(path, document).map_err(|e| StashError::write_output(path, e))
}
