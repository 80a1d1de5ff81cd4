//! File collector: enumerates backup files for a consolidation run.
//!
//! Returns every file in the backup directory carrying the configured
//! extension, minus the consolidated output file itself — re-running
//! consolidation must never feed its own prior output back into the merge.
//!
//! Results are sorted lexicographically by filename. Native directory order
//! is platform-dependent; fixing the order here is what makes the merger's
//! "first occurrence wins" dedup rule reproducible across platforms.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ConsolidateConfig;

/// Lists backup files in `dir`, excluding the consolidated output.
///
/// A missing or unreadable directory yields an empty list, not an error —
/// "no backups" is an ordinary answer, and the caller reports it as
/// "nothing to do".
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use chatstash::config::ConsolidateConfig;
/// use chatstash::core::collector::collect_backup_files;
///
/// let files = collect_backup_files(Path::new("backups"), &ConsolidateConfig::new());
/// for file in files {
///     println!("{}", file.display());
/// }
/// ```
pub fn collect_backup_files(dir: &Path, config: &ConsolidateConfig) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext == config.backup_extension.as_str())
        })
        .filter(|path| {
            path.file_name()
                .is_none_or(|name| !config.is_output(&name.to_string_lossy()))
        })
        .collect();

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    files
}
