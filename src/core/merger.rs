//! Deduplicating merger: the consolidation pipeline.
//!
//! One [`Consolidator::consolidate`] call is one run: collect backup files,
//! clean and parse each into interaction records, drop duplicate bodies,
//! sort newest-first, render, and write the consolidated document.
//!
//! Dedup policy: records are fingerprinted on the trimmed body only —
//! timestamps are ignored, so the same text captured twice at different
//! times still counts as one interaction. The first occurrence in
//! file-collection order wins; the check runs *before* sorting, which makes
//! the outcome deterministic for a fixed directory listing.
//!
//! Sort policy: timestamped records newest-first; records without a
//! timestamp after all timestamped ones, keeping their relative input order.
//!
//! Failure policy: an unreadable source file is skipped and recorded in the
//! run's [`ConsolidateReport`]; it never aborts the run. Only the final
//! output write can fail the run.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::{CleanConfig, ConsolidateConfig};
use crate::core::cleaner::clean;
use crate::core::collector::collect_backup_files;
use crate::core::output::{render, write_document};
use crate::core::parser::InteractionParser;
use crate::error::{Result, StashError};
use crate::record::{BackupFile, Interaction};

/// Outcome of one consolidation run.
///
/// Mirrors the shape of the run for the CLI to print: how many files were
/// found and read, how many interactions were parsed, how many were dropped
/// as duplicates, and which files had to be skipped.
#[derive(Debug, Default)]
pub struct ConsolidateReport {
    /// Backup files the collector found.
    pub files_found: usize,
    /// Files successfully read.
    pub files_read: usize,
    /// Interaction records parsed across all files, before dedup.
    pub interactions: usize,
    /// Records dropped because their body was already seen.
    pub duplicates: usize,
    /// Records written to the output document.
    pub written: usize,
    /// Files skipped with the error that caused each skip.
    pub skipped: Vec<(PathBuf, StashError)>,
    /// Where the document was written, when a write happened.
    pub output: Option<PathBuf>,
}

impl ConsolidateReport {
    /// Returns `true` if the run produced an output file.
    pub fn wrote_output(&self) -> bool {
        self.output.is_some()
    }

    /// Returns `true` if the collector found nothing to consolidate.
    pub fn nothing_to_do(&self) -> bool {
        self.files_found == 0
    }
}

impl fmt::Display for ConsolidateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} file(s) read, {} interaction(s), {} duplicate(s) dropped, {} written",
            self.files_read, self.interactions, self.duplicates, self.written
        )
    }
}

/// The consolidation engine.
///
/// Owns the cleaning denylist, the run configuration, and the compiled
/// header pattern. Construct once, run against a directory.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use chatstash::core::merger::Consolidator;
///
/// # fn main() -> chatstash::Result<()> {
/// let report = Consolidator::new().consolidate(Path::new("backups"))?;
/// println!("{report}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Consolidator {
    clean_config: CleanConfig,
    config: ConsolidateConfig,
    parser: InteractionParser,
}

impl Consolidator {
    /// Creates a consolidator with default configuration.
    pub fn new() -> Self {
        Self {
            clean_config: CleanConfig::default(),
            config: ConsolidateConfig::default(),
            parser: InteractionParser::new(),
        }
    }

    /// Sets the cleaning denylist.
    #[must_use]
    pub fn with_clean_config(mut self, clean_config: CleanConfig) -> Self {
        self.clean_config = clean_config;
        self
    }

    /// Sets the run configuration.
    #[must_use]
    pub fn with_config(mut self, config: ConsolidateConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the active run configuration.
    pub fn config(&self) -> &ConsolidateConfig {
        &self.config
    }

    /// Runs one consolidation over `backup_dir`.
    ///
    /// When the collector finds no backup files, the run completes without
    /// writing anything — the absent output file is the "no work" signal.
    /// When files were processed, the document is written even if every
    /// record was dropped (the run did happen; the result is just empty).
    ///
    /// # Errors
    ///
    /// Only the output write can fail the run; per-file read errors are
    /// recorded in the returned report instead.
    pub fn consolidate(&self, backup_dir: &Path) -> Result<ConsolidateReport> {
        let files = collect_backup_files(backup_dir, &self.config);

        let mut report = ConsolidateReport {
            files_found: files.len(),
            ..ConsolidateReport::default()
        };

        if files.is_empty() {
            return Ok(report);
        }

        let mut seen: HashSet<u64> = HashSet::new();
        let mut kept: Vec<Interaction> = Vec::new();

        for path in &files {
            let backup = match BackupFile::read(path) {
                Ok(backup) => backup,
                Err(err) => {
                    report.skipped.push((path.clone(), err));
                    continue;
                }
            };
            report.files_read += 1;

            let cleaned = clean(&backup.raw, &self.clean_config);
            let records = self.parser.parse(&cleaned, backup.timestamp);
            report.interactions += records.len();

            for record in records {
                if seen.insert(record.fingerprint()) {
                    kept.push(record);
                } else {
                    report.duplicates += 1;
                }
            }
        }

        sort_newest_first(&mut kept);

        let output_path = backup_dir.join(&self.config.output_filename);
        write_document(&render(&kept), &output_path)?;

        report.written = kept.len();
        report.output = Some(output_path);
        Ok(report)
    }
}

impl Default for Consolidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Sorts records newest-first, null timestamps last.
///
/// The sort is stable: records without a timestamp keep their relative input
/// order, as do timestamped records that compare equal. That placement is a
/// policy, not an accident — untimed records are still real content, they
/// just cannot claim a position in the timeline.
pub fn sort_newest_first(records: &mut [Interaction]) {
    records.sort_by(|a, b| match (a.timestamp, b.timestamp) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}
