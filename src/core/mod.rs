//! Core consolidation logic for chatstash.
//!
//! This module contains:
//! - [`cleaner`] - UI-noise removal and whitespace normalization
//! - [`parser`] - Splitting cleaned content into interaction records
//! - [`collector`] - Backup file enumeration
//! - [`merger`] - Dedup, ordering, and the consolidation run
//! - [`output`] - Document rendering and writing
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use chatstash::core::{Consolidator, collect_backup_files};
//! use chatstash::config::ConsolidateConfig;
//!
//! # fn main() -> chatstash::Result<()> {
//! let files = collect_backup_files(Path::new("backups"), &ConsolidateConfig::new());
//! println!("{} backup file(s)", files.len());
//!
//! let report = Consolidator::new().consolidate(Path::new("backups"))?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

pub mod cleaner;
pub mod collector;
pub mod merger;
pub mod output;
pub mod parser;

// Re-export main types for convenience
pub use cleaner::clean;
pub use collector::collect_backup_files;
pub use merger::{ConsolidateReport, Consolidator, sort_newest_first};
pub use output::{render, write_document};
pub use parser::InteractionParser;

// Re-export the record types from the crate root
pub use crate::record::{BackupFile, Interaction};
