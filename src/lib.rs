//! # Chatstash
//!
//! A Rust library and CLI for backing up AI-assistant conversation
//! transcripts and consolidating the backups into one deduplicated,
//! chronologically ordered markdown document.
//!
//! ## Overview
//!
//! Conversations copied out of an assistant UI end up as timestamped backup
//! files (`backup_20240101_100000.md`), each starting with a
//! `*Backup created on: ...*` header. Over time a backup directory
//! accumulates overlapping captures of the same conversation, plus whatever
//! interface chrome came along for the ride. Chatstash merges the whole
//! directory back into a single transcript:
//!
//! - **Timestamp extraction** — from the filename or the embedded header,
//!   whichever parses first; malformed values are treated as absent
//! - **Cleanup** — UI-noise lines removed via a configurable denylist,
//!   blank-line runs collapsed
//! - **Splitting** — files holding several captures are split at each
//!   header into separate interaction records
//! - **Dedup** — identical bodies across files are kept once, first
//!   occurrence wins, timestamps ignored for the comparison
//! - **Ordering** — newest first; records without a timestamp at the end
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use chatstash::core::Consolidator;
//!
//! fn main() -> chatstash::Result<()> {
//!     let report = Consolidator::new().consolidate(Path::new("backups"))?;
//!
//!     if report.nothing_to_do() {
//!         println!("no backup files found");
//!     } else {
//!         println!("{report}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Capturing backups
//!
//! With the `clipboard` feature enabled, the capture side reads the
//! clipboard with bounded retries and writes a timestamped backup file:
//!
//! ```rust,no_run
//! # #[cfg(feature = "clipboard")]
//! # fn main() -> chatstash::Result<()> {
//! use std::path::Path;
//! use chatstash::backup::write_backup;
//! use chatstash::capture::{CaptureConfig, read_clipboard};
//!
//! let text = read_clipboard(&CaptureConfig::new())?;
//! let path = write_backup(Path::new("backups"), &text, chrono::Utc::now())?;
//! println!("saved {}", path.display());
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "clipboard"))]
//! # fn main() {}
//! ```
//!
//! ## Module Structure
//!
//! - [`core`] — The consolidation engine
//!   - [`core::cleaner`] — UI-noise removal ([`clean`](core::clean))
//!   - [`core::parser`] — [`InteractionParser`](core::InteractionParser)
//!   - [`core::collector`] — [`collect_backup_files`](core::collect_backup_files)
//!   - [`core::merger`] — [`Consolidator`](core::Consolidator), [`ConsolidateReport`](core::ConsolidateReport)
//!   - [`core::output`] — [`render`](core::render), [`write_document`](core::write_document)
//! - [`record`] — [`Interaction`], [`BackupFile`]
//! - [`timestamp`] — Filename/header timestamp extraction and formatting
//! - [`config`] — [`CleanConfig`](config::CleanConfig), [`ConsolidateConfig`](config::ConsolidateConfig)
//! - [`backup`] — Timestamped backup file writer
//! - [`capture`] — Clipboard polling (requires `clipboard` feature)
//! - [`cli`] — CLI types (requires `cli` feature)
//! - [`error`] — Unified error types ([`StashError`], [`Result`])
//! - [`prelude`] — Convenient re-exports

pub mod backup;
#[cfg(feature = "clipboard")]
pub mod capture;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod record;
pub mod timestamp;

// Re-export the main types at the crate root for convenience
pub use error::{Result, StashError};
pub use record::{BackupFile, Interaction};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatstash::prelude::*;
/// ```
pub mod prelude {
    // Record types
    pub use crate::record::{BackupFile, Interaction};

    // Error types
    pub use crate::error::{Result, StashError};

    // Configuration
    pub use crate::config::{CleanConfig, ConsolidateConfig};

    // Pipeline
    pub use crate::core::cleaner::clean;
    pub use crate::core::collector::collect_backup_files;
    pub use crate::core::merger::{ConsolidateReport, Consolidator};
    pub use crate::core::parser::InteractionParser;

    // Backup writing
    pub use crate::backup::write_backup;

    // Capture
    #[cfg(feature = "clipboard")]
    pub use crate::capture::{CaptureConfig, read_clipboard};
}
