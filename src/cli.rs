//! Command-line interface definition using clap.
//!
//! Two subcommands cover the two halves of the tool:
//!
//! - `backup` — capture the clipboard into a timestamped backup file
//!   (requires the `clipboard` feature)
//! - `consolidate` — merge every backup file in a directory into one
//!   deduplicated, chronologically ordered document

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Back up AI-assistant conversations from the clipboard and consolidate
/// them into a single deduplicated markdown log.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstash")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstash backup
    chatstash backup --dir ~/conversations --attempts 5
    chatstash consolidate
    chatstash consolidate --dir ~/conversations -o merged.md
    chatstash consolidate --strip \"Regenerate response\"")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Save the current clipboard content as a timestamped backup file
    #[cfg(feature = "clipboard")]
    Backup {
        /// Directory where backup files are stored
        #[arg(short, long, default_value = "backups", value_name = "DIR")]
        dir: PathBuf,

        /// Clipboard poll attempts before giving up
        #[arg(long, default_value_t = 3, value_name = "N")]
        attempts: usize,

        /// Capture timestamp override (YYYY-MM-DD HH:MM:SS); defaults to now
        #[arg(long, value_name = "TIMESTAMP")]
        at: Option<String>,
    },

    /// Merge all backup files into one deduplicated transcript
    Consolidate {
        /// Directory containing the backup files
        #[arg(short, long, default_value = "backups", value_name = "DIR")]
        dir: PathBuf,

        /// Output filename, written inside the backup directory
        #[arg(
            short,
            long,
            default_value = "consolidated_conversation.md",
            value_name = "NAME"
        )]
        output: String,

        /// Extra UI-noise marker to strip (repeatable)
        #[arg(long = "strip", value_name = "TEXT")]
        strip: Vec<String>,
    },
}
