//! Configuration types for cleaning and consolidation.
//!
//! This module provides clean configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`CleanConfig`] — the UI-noise denylist used by the content cleaner
//! - [`ConsolidateConfig`] — backup extension and output filename for a
//!   consolidation run
//!
//! The denylist is deliberately explicit configuration rather than hidden
//! module state, so unit tests can run against a deterministic, minimal set
//! of markers.
//!
//! # Example
//!
//! ```rust
//! use chatstash::config::{CleanConfig, ConsolidateConfig};
//!
//! let clean = CleanConfig::new().with_marker("Regenerate response");
//! let run = ConsolidateConfig::new().with_output_filename("merged.md");
//! assert!(clean.matches("DoneFeedback has been submitted"));
//! assert!(run.is_output("merged.md"));
//! ```

use serde::{Deserialize, Serialize};

/// Transient interface text stripped from backup content by default.
///
/// Captured transcripts drag along whatever chrome the assistant UI rendered
/// near the conversation: feedback toasts, interrupt hints, model-name
/// badges, mode-switcher button labels. Matching is substring-based and
/// lossy by design — see [`CleanConfig::matches`].
pub const DEFAULT_UI_NOISE: &[&str] = &[
    "DoneFeedback has been submitted",
    "Start with History Ctrl+Enter",
    "Press Enter again to interrupt and send a new message",
    "Image",
    "Claude 3.5 Sonnet",
    "GPT-4o",
    "Write",
    "Chat",
    "ChatWriteLegacy",
    "Legacy",
    "Changes overview (0 files need review)",
];

/// Default extension of backup files (without dot).
pub const DEFAULT_BACKUP_EXTENSION: &str = "md";

/// Default filename of the consolidated output document.
pub const DEFAULT_OUTPUT_FILENAME: &str = "consolidated_conversation.md";

/// Configuration for the content cleaner: which substrings mark a line as
/// UI noise.
///
/// A line containing *any* configured marker is removed wholesale. Markers
/// are matched as plain substrings, so a marker that happens to occur inside
/// legitimate conversation text removes that line too; callers must not rely
/// on exact-phrase preservation of marker text anywhere in the input.
///
/// # Examples
///
/// ```
/// use chatstash::config::CleanConfig;
///
/// // Default denylist
/// let config = CleanConfig::new();
/// assert!(config.matches("DoneFeedback has been submitted"));
///
/// // Custom additions
/// let config = CleanConfig::new().with_marker("Thinking…");
/// assert!(config.matches("Thinking… (3s)"));
///
/// // Empty list for tests
/// let config = CleanConfig::empty();
/// assert!(!config.matches("DoneFeedback has been submitted"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanConfig {
    /// Literal substrings marking a line as UI noise.
    pub ui_noise: Vec<String>,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            ui_noise: DEFAULT_UI_NOISE.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl CleanConfig {
    /// Creates a configuration with the default denylist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration with no markers (everything passes through).
    pub fn empty() -> Self {
        Self {
            ui_noise: Vec::new(),
        }
    }

    /// Adds one marker to the denylist.
    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.ui_noise.push(marker.into());
        self
    }

    /// Adds several markers to the denylist.
    #[must_use]
    pub fn with_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ui_noise.extend(markers.into_iter().map(Into::into));
        self
    }

    /// Returns `true` if `line` contains any configured marker.
    pub fn matches(&self, line: &str) -> bool {
        self.ui_noise.iter().any(|marker| line.contains(marker))
    }
}

/// Configuration for one consolidation run.
///
/// # Examples
///
/// ```
/// use chatstash::config::ConsolidateConfig;
///
/// let config = ConsolidateConfig::new()
///     .with_extension("markdown")
///     .with_output_filename("everything.markdown");
/// assert_eq!(config.backup_extension, "markdown");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsolidateConfig {
    /// Extension (without dot) a file must have to count as a backup.
    pub backup_extension: String,

    /// Filename of the consolidated output inside the backup directory.
    ///
    /// The file collector excludes this name from its results, so re-running
    /// consolidation never feeds the previous output back into the merge.
    pub output_filename: String,
}

impl Default for ConsolidateConfig {
    fn default() -> Self {
        Self {
            backup_extension: DEFAULT_BACKUP_EXTENSION.to_string(),
            output_filename: DEFAULT_OUTPUT_FILENAME.to_string(),
        }
    }
}

impl ConsolidateConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the backup file extension (without dot).
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.backup_extension = extension.into();
        self
    }

    /// Sets the output filename.
    #[must_use]
    pub fn with_output_filename(mut self, filename: impl Into<String>) -> Self {
        self.output_filename = filename.into();
        self
    }

    /// Returns `true` if `file_name` is the configured output filename.
    pub fn is_output(&self, file_name: &str) -> bool {
        file_name == self.output_filename
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_config_default_list() {
        let config = CleanConfig::new();
        assert!(config.matches("DoneFeedback has been submitted"));
        assert!(config.matches("Press Enter again to interrupt and send a new message"));
        assert!(!config.matches("Perfectly ordinary conversation text"));
    }

    #[test]
    fn test_clean_config_substring_match() {
        let config = CleanConfig::new();
        // "Write" is a marker; lines merely containing it are flagged too
        assert!(config.matches("  Write  "));
        assert!(config.matches("Ctrl+Shift+Write something"));
    }

    #[test]
    fn test_clean_config_empty() {
        let config = CleanConfig::empty();
        assert!(!config.matches("Write"));
        assert!(config.ui_noise.is_empty());
    }

    #[test]
    fn test_clean_config_builder() {
        let config = CleanConfig::empty()
            .with_marker("toast one")
            .with_markers(["toast two", "toast three"]);
        assert_eq!(config.ui_noise.len(), 3);
        assert!(config.matches("a toast three b"));
    }

    #[test]
    fn test_consolidate_config_default() {
        let config = ConsolidateConfig::default();
        assert_eq!(config.backup_extension, "md");
        assert_eq!(config.output_filename, "consolidated_conversation.md");
        assert!(config.is_output("consolidated_conversation.md"));
        assert!(!config.is_output("backup_20240101_100000.md"));
    }

    #[test]
    fn test_consolidate_config_builder() {
        let config = ConsolidateConfig::new()
            .with_extension("txt")
            .with_output_filename("all.txt");
        assert_eq!(config.backup_extension, "txt");
        assert!(config.is_output("all.txt"));
        assert!(!config.is_output("consolidated_conversation.md"));
    }

    #[test]
    fn test_clean_config_serde() {
        let config = CleanConfig::empty().with_marker("badge");
        let json = serde_json::to_string(&config).unwrap();
        let parsed: CleanConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.ui_noise, vec!["badge".to_string()]);
    }
}
