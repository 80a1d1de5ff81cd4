//! Clipboard capture for the backup side.
//!
//! The consolidation core treats capture as an external collaborator with a
//! narrow contract: hand over a non-empty text blob plus a wall-clock
//! capture time, or report failure after bounded retries. This module is
//! that collaborator's non-interactive half — it polls the system clipboard
//! a configured number of times with a delay between attempts and returns
//! the first non-empty text it sees.
//!
//! Anything interactive (prompting the user to copy, confirming retries,
//! abort gestures) belongs to the caller, not here.

use std::thread;
use std::time::Duration;

use crate::error::{Result, StashError};

/// Configuration for clipboard polling.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use chatstash::capture::CaptureConfig;
///
/// let config = CaptureConfig::new()
///     .with_max_attempts(5)
///     .with_retry_delay(Duration::from_millis(500));
/// assert_eq!(config.max_attempts, 5);
/// ```
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// How many times to poll the clipboard before giving up.
    pub max_attempts: usize,

    /// Delay between attempts.
    pub retry_delay: Duration,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            retry_delay: Duration::from_secs(2),
        }
    }
}

impl CaptureConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of poll attempts (minimum 1).
    #[must_use]
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Sets the delay between attempts.
    #[must_use]
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }
}

/// Reads conversation text from the system clipboard.
///
/// Polls up to `config.max_attempts` times, sleeping `config.retry_delay`
/// between attempts. Whitespace-only content counts as empty.
///
/// # Errors
///
/// - [`StashError::Clipboard`] when the clipboard backend cannot be opened
///   or read (e.g. no display server);
/// - [`StashError::EmptyClipboard`] when every attempt came back empty.
pub fn read_clipboard(config: &CaptureConfig) -> Result<String> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| StashError::clipboard(e.to_string()))?;

    for attempt in 1..=config.max_attempts {
        match clipboard.get_text() {
            Ok(text) if !text.trim().is_empty() => return Ok(text),
            // Empty or non-text content: retry after the delay
            Ok(_) | Err(arboard::Error::ContentNotAvailable) => {}
            Err(e) => return Err(StashError::clipboard(e.to_string())),
        }

        if attempt < config.max_attempts {
            thread::sleep(config.retry_delay);
        }
    }

    Err(StashError::EmptyClipboard {
        attempts: config.max_attempts,
    })
}

/// Clears the clipboard before a capture round.
///
/// Guards against saving stale content the user copied earlier. Failure to
/// clear is not fatal to the capture flow, so this returns whether the clear
/// succeeded rather than an error.
pub fn clear_clipboard() -> bool {
    arboard::Clipboard::new()
        .and_then(|mut clipboard| clipboard.clear())
        .is_ok()
}
