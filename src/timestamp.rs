//! Timestamp extraction from backup filenames and file content.
//!
//! A backup file carries its creation time in up to two places:
//!
//! - the filename, as `backup_20240101_100000.md` (compact) or
//!   `backup_2024-01-01_10-00-00.md` (hyphenated);
//! - a header line inside the content:
//!   `*Backup created on: 2024-01-01 10:00:00*`.
//!
//! [`extract`] tries the filename first and falls back to the content
//! header. A value that matches the pattern but is not a real calendar
//! date/time (month 13, hour 61) is treated as absent — extraction returns
//! `Option`, never an error.
//!
//! Timestamps are naive wall-clock values interpreted as UTC, matching how
//! the capture side stamps backups from the local clock.

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;

use crate::error::{Result, StashError};

/// Format of the timestamp inside a `*Backup created on: ...*` header.
pub const HEADER_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format of the compact timestamp used in backup filenames.
pub const FILENAME_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

const HYPHENATED_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Regex source for a backup header line, with the timestamp captured.
///
/// The digit pattern is deliberately loose: `2024-13-32 25:61:99` still
/// matches, and chrono then rejects it during parsing. That distinction
/// matters to the interaction parser, which must *consume* a malformed
/// header rather than leave it embedded in a neighboring segment.
pub const HEADER_PATTERN: &str =
    r"\*Backup created on: (\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2})\*";

const FILENAME_COMPACT_PATTERN: &str = r"backup_(\d{8}_\d{6})";
const FILENAME_HYPHENATED_PATTERN: &str =
    r"backup_(\d{4}-\d{2}-\d{2}_\d{2}-\d{2}-\d{2})";

/// Compiles the header regex.
///
/// The pattern is a verified constant, so compilation cannot fail.
pub fn header_regex() -> Regex {
    Regex::new(HEADER_PATTERN).unwrap()
}

/// Derives a point-in-time for a backup file.
///
/// Precedence, first success wins:
/// 1. timestamp embedded in `filename` ([`from_filename`]);
/// 2. first header line inside `content` ([`from_content`]).
///
/// # Example
///
/// ```
/// use chatstash::timestamp::extract;
/// use chrono::{Datelike, Timelike};
///
/// let ts = extract("backup_20240101_100000.md", "no header here").unwrap();
/// assert_eq!((ts.year(), ts.hour()), (2024, 10));
///
/// // Filename wins over content
/// let ts = extract(
///     "backup_20240101_100000.md",
///     "*Backup created on: 2030-05-05 05:05:05*",
/// )
/// .unwrap();
/// assert_eq!(ts.year(), 2024);
/// ```
pub fn extract(filename: &str, content: &str) -> Option<DateTime<Utc>> {
    from_filename(filename).or_else(|| from_content(content))
}

/// Extracts a timestamp from a backup filename, if present.
///
/// Recognizes both `backup_<YYYYMMDD>_<HHMMSS>` and
/// `backup_<YYYY-MM-DD>_<HH-MM-SS>`; the extension is ignored. Returns
/// `None` for non-matching names and for matches that are not valid
/// calendar dates.
pub fn from_filename(filename: &str) -> Option<DateTime<Utc>> {
    let compact = Regex::new(FILENAME_COMPACT_PATTERN).unwrap();
    if let Some(caps) = compact.captures(filename) {
        if let Some(ts) = parse_naive(&caps[1], FILENAME_TIMESTAMP_FORMAT) {
            return Some(ts);
        }
    }

    let hyphenated = Regex::new(FILENAME_HYPHENATED_PATTERN).unwrap();
    if let Some(caps) = hyphenated.captures(filename) {
        if let Some(ts) = parse_naive(&caps[1], HYPHENATED_TIMESTAMP_FORMAT) {
            return Some(ts);
        }
    }

    None
}

/// Extracts a timestamp from the first header line in `content`, if any.
pub fn from_content(content: &str) -> Option<DateTime<Utc>> {
    let caps = header_regex().captures(content)?;
    parse_naive(&caps[1], HEADER_TIMESTAMP_FORMAT)
}

/// Parses a header-format timestamp that is *required* to be valid.
///
/// Unlike the extraction paths, this raises
/// [`StashError::InvalidTimestamp`] on failure. Used for CLI-supplied
/// timestamp overrides.
pub fn parse_required(input: &str) -> Result<DateTime<Utc>> {
    parse_naive(input, HEADER_TIMESTAMP_FORMAT)
        .ok_or_else(|| StashError::invalid_timestamp(input))
}

/// Renders a timestamp as a backup header line.
///
/// ```
/// use chatstash::timestamp::format_header;
/// use chrono::{TimeZone, Utc};
///
/// let ts = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
/// assert_eq!(format_header(ts), "*Backup created on: 2024-01-01 10:00:00*");
/// ```
pub fn format_header(ts: DateTime<Utc>) -> String {
    format!(
        "*Backup created on: {}*",
        ts.format(HEADER_TIMESTAMP_FORMAT)
    )
}

/// Renders a timestamp as the compact stamp used in backup filenames.
pub fn format_filename_stamp(ts: DateTime<Utc>) -> String {
    ts.format(FILENAME_TIMESTAMP_FORMAT).to_string()
}

fn parse_naive(input: &str, format: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(input, format)
        .ok()
        .map(|naive| naive.and_utc())
}
