//! Content cleaner: strips UI noise and normalizes whitespace.
//!
//! Captured transcripts carry transient interface text around the actual
//! conversation. [`clean`] removes every line containing a denylisted
//! marker, drops blank lines, collapses runs of three or more newlines down
//! to one blank line, and trims the result. A timestamp header at the top of
//! the text is set aside first and re-prepended verbatim, so cleanup can
//! never damage the one line the interaction parser depends on.
//!
//! The function is pure and idempotent: `clean(clean(x)) == clean(x)`.
//!
//! # Example
//!
//! ```
//! use chatstash::config::CleanConfig;
//! use chatstash::core::cleaner::clean;
//!
//! let raw = "*Backup created on: 2024-01-01 10:00:00*\n\
//!            User: hello\n\
//!            DoneFeedback has been submitted\n\
//!            \n\
//!            Assistant: hi!";
//! let cleaned = clean(raw, &CleanConfig::new());
//! assert!(cleaned.starts_with("*Backup created on: 2024-01-01 10:00:00*"));
//! assert!(cleaned.contains("User: hello"));
//! assert!(!cleaned.contains("DoneFeedback"));
//! ```

use regex::Regex;

use crate::config::CleanConfig;
use crate::timestamp;

/// Cleans one backup file's content.
///
/// Steps, in order:
/// 1. if the first non-empty line is a timestamp header, set it aside;
/// 2. remove every line containing any marker from `config`;
/// 3. drop empty and whitespace-only lines;
/// 4. collapse three-or-more consecutive newlines to exactly two;
/// 5. trim leading/trailing whitespace;
/// 6. re-prepend the preserved header, if any.
///
/// Headers further down the text are left in place for the interaction
/// parser to split on; none of the default markers can match them.
pub fn clean(text: &str, config: &CleanConfig) -> String {
    let header_re = timestamp::header_regex();
    let lines: Vec<&str> = text.lines().collect();

    let first_content = lines.iter().position(|line| !line.trim().is_empty());
    let (preserved_header, body) = match first_content {
        Some(idx) if header_re.is_match(lines[idx]) => (Some(lines[idx]), &lines[idx + 1..]),
        _ => (None, &lines[..]),
    };

    let kept: Vec<&str> = body
        .iter()
        .copied()
        .filter(|line| !line.trim().is_empty())
        .filter(|line| !config.matches(line))
        .collect();

    let mut result = kept.join("\n");
    result = collapse_blank_runs(&result);
    result = result.trim().to_string();

    match preserved_header {
        Some(header) if result.is_empty() => header.to_string(),
        Some(header) => format!("{header}\n{result}"),
        None => result,
    }
}

/// Collapses runs of three or more newlines down to exactly two.
fn collapse_blank_runs(text: &str) -> String {
    let re = Regex::new(r"\n{3,}").unwrap();
    re.replace_all(text, "\n\n").into_owned()
}
