//! Interaction parser: splits cleaned content into discrete records.
//!
//! A backup file may hold a single capture or a concatenation of several
//! (e.g. a previous consolidated document copied back into a backup). Each
//! capture is introduced by a `*Backup created on: ...*` header. The parser
//! splits on every header occurrence and pairs the content *following* a
//! header with that header's timestamp.
//!
//! Rules:
//! - zero headers: the whole text is one interaction; its timestamp is the
//!   caller-supplied fallback (typically filename-derived) or, failing that,
//!   whatever [`timestamp::from_content`] finds;
//! - text before the first header is discarded;
//! - segments that are empty after trimming are dropped;
//! - a header whose timestamp does not parse is skipped *together with* its
//!   segment, so malformed dates never enter the merge as untimed records.
//!
//! # Example
//!
//! ```
//! use chatstash::core::parser::InteractionParser;
//!
//! let parser = InteractionParser::new();
//! let text = "*Backup created on: 2024-01-01 10:00:00*\nfirst\n\
//!             *Backup created on: 2024-01-01 11:00:00*\nsecond";
//! let records = parser.parse(text, None);
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].body, "first");
//! assert!(records[1].timestamp.is_some());
//! ```

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;

use crate::record::Interaction;
use crate::timestamp::{self, HEADER_TIMESTAMP_FORMAT};

/// Splits cleaned backup content into interaction records.
///
/// Holds the compiled header pattern; construct once per run and reuse.
#[derive(Debug)]
pub struct InteractionParser {
    header: Regex,
}

impl InteractionParser {
    /// Creates a parser with the canonical header pattern.
    pub fn new() -> Self {
        Self {
            header: timestamp::header_regex(),
        }
    }

    /// Parses `text` into zero or more interactions.
    ///
    /// `fallback` supplies the timestamp for the whole-file case, where the
    /// text contains no header of its own; pass the filename-derived
    /// timestamp when one exists.
    pub fn parse(&self, text: &str, fallback: Option<DateTime<Utc>>) -> Vec<Interaction> {
        let matches: Vec<(usize, usize, &str)> = self
            .header
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let ts = caps.get(1)?;
                Some((whole.start(), whole.end(), ts.as_str()))
            })
            .collect();

        if matches.is_empty() {
            let ts = fallback.or_else(|| timestamp::from_content(text));
            let body = text.trim();
            if body.is_empty() {
                return Vec::new();
            }
            let mut record = Interaction::new(body);
            record.timestamp = ts;
            return vec![record];
        }

        let mut records = Vec::with_capacity(matches.len());
        for (i, &(_, seg_start, ts_str)) in matches.iter().enumerate() {
            let seg_end = matches
                .get(i + 1)
                .map_or(text.len(), |&(next_start, _, _)| next_start);

            // Malformed header: drop the segment with it
            let Ok(naive) = NaiveDateTime::parse_from_str(ts_str, HEADER_TIMESTAMP_FORMAT)
            else {
                continue;
            };

            let body = text[seg_start..seg_end].trim();
            if body.is_empty() {
                continue;
            }

            records.push(Interaction::new(body).with_timestamp(naive.and_utc()));
        }

        records
    }
}

impl Default for InteractionParser {
    fn default() -> Self {
        Self::new()
    }
}
