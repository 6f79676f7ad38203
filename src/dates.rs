//! Publication-date normalization.
//!
//! Journal listing pages disagree on how publication dates are written:
//! ISO-8601 timestamps with or without offsets, long-form US dates
//! ("March 3, 2024"), day-first abbreviations ("03 Mar 2024"), and any of
//! those behind a display label ("Published: ..."). This module reconciles
//! all of them into a single timezone-aware [`DateTime<Utc>`].
//!
//! An unrecognized date is a defined terminal outcome, not a pipeline
//! failure: [`normalize`] absorbs the parse error, logs it, and yields
//! `None`, which downstream ordering treats as "unknown, sorts last".

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::warn;

/// Fallback formats tried in order after ISO-8601, all assumed UTC.
const FALLBACK_FORMATS: [&str; 4] = ["%B %d, %Y", "%d %b %Y", "%Y-%m-%d", "%Y-%m-%dT%H:%M:%S"];

/// Matches strings that open with a 4-digit year, i.e. already date-like.
static YEAR_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}").unwrap());

/// A date string that matched none of the supported encodings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("unrecognized date format: {0:?}")]
    Unparseable(String),
}

/// Normalize a raw date capture into UTC, absorbing parse failures.
///
/// Absent, empty, and unrecognized inputs all come back as `None`;
/// unrecognized ones are logged so selector drift shows up in the output.
pub fn normalize(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
    match parse_published(raw) {
        Ok(published) => Some(published),
        Err(err) => {
            warn!(%err, "dropping publication date");
            None
        }
    }
}

/// Parse a non-empty date string into UTC.
///
/// Policy, first success wins:
/// 1. Strip a leading display label ("Published:", "Online:", ...) up to and
///    including the first colon, unless the string opens with a 4-digit year
///    (colons inside ISO timestamps are not labels).
/// 2. RFC 3339, converting any offset to UTC.
/// 3. Offset-less ISO date-time with optional fractional seconds, assumed UTC.
/// 4. The [`FALLBACK_FORMATS`] list in order; date-only matches land at
///    midnight UTC.
pub fn parse_published(raw: &str) -> Result<DateTime<Utc>, DateError> {
    let text = strip_label(raw.trim());

    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(parsed.and_utc());
    }

    for format in FALLBACK_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(parsed.and_utc());
        }
        if let Ok(parsed) = NaiveDate::parse_from_str(text, format) {
            return Ok(parsed.and_time(NaiveTime::MIN).and_utc());
        }
    }

    Err(DateError::Unparseable(raw.to_string()))
}

/// Discard a "Published:" style label prefix from a date capture.
fn strip_label(text: &str) -> &str {
    if YEAR_PREFIX.is_match(text) {
        return text;
    }
    match text.split_once(':') {
        Some((_, rest)) => rest.trim(),
        None => text,
    }
}
