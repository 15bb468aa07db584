//! Multi-format date parsing
//!
//! Raw date values arrive in whatever shape an author typed into their
//! frontmatter: ISO 8601 strings with or without zones, RFC 2822 strings
//! copied from feeds, slash dates, month names, bare years, or compact
//! numeric encodings like `20240909`. Parsing tries an ordered chain of
//! strategies and accepts the first structurally valid result:
//!
//! 1. ISO 8601 (date-only, date-time, explicit offset, bracketed zone name)
//! 2. RFC 2822
//! 3. A permissive table of common calendar formats
//!
//! Absent values yield `None` silently. Unparsable or wrongly-typed values
//! yield `None` plus exactly one warning; the parser never errors.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use chrono_tz::Tz;

use crate::domain::{ParsedTimestamp, RawValue};
use crate::warn::WarningSink;

/// Options controlling how parsed zones are handled.
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    /// Keep an explicit offset found in the string instead of normalizing
    /// the result to UTC. Resolution relies on this to preserve
    /// author-intended offsets.
    pub preserve_zone: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { preserve_zone: true }
    }
}

/// Parses a raw value into a timestamp.
///
/// `label` names the document (and optionally the key) in warnings.
/// Returns `None` for absent values (silently) and for malformed values
/// (with one warning).
pub fn parse(
    label: &str,
    raw: &RawValue,
    options: ParseOptions,
    sink: &dyn WarningSink,
) -> Option<ParsedTimestamp> {
    let text = match raw {
        RawValue::Missing => return None,
        RawValue::Number(n) => n.to_string(),
        RawValue::Text(s) => s.clone(),
        RawValue::Other { kind, rendered } => {
            sink.warn(&format!(
                "{}: ignoring date value '{}' of unexpected type {}",
                label, rendered, kind
            ));
            return None;
        }
    };

    match parse_text(text.trim()) {
        Some(ts) if options.preserve_zone => Some(ts),
        Some(ts) => Some(ts.to_utc()),
        None => {
            sink.warn(&format!(
                "{}: invalid date value '{}' (expected ISO 8601, RFC 2822, \
                 or a common date format; see the pagedate README for examples)",
                label, text
            ));
            None
        }
    }
}

/// The strategy chain. First valid result wins; later strategies are never
/// consulted to break ties.
fn parse_text(text: &str) -> Option<ParsedTimestamp> {
    const STRATEGIES: &[fn(&str) -> Option<ParsedTimestamp>] =
        &[parse_iso8601, parse_rfc2822, parse_permissive];

    STRATEGIES.iter().find_map(|strategy| strategy(text))
}

/// Naive ISO date-time layouts, tried in order.
const ISO_NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

fn parse_iso8601(text: &str) -> Option<ParsedTimestamp> {
    // Extended profile: a trailing bracketed zone name, with or without a
    // numeric offset before it, e.g. "2024-09-09T10:00:00[Europe/Paris]".
    if let Some(stripped) = text.strip_suffix(']') {
        if let Some((rest, zone)) = stripped.rsplit_once('[') {
            return parse_iso_in_zone(rest.trim(), zone.trim());
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(ParsedTimestamp::zoned(dt));
    }

    // RFC 3339 requires a colon in the offset; accept "+0200" too.
    if let Ok(dt) = DateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(ParsedTimestamp::zoned(dt));
    }

    for format in ISO_NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(ParsedTimestamp::floating(naive));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(ParsedTimestamp::floating(date.and_hms_opt(0, 0, 0)?));
    }

    None
}

/// Resolves a date-time against a named IANA zone from a bracket suffix.
fn parse_iso_in_zone(text: &str, zone: &str) -> Option<ParsedTimestamp> {
    let tz: Tz = zone.parse().ok()?;

    // With an explicit offset the instant is already fixed; the zone only
    // re-expresses it.
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(ParsedTimestamp::zoned(dt.with_timezone(&tz).fixed_offset()));
    }

    for format in ISO_NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            let dt = tz.from_local_datetime(&naive).earliest()?;
            return Some(ParsedTimestamp::zoned(dt.fixed_offset()));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        let dt = tz.from_local_datetime(&date.and_hms_opt(0, 0, 0)?).earliest()?;
        return Some(ParsedTimestamp::zoned(dt.fixed_offset()));
    }

    None
}

fn parse_rfc2822(text: &str) -> Option<ParsedTimestamp> {
    DateTime::parse_from_rfc2822(text)
        .ok()
        .map(ParsedTimestamp::zoned)
}

/// Space-separated date-times carrying a numeric offset.
const FALLBACK_OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S %z", "%Y-%m-%d %H:%M:%S%z"];

/// Space-separated date-times without zone information.
const FALLBACK_NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

/// Date-only layouts people actually write.
const FALLBACK_DATE_FORMATS: &[&str] = &[
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d %B %Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %b %Y",
    "%b %d, %Y",
    "%Y.%m.%d",
];

/// The permissive tail of the chain: common formats plus the numeric
/// encodings (`2024`, `20240909`) that reach us coerced from YAML numbers.
fn parse_permissive(text: &str) -> Option<ParsedTimestamp> {
    if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        return parse_numeric(text);
    }

    for format in FALLBACK_OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(text, format) {
            return Some(ParsedTimestamp::zoned(dt));
        }
    }

    for format in FALLBACK_NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(ParsedTimestamp::floating(naive));
        }
    }

    for format in FALLBACK_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(ParsedTimestamp::floating(date.and_hms_opt(0, 0, 0)?));
        }
    }

    None
}

/// All-digit inputs: a bare year or a compact `YYYYMMDD` date.
fn parse_numeric(digits: &str) -> Option<ParsedTimestamp> {
    match digits.len() {
        4 => {
            let year: i32 = digits.parse().ok()?;
            let date = NaiveDate::from_ymd_opt(year, 1, 1)?;
            Some(ParsedTimestamp::floating(date.and_hms_opt(0, 0, 0)?))
        }
        8 => {
            // Split by hand; an unseparated %Y%m%d parse is ambiguous about
            // how many digits belong to the year.
            let year: i32 = digits[..4].parse().ok()?;
            let month: u32 = digits[4..6].parse().ok()?;
            let day: u32 = digits[6..8].parse().ok()?;
            let date = NaiveDate::from_ymd_opt(year, month, day)?;
            Some(ParsedTimestamp::floating(date.and_hms_opt(0, 0, 0)?))
        }
        _ => None,
    }
}
