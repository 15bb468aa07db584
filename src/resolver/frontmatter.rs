//! Frontmatter date source
//!
//! Recognized keys: `date` for the creation date, `lastmod` / `updated` /
//! `last-modified` for the modification date (tried in that fixed order,
//! first hit wins), and `publishDate` for the publication date.

use serde_yaml::Mapping;

use super::Accumulators;
use crate::domain::RawValue;
use crate::parser::{self, ParseOptions};
use crate::warn::WarningSink;

const CREATED_KEY: &str = "date";
const MODIFIED_KEYS: &[&str] = &["lastmod", "updated", "last-modified"];
const PUBLISHED_KEY: &str = "publishDate";

/// Fills still-empty accumulators from the document's frontmatter mapping.
/// Author offsets are preserved as written.
pub fn fill(label: &str, mapping: &Mapping, dates: &mut Accumulators, sink: &dyn WarningSink) {
    let options = ParseOptions { preserve_zone: true };

    if dates.created.is_none() {
        dates.created = parse_key(label, mapping, CREATED_KEY, options, sink);
    }

    for key in MODIFIED_KEYS {
        if dates.modified.is_some() {
            break;
        }
        dates.modified = parse_key(label, mapping, key, options, sink);
    }

    if dates.published.is_none() {
        dates.published = parse_key(label, mapping, PUBLISHED_KEY, options, sink);
    }
}

fn parse_key(
    label: &str,
    mapping: &Mapping,
    key: &str,
    options: ParseOptions,
    sink: &dyn WarningSink,
) -> Option<crate::domain::ParsedTimestamp> {
    let raw = RawValue::from_mapping(mapping, key);
    if raw.is_missing() {
        return None;
    }
    parser::parse(&format!("{} (key '{}')", label, key), &raw, options, sink)
}
