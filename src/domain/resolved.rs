//! The fully-resolved date record attached to a document

use serde::Serialize;

use super::ParsedTimestamp;

/// Resolved dates for one document. Every field is populated; anything no
/// source could supply has already been defaulted to the resolution
/// instant. Built once and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedDates {
    /// When the document was created.
    pub created: ParsedTimestamp,
    /// When the document was last modified.
    pub modified: ParsedTimestamp,
    /// When the document was (or is to be) published.
    pub published: ParsedTimestamp,
}
