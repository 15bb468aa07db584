//! `pagedate parse` - run one value through the date parser
//!
//! Debug aid for checking how a frontmatter value will be interpreted.

use anyhow::{bail, Result};

use super::output::Output;
use crate::domain::RawValue;
use crate::parser::{self, ParseOptions};
use crate::warn::MemorySink;

pub fn run(output: &Output, value: &str, utc: bool) -> Result<()> {
    let raw = RawValue::Text(value.to_string());
    let options = ParseOptions {
        preserve_zone: !utc,
    };

    // Swallow the parser's warning; the command reports failure itself
    let sink = MemorySink::new();
    let Some(timestamp) = parser::parse("argument", &raw, options, &sink) else {
        bail!(
            "Could not parse '{}' as a date (expected ISO 8601, RFC 2822, or a common date format)",
            value
        );
    };

    if output.is_json() {
        output.data(&serde_json::json!({
            "input": value,
            "parsed": timestamp,
            "epoch_ms": timestamp.epoch_ms(),
            "offset_explicit": timestamp.offset_explicit(),
        }));
    } else {
        output.success(&timestamp.to_string());
    }

    Ok(())
}
