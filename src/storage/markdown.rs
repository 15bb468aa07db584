//! Frontmatter extraction from markdown text
//!
//! Documents may open with a `---` fenced YAML block. Files without a fence
//! are fine (no frontmatter, full text is the body); a fence that never
//! closes or holds non-mapping YAML is an error.

use anyhow::{bail, Context, Result};
use serde_yaml::Mapping;

/// Splits markdown into its frontmatter mapping (if any) and body.
pub fn extract_frontmatter(content: &str) -> Result<(Option<Mapping>, &str)> {
    let trimmed = content.strip_prefix('\u{feff}').unwrap_or(content);

    let Some(rest) = trimmed.strip_prefix("---") else {
        return Ok((None, content));
    };

    // Closing fence on its own line
    let end = rest
        .find("\n---")
        .context("Unterminated frontmatter (missing closing ---)")?;

    let yaml = &rest[..end];
    let after = &rest[end + 4..];
    let body = after
        .strip_prefix("\r\n")
        .or_else(|| after.strip_prefix('\n'))
        .unwrap_or(after);

    let mapping = match serde_yaml::from_str::<serde_yaml::Value>(yaml)
        .context("Failed to parse frontmatter")?
    {
        serde_yaml::Value::Null => Mapping::new(),
        serde_yaml::Value::Mapping(mapping) => mapping,
        other => bail!(
            "Frontmatter must be a mapping, got {}",
            yaml_type_name(&other)
        ),
    };

    Ok((Some(mapping), body))
}

fn yaml_type_name(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "a boolean",
        serde_yaml::Value::Number(_) => "a number",
        serde_yaml::Value::String(_) => "a string",
        serde_yaml::Value::Sequence(_) => "a sequence",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
    }
}
