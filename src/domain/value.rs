//! Untyped raw values as they arrive from a date source
//!
//! Frontmatter values come out of YAML with no schema, so a date field may
//! be missing, a number (`lastmod: 20240909`), a string, or something else
//! entirely. `RawValue` captures those cases before parsing so the parser
//! can distinguish ordinary absence from malformed input.

use serde_yaml::Value;

/// A raw, not-yet-parsed date value from some source.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// The source has no value for this field. Normal, never warned about.
    Missing,
    /// A numeric value, e.g. a bare year or a compact `YYYYMMDD` encoding.
    Number(serde_yaml::Number),
    /// A textual value to run through the format-fallback chain.
    Text(String),
    /// Any other type. Malformed input; parsing warns and yields nothing.
    Other {
        /// Human-readable type name for diagnostics ("boolean", "sequence", ...)
        kind: &'static str,
        /// Display rendering of the offending value
        rendered: String,
    },
}

impl RawValue {
    /// Converts a YAML value into a `RawValue`.
    pub fn from_yaml(value: &Value) -> Self {
        match value {
            Value::Null => RawValue::Missing,
            Value::Number(n) => RawValue::Number(n.clone()),
            Value::String(s) => RawValue::Text(s.clone()),
            Value::Bool(b) => RawValue::Other {
                kind: "boolean",
                rendered: b.to_string(),
            },
            Value::Sequence(_) => RawValue::Other {
                kind: "sequence",
                rendered: render_compact(value),
            },
            Value::Mapping(_) => RawValue::Other {
                kind: "mapping",
                rendered: render_compact(value),
            },
            Value::Tagged(_) => RawValue::Other {
                kind: "tagged value",
                rendered: render_compact(value),
            },
        }
    }

    /// Looks up `key` in a YAML mapping, treating a missing key as `Missing`.
    pub fn from_mapping(mapping: &serde_yaml::Mapping, key: &str) -> Self {
        match mapping.get(key) {
            Some(value) => Self::from_yaml(value),
            None => RawValue::Missing,
        }
    }

    /// Returns true if the source had no value at all.
    pub fn is_missing(&self) -> bool {
        matches!(self, RawValue::Missing)
    }
}

/// Single-line rendering of a YAML value for warning messages.
fn render_compact(value: &Value) -> String {
    serde_yaml::to_string(value)
        .map(|s| s.trim_end().replace('\n', " "))
        .unwrap_or_else(|_| "<unprintable>".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_missing() {
        let mapping = serde_yaml::from_str::<serde_yaml::Mapping>("title: hello").unwrap();
        assert!(RawValue::from_mapping(&mapping, "date").is_missing());
    }

    #[test]
    fn null_is_missing() {
        let mapping = serde_yaml::from_str::<serde_yaml::Mapping>("date: null").unwrap();
        assert!(RawValue::from_mapping(&mapping, "date").is_missing());
    }

    #[test]
    fn string_becomes_text() {
        let mapping = serde_yaml::from_str::<serde_yaml::Mapping>("date: 2024-09-09").unwrap();
        // Unquoted YYYY-MM-DD is a plain YAML string
        assert_eq!(
            RawValue::from_mapping(&mapping, "date"),
            RawValue::Text("2024-09-09".to_string())
        );
    }

    #[test]
    fn integer_becomes_number() {
        let mapping = serde_yaml::from_str::<serde_yaml::Mapping>("lastmod: 20240909").unwrap();
        match RawValue::from_mapping(&mapping, "lastmod") {
            RawValue::Number(n) => assert_eq!(n.to_string(), "20240909"),
            other => panic!("expected number, got {:?}", other),
        }
    }

    #[test]
    fn bool_is_other_with_type_name() {
        let mapping = serde_yaml::from_str::<serde_yaml::Mapping>("date: true").unwrap();
        match RawValue::from_mapping(&mapping, "date") {
            RawValue::Other { kind, rendered } => {
                assert_eq!(kind, "boolean");
                assert_eq!(rendered, "true");
            }
            other => panic!("expected other, got {:?}", other),
        }
    }

    #[test]
    fn sequence_is_other() {
        let mapping = serde_yaml::from_str::<serde_yaml::Mapping>("date: [2024, 9]").unwrap();
        match RawValue::from_mapping(&mapping, "date") {
            RawValue::Other { kind, .. } => assert_eq!(kind, "sequence"),
            other => panic!("expected other, got {:?}", other),
        }
    }
}
