//! Date source identifiers and priority ordering
//!
//! Resolution consults sources in the order the user configured them; the
//! first source to produce a value for a field wins. The default order is
//! `frontmatter, git, filesystem`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SourceError {
    #[error("Unknown date source '{0}' (expected frontmatter, git, or filesystem)")]
    Unknown(String),
}

/// One evidence source for document dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DateSource {
    /// Keys declared in the document's frontmatter mapping.
    Frontmatter,
    /// The file's most recent commit in version-control history.
    Git,
    /// Birth/modification times from the storage layer.
    Filesystem,
}

impl DateSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateSource::Frontmatter => "frontmatter",
            DateSource::Git => "git",
            DateSource::Filesystem => "filesystem",
        }
    }
}

impl fmt::Display for DateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateSource {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "frontmatter" => Ok(DateSource::Frontmatter),
            "git" => Ok(DateSource::Git),
            "filesystem" => Ok(DateSource::Filesystem),
            other => Err(SourceError::Unknown(other.to_string())),
        }
    }
}

impl TryFrom<String> for DateSource {
    type Error = SourceError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<DateSource> for String {
    fn from(source: DateSource) -> Self {
        source.as_str().to_string()
    }
}

/// An ordered list of sources to consult. Order determines precedence;
/// duplicates are harmless because a later occurrence can never overwrite
/// a field the first one filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourcePriority(Vec<DateSource>);

impl SourcePriority {
    pub fn new(sources: Vec<DateSource>) -> Self {
        Self(sources)
    }

    /// Parses a comma-separated list, e.g. `git,frontmatter`.
    pub fn parse_list(list: &str) -> Result<Self, SourceError> {
        list.split(',')
            .filter(|part| !part.trim().is_empty())
            .map(DateSource::from_str)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn iter(&self) -> impl Iterator<Item = DateSource> + '_ {
        self.0.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for SourcePriority {
    fn default() -> Self {
        Self(vec![
            DateSource::Frontmatter,
            DateSource::Git,
            DateSource::Filesystem,
        ])
    }
}

impl fmt::Display for SourcePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(|s| s.as_str()).collect();
        f.write_str(&names.join(","))
    }
}
