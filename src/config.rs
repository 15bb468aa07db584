//! Configuration handling for pagedate
//!
//! Configuration lives in `pagedate.toml` next to the content:
//!
//! ```toml
//! sources = ["frontmatter", "git", "filesystem"]
//! ```
//!
//! Every field has a default, so a missing file or an empty file both mean
//! "default behavior".

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::SourcePriority;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "pagedate.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Ordered list of date sources to consult.
    pub sources: SourcePriority,
}

impl Config {
    /// Loads configuration from an explicit path.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Loads `pagedate.toml` from `dir` when present, otherwise defaults.
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DateSource;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_or_default(dir.path()).unwrap();
        assert_eq!(config.sources, SourcePriority::default());
    }

    #[test]
    fn empty_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "").unwrap();
        let config = Config::load_or_default(dir.path()).unwrap();
        assert_eq!(config.sources, SourcePriority::default());
    }

    #[test]
    fn sources_are_read_in_order() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "sources = [\"filesystem\", \"frontmatter\"]\n",
        )
        .unwrap();
        let config = Config::load_or_default(dir.path()).unwrap();
        assert_eq!(
            config.sources,
            SourcePriority::new(vec![DateSource::Filesystem, DateSource::Frontmatter])
        );
    }

    #[test]
    fn unknown_source_name_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "sources = [\"svn\"]\n").unwrap();
        let err = Config::load_or_default(dir.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("svn"));
    }
}
