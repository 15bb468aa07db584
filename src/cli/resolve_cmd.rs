//! `pagedate resolve` - resolve dates for one or more documents

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use super::output::Output;
use crate::config::Config;
use crate::domain::{ResolvedDates, SourcePriority};
use crate::resolver::{DateResolver, DocumentContext};
use crate::storage::extract_frontmatter;

/// Resolved dates for one file, as printed.
#[derive(Debug, Serialize)]
struct FileDates {
    path: String,
    #[serde(flatten)]
    dates: ResolvedDates,
}

pub fn run(
    output: &Output,
    paths: &[PathBuf],
    sources: Option<&str>,
    config: Option<&Path>,
    cwd: Option<&Path>,
) -> Result<()> {
    let cwd = match cwd {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().context("Failed to determine working directory")?,
    };

    let priority = source_priority(sources, config, &cwd)?;
    output.verbose(&format!("source priority: {}", priority));

    let resolver = DateResolver::new(&cwd, priority);

    let mut results = Vec::with_capacity(paths.len());
    for path in paths {
        let absolute = if path.is_absolute() {
            path.clone()
        } else {
            cwd.join(path)
        };

        let text = fs::read_to_string(&absolute)
            .with_context(|| format!("Failed to read document: {}", path.display()))?;
        let (frontmatter, _body) = extract_frontmatter(&text)
            .with_context(|| format!("Failed to extract frontmatter: {}", path.display()))?;

        let mut doc = DocumentContext::new(path);
        if let Some(mapping) = frontmatter {
            doc = doc.with_frontmatter(mapping);
        }

        let dates = resolver.resolve(&doc)?;
        results.push(FileDates {
            path: path.display().to_string(),
            dates,
        });
    }

    if output.is_json() {
        output.data(&results);
    } else {
        output.row(&["FILE", "CREATED", "MODIFIED", "PUBLISHED"]);
        for result in &results {
            output.row(&[
                &result.path,
                &result.dates.created.to_string(),
                &result.dates.modified.to_string(),
                &result.dates.published.to_string(),
            ]);
        }
    }

    Ok(())
}

/// CLI flag beats config file beats built-in default.
fn source_priority(
    sources: Option<&str>,
    config: Option<&Path>,
    cwd: &Path,
) -> Result<SourcePriority> {
    if let Some(list) = sources {
        return SourcePriority::parse_list(list).context("Invalid --sources value");
    }
    let config = match config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(cwd)?,
    };
    Ok(config.sources)
}
