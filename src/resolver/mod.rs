//! Priority-driven date resolution
//!
//! For each document, sources are visited in the configured order and each
//! of the three date fields keeps the first value any source produced for
//! it. Sources never overwrite a field an earlier source filled. Whatever
//! is still empty after the last source defaults to the current instant,
//! so the resolved record is always complete.
//!
//! One `DateResolver` serves a whole pipeline run: the git repository is
//! discovered at most once (the `OnceLock` makes concurrent resolutions
//! race to a single discovery) and every document reuses the handle.

mod filesystem;
mod frontmatter;
mod git;

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use anyhow::Result;

use crate::domain::{DateSource, ParsedTimestamp, ResolvedDates, SourcePriority};
use crate::warn::{StderrSink, WarningSink};

pub use git::{GitError, GitRepo};

/// The per-document input to resolution: where the file lives and whatever
/// frontmatter the pipeline extracted for it.
#[derive(Debug, Clone)]
pub struct DocumentContext {
    /// File path, absolute or relative to the resolver's working directory.
    pub path: PathBuf,
    /// Frontmatter mapping, when the document has one.
    pub frontmatter: Option<serde_yaml::Mapping>,
}

impl DocumentContext {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            frontmatter: None,
        }
    }

    pub fn with_frontmatter(mut self, frontmatter: serde_yaml::Mapping) -> Self {
        self.frontmatter = Some(frontmatter);
        self
    }
}

/// First-writer-wins accumulators for the three date fields.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Accumulators {
    pub created: Option<ParsedTimestamp>,
    pub modified: Option<ParsedTimestamp>,
    pub published: Option<ParsedTimestamp>,
}

/// Resolves document dates against an ordered list of sources.
pub struct DateResolver {
    cwd: PathBuf,
    priority: SourcePriority,
    sink: Arc<dyn WarningSink>,
    repo: OnceLock<Result<GitRepo, GitError>>,
}

impl DateResolver {
    /// A resolver rooted at `cwd`, warning to stderr.
    pub fn new(cwd: impl Into<PathBuf>, priority: SourcePriority) -> Self {
        Self::with_sink(cwd, priority, Arc::new(StderrSink))
    }

    /// A resolver with a custom warning sink.
    pub fn with_sink(
        cwd: impl Into<PathBuf>,
        priority: SourcePriority,
        sink: Arc<dyn WarningSink>,
    ) -> Self {
        Self {
            cwd: cwd.into(),
            priority,
            sink,
            repo: OnceLock::new(),
        }
    }

    /// Resolves the three dates for one document.
    ///
    /// Per-source failures (unparsable values, untracked files) degrade to
    /// a warning and the next source. Only two things are fatal: a failing
    /// stat when the filesystem source runs, and failing repository
    /// discovery when the git source is actually consulted.
    pub fn resolve(&self, doc: &DocumentContext) -> Result<ResolvedDates> {
        let path = if doc.path.is_absolute() {
            doc.path.clone()
        } else {
            self.cwd.join(&doc.path)
        };
        // Warnings keep the path spelling the caller used
        let label = doc.path.display().to_string();

        let mut dates = Accumulators::default();

        for source in self.priority.iter() {
            match source {
                DateSource::Frontmatter => {
                    if let Some(mapping) = &doc.frontmatter {
                        frontmatter::fill(&label, mapping, &mut dates, self.sink.as_ref());
                    }
                }
                DateSource::Git => {
                    // Git only ever supplies the modification date
                    if dates.modified.is_some() {
                        continue;
                    }
                    let repo = self.repo()?;
                    match repo.last_commit_ms(&path) {
                        Ok(ms) => dates.modified = ParsedTimestamp::from_epoch_ms(ms),
                        Err(e) => {
                            self.sink
                                .warn(&format!("{}: no git date available ({})", label, e));
                        }
                    }
                }
                DateSource::Filesystem => {
                    let times = filesystem::stat(&path)?;
                    if dates.created.is_none() {
                        dates.created = times.birth_ms.and_then(ParsedTimestamp::from_epoch_ms);
                    }
                    if dates.modified.is_none() {
                        dates.modified = ParsedTimestamp::from_epoch_ms(times.modified_ms);
                    }
                }
            }
        }

        Ok(ResolvedDates {
            created: dates.created.unwrap_or_else(ParsedTimestamp::now),
            modified: dates.modified.unwrap_or_else(ParsedTimestamp::now),
            published: dates.published.unwrap_or_else(ParsedTimestamp::now),
        })
    }

    /// The shared repository handle, discovered on first use. The discovery
    /// outcome (including failure) is cached for the process lifetime.
    fn repo(&self) -> Result<&GitRepo, GitError> {
        self.repo
            .get_or_init(|| GitRepo::discover(&self.cwd))
            .as_ref()
            .map_err(Clone::clone)
    }
}
