//! Version-control date source
//!
//! Queries go through the `git` binary rather than an embedded library, so
//! whatever repository layout the user has (worktrees, submodules, sparse
//! checkouts) behaves exactly as their own git does.

use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

/// Errors from the git source. `Clone` because the discovery result is
/// cached for the life of the process and re-reported to every caller.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GitError {
    #[error("Failed to run git: {0}")]
    Spawn(String),

    #[error("Not inside a git repository: {0}")]
    NotARepository(String),

    #[error("No commit history for '{0}' (untracked or never committed)")]
    Untracked(String),

    #[error("Unexpected git output: '{0}'")]
    BadOutput(String),
}

/// A discovered repository, identified by its top-level directory.
#[derive(Debug, Clone)]
pub struct GitRepo {
    root: PathBuf,
}

impl GitRepo {
    /// Walks upward from `cwd` to the enclosing repository. `git rev-parse`
    /// handles nested worktrees and submodules for us.
    pub fn discover(cwd: &Path) -> Result<Self, GitError> {
        let output = Command::new("git")
            .args(["rev-parse", "--show-toplevel"])
            .current_dir(cwd)
            .output()
            .map_err(|e| GitError::Spawn(e.to_string()))?;

        if !output.status.success() {
            return Err(GitError::NotARepository(cwd.display().to_string()));
        }

        let root = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if root.is_empty() {
            return Err(GitError::BadOutput(
                "rev-parse --show-toplevel printed nothing".to_string(),
            ));
        }

        Ok(Self {
            root: PathBuf::from(root),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Millisecond epoch of the most recent commit touching `path`.
    /// Untracked or never-committed paths are an error the caller degrades
    /// to a warning.
    pub fn last_commit_ms(&self, path: &Path) -> Result<i64, GitError> {
        let output = Command::new("git")
            .args(["log", "-1", "--format=%ct", "--"])
            .arg(path)
            .current_dir(&self.root)
            .output()
            .map_err(|e| GitError::Spawn(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(GitError::BadOutput(stderr));
        }

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if stdout.is_empty() {
            return Err(GitError::Untracked(path.display().to_string()));
        }

        let seconds: i64 = stdout
            .parse()
            .map_err(|_| GitError::BadOutput(stdout.clone()))?;

        Ok(seconds * 1000)
    }
}
