//! CLI integration tests for pagedate
//!
//! These tests exercise the binary end to end: frontmatter extraction,
//! source priority handling, config files, and the parse debug command.

use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Get a command instance for the pagedate binary
fn pagedate_cmd() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("pagedate"))
}

fn write_post(dir: &Path, name: &str, frontmatter: &str) {
    let content = format!("---\n{}\n---\n\n# Post\n", frontmatter);
    fs::write(dir.join(name), content).unwrap();
}

fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .args(args)
        .current_dir(dir)
        .env("GIT_AUTHOR_DATE", "2024-09-09T10:00:00+0000")
        .env("GIT_COMMITTER_DATE", "2024-09-09T10:00:00+0000")
        .status()
        .expect("failed to run git");
    assert!(status.success(), "git {:?} failed", args);
}

// =============================================================================
// Resolve Tests
// =============================================================================

#[test]
fn test_resolve_reads_frontmatter_date() {
    let dir = TempDir::new().unwrap();
    write_post(dir.path(), "post.md", "date: 2024-09-09");

    pagedate_cmd()
        .current_dir(dir.path())
        .args(["resolve", "post.md", "--sources", "frontmatter"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-09-09T00:00:00"));
}

#[test]
fn test_resolve_json_output() {
    let dir = TempDir::new().unwrap();
    write_post(dir.path(), "post.md", "date: 2024-09-09\npublishDate: 2024-10-01");

    let output = pagedate_cmd()
        .current_dir(dir.path())
        .args([
            "resolve",
            "post.md",
            "--sources",
            "frontmatter",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let results: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(results[0]["path"], "post.md");
    assert_eq!(results[0]["created"], "2024-09-09T00:00:00");
    assert_eq!(results[0]["published"], "2024-10-01T00:00:00");
}

#[test]
fn test_resolve_numeric_lastmod() {
    let dir = TempDir::new().unwrap();
    write_post(dir.path(), "post.md", "lastmod: 20240909");

    pagedate_cmd()
        .current_dir(dir.path())
        .args(["resolve", "post.md", "--sources", "frontmatter"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-09-09T00:00:00"));
}

#[test]
fn test_resolve_filesystem_source_without_frontmatter() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("plain.md"), "# No frontmatter\n").unwrap();

    pagedate_cmd()
        .current_dir(dir.path())
        .args(["resolve", "plain.md", "--sources", "filesystem"])
        .assert()
        .success()
        .stdout(predicate::str::contains("plain.md"));
}

#[test]
fn test_resolve_respects_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("pagedate.toml"), "sources = [\"frontmatter\"]\n").unwrap();
    write_post(dir.path(), "post.md", "date: 2024-09-09");

    // No git repo here; succeeding proves git was never consulted
    pagedate_cmd()
        .current_dir(dir.path())
        .args(["resolve", "post.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-09-09T00:00:00"));
}

#[test]
fn test_resolve_untracked_file_warns_and_uses_filesystem() {
    let dir = TempDir::new().unwrap();
    git(dir.path(), &["init", "-q"]);
    write_post(dir.path(), "draft.md", "title: wip");

    pagedate_cmd()
        .current_dir(dir.path())
        .args(["resolve", "draft.md", "--sources", "git,filesystem"])
        .assert()
        .success()
        .stderr(predicate::str::contains("no git date available"));
}

#[test]
fn test_resolve_git_commit_date() {
    let dir = TempDir::new().unwrap();
    git(dir.path(), &["init", "-q"]);
    write_post(dir.path(), "post.md", "title: committed");
    git(dir.path(), &["add", "."]);
    git(
        dir.path(),
        &[
            "-c",
            "user.name=test",
            "-c",
            "user.email=test@example.com",
            "commit",
            "-qm",
            "add post",
        ],
    );

    pagedate_cmd()
        .current_dir(dir.path())
        .args(["resolve", "post.md", "--sources", "git", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-09-09T10:00:00+00:00"));
}

#[test]
fn test_resolve_unknown_source_fails() {
    let dir = TempDir::new().unwrap();
    write_post(dir.path(), "post.md", "date: 2024-09-09");

    pagedate_cmd()
        .current_dir(dir.path())
        .args(["resolve", "post.md", "--sources", "svn"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("svn"));
}

#[test]
fn test_resolve_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    pagedate_cmd()
        .current_dir(dir.path())
        .args(["resolve", "gone.md", "--sources", "frontmatter"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("gone.md"));
}

#[test]
fn test_resolve_malformed_date_warns_but_succeeds() {
    let dir = TempDir::new().unwrap();
    write_post(dir.path(), "post.md", "date: not a real date");

    pagedate_cmd()
        .current_dir(dir.path())
        .args(["resolve", "post.md", "--sources", "frontmatter"])
        .assert()
        .success()
        .stderr(predicate::str::contains("invalid date value"));
}

// =============================================================================
// Parse Tests
// =============================================================================

#[test]
fn test_parse_iso_date() {
    pagedate_cmd()
        .args(["parse", "2024-09-09"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-09-09T00:00:00"));
}

#[test]
fn test_parse_preserves_offset() {
    pagedate_cmd()
        .args(["parse", "2024-09-09T10:00:00+02:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-09-09T10:00:00+02:00"));
}

#[test]
fn test_parse_utc_flag_normalizes() {
    pagedate_cmd()
        .args(["parse", "--utc", "2024-09-09T10:00:00+02:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-09-09T08:00:00+00:00"));
}

#[test]
fn test_parse_rfc2822() {
    pagedate_cmd()
        .args(["parse", "Mon, 09 Sep 2024 10:00:00 +0200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-09-09T10:00:00+02:00"));
}

#[test]
fn test_parse_garbage_fails() {
    pagedate_cmd()
        .args(["parse", "definitely not a date"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse"));
}

#[test]
fn test_parse_json_output() {
    let output = pagedate_cmd()
        .args(["parse", "2024-09-09", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let result: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(result["parsed"], "2024-09-09T00:00:00");
    assert_eq!(result["offset_explicit"], false);
}
