//! File-format handling
//!
//! The resolver itself never reads document bodies; this module is the thin
//! input layer the CLI uses to turn a markdown file into a
//! [`DocumentContext`](crate::resolver::DocumentContext).

pub mod markdown;

pub use markdown::extract_frontmatter;
