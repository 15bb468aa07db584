//! pagedate - best-effort dates for static content pipelines
//!
//! Assigns three timestamps to a content document - created, modified,
//! published - by consulting independent evidence sources (frontmatter
//! keys, git history, filesystem stats) in a configurable priority order.
//! The first source to produce a value for a field wins; anything no
//! source can supply defaults to the current instant, so downstream
//! rendering always sees a complete record.

pub mod cli;
pub mod config;
pub mod domain;
pub mod parser;
pub mod resolver;
pub mod storage;
pub mod warn;

pub use domain::{DateSource, ParsedTimestamp, RawValue, ResolvedDates, SourcePriority};
pub use resolver::{DateResolver, DocumentContext};
