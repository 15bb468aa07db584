//! # Command-Line Interface
//!
//! User-facing commands and output formatting.
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `resolve` | Resolve created/modified/published dates for documents |
//! | `parse` | Run one raw value through the date parser |
//!
//! All commands support `--format text|json` and `--verbose`. Call
//! [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod parse_cmd;
mod resolve_cmd;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
