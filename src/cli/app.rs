//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{parse_cmd, resolve_cmd};

#[derive(Parser)]
#[command(name = "pagedate")]
#[command(author, version, about = "Best-effort dates for static content pipelines")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve created/modified/published dates for documents
    Resolve {
        /// Markdown files to resolve
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Comma-separated source priority (frontmatter,git,filesystem);
        /// overrides the config file
        #[arg(long)]
        sources: Option<String>,

        /// Path to a config file (default: pagedate.toml in the working
        /// directory)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Working directory for relative paths and repository discovery
        #[arg(long)]
        cwd: Option<PathBuf>,
    },

    /// Parse a single date value and print the result
    Parse {
        /// The raw value to parse
        value: String,

        /// Normalize explicit offsets to UTC instead of preserving them
        #[arg(long)]
        utc: bool,
    },
}

/// Parses arguments and runs the selected command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    match cli.command {
        Commands::Resolve {
            paths,
            sources,
            config,
            cwd,
        } => resolve_cmd::run(
            &output,
            &paths,
            sources.as_deref(),
            config.as_deref(),
            cwd.as_deref(),
        ),
        Commands::Parse { value, utc } => parse_cmd::run(&output, &value, utc),
    }
}
