use chrono::{DateTime, Utc};
use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `deskctl` binary.
#[derive(Debug, Parser)]
#[command(
    name = "deskctl",
    version,
    about = "CS insight desk - inquiry statistics and AI-optimization reports"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Snapshot JSON file (defaults to general.data_path)
    #[arg(short, long, global = true)]
    pub data: Option<String>,

    /// Evaluate recency labels at this RFC 3339 instant instead of now
    #[arg(long, global = true)]
    pub now: Option<DateTime<Utc>>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            data: self.data.clone(),
            now: self.now,
        }
    }
}
