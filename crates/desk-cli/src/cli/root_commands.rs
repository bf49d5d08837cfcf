use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Inquiry totals by status, urgency, and category.
    Stats,
    /// Open high-urgency inquiries.
    Urgent,
    /// Newest inquiries first.
    Recent(RecentArgs),
    /// Inquiry patterns and recommendations per industry.
    Industries,
    /// Compare one company against its industry peers.
    Benchmark(CompanyArgs),
    /// AI-optimization suggestions, highest priority first.
    Optimize,
    /// Category shares of one company's inquiries.
    Company(CompanyArgs),
    /// Mean QnA confidence per category for one company.
    #[command(name = "qna-accuracy")]
    QnaAccuracy(CompanyArgs),
    /// Company directory composition.
    Companies,
    /// Whether initial QnA setup is done.
    #[command(name = "setup-status")]
    SetupStatus,
    /// Replace the QnA set from a JSON array of seeds and save the snapshot.
    #[command(name = "setup-qna")]
    SetupQna(SetupQnaArgs),
    /// Dump JSON schema for a registered type, or list registered names.
    Schema(SchemaArgs),
}

/// Arguments for `deskctl recent`.
#[derive(Clone, Debug, Args)]
pub struct RecentArgs {
    /// Max inquiries to show (overrides the global --limit).
    #[arg(long)]
    pub limit: Option<u32>,
}

/// Arguments for commands that target one company.
#[derive(Clone, Debug, Args)]
pub struct CompanyArgs {
    pub company_id: String,
}

/// Arguments for `deskctl setup-qna`.
#[derive(Clone, Debug, Args)]
pub struct SetupQnaArgs {
    /// JSON file holding an array of `qna_seed` objects.
    pub seeds: PathBuf,
}

/// Arguments for `deskctl schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Registered schema name, e.g. `snapshot` or `benchmark_report`.
    pub type_name: Option<String>,
}
