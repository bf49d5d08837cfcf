//! `companies`, `setup-status`, and `setup-qna`.

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SetupQnaArgs;
use crate::context::{AppContext, load_qna_seeds};
use crate::output::output;

/// Handle `deskctl companies`.
pub fn handle_companies(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let stats = ctx.service.directory_stats()?;
    output(&stats, flags.format)
}

/// Handle `deskctl setup-status`.
pub fn handle_setup_status(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = ctx.service.setup_status()?;
    if !flags.quiet && !status.setup_complete {
        tracing::warn!(next_step = %status.next_step, "{}", status.message);
    }
    output(&status, flags.format)
}

/// Handle `deskctl setup-qna <seeds.json>`.
pub fn handle_setup_qna(
    ctx: &AppContext,
    args: &SetupQnaArgs,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let seeds = load_qna_seeds(&args.seeds, &ctx.registry)?;
    let status = ctx.service.setup_qna(seeds)?;
    ctx.persist()?;
    output(&status, flags.format)
}
