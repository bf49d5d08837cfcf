//! `stats`, `urgent` and `recent`.

use crate::cli::root_commands::RecentArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::{output, to_ndjson};

/// Handle `deskctl stats`.
pub fn handle_stats(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let stats = ctx.service.dashboard_stats()?;
    output(&stats, flags.format)
}

/// Handle `deskctl urgent`.
pub fn handle_urgent(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let alerts = ctx.service.urgent_alerts()?;
    match flags.format {
        OutputFormat::Table => output(&alerts.inquiries, flags.format),
        OutputFormat::Json | OutputFormat::Raw => output(&alerts, flags.format),
    }
}

/// Handle `deskctl recent`.
pub fn handle_recent(ctx: &AppContext, args: &RecentArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(
        args.limit,
        flags.limit,
        ctx.service.config().general.recent_limit,
    );
    let recent = ctx.service.recent_inquiries(Some(limit as usize))?;

    match flags.format {
        OutputFormat::Raw => {
            print!("{}", to_ndjson(&recent)?);
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Table => output(&recent, flags.format),
    }
}
