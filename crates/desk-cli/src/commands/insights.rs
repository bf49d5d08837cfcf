//! `industries`, `benchmark`, `optimize`, `company` and `qna-accuracy`.

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CompanyArgs;
use crate::commands::shared::limit::apply_global_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `deskctl industries`.
pub fn handle_industries(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut insights = ctx.service.industry_analysis()?;
    apply_global_limit(&mut insights, flags.limit);
    output(&insights, flags.format)
}

/// Handle `deskctl benchmark <company_id>`.
pub fn handle_benchmark(ctx: &AppContext, args: &CompanyArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = ctx.service.company_benchmark(&args.company_id)?;
    output(&report, flags.format)
}

/// Handle `deskctl optimize`.
pub fn handle_optimize(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut suggestions = ctx.service.ai_optimization_suggestions()?;
    apply_global_limit(&mut suggestions, flags.limit);
    output(&suggestions, flags.format)
}

/// Handle `deskctl company <company_id>`.
pub fn handle_company(ctx: &AppContext, args: &CompanyArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let analysis = ctx.service.company_analysis(&args.company_id)?;
    output(&analysis, flags.format)
}

/// Handle `deskctl qna-accuracy <company_id>`.
pub fn handle_qna_accuracy(
    ctx: &AppContext,
    args: &CompanyArgs,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let report = ctx.service.qna_accuracy(&args.company_id)?;
    output(&report, flags.format)
}
