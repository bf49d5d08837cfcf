use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Stats => commands::dashboard::handle_stats(ctx, flags),
        Commands::Urgent => commands::dashboard::handle_urgent(ctx, flags),
        Commands::Recent(args) => commands::dashboard::handle_recent(ctx, args, flags),
        Commands::Industries => commands::insights::handle_industries(ctx, flags),
        Commands::Benchmark(args) => commands::insights::handle_benchmark(ctx, args, flags),
        Commands::Optimize => commands::insights::handle_optimize(ctx, flags),
        Commands::Company(args) => commands::insights::handle_company(ctx, args, flags),
        Commands::QnaAccuracy(args) => commands::insights::handle_qna_accuracy(ctx, args, flags),
        Commands::Companies => commands::directory::handle_companies(ctx, flags),
        Commands::SetupStatus => commands::directory::handle_setup_status(ctx, flags),
        Commands::SetupQna(args) => commands::directory::handle_setup_qna(ctx, args, flags),
        Commands::Schema(args) => commands::schema::handle(args, flags),
    }
}
