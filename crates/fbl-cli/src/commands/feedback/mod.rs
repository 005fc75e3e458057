mod export;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FeedbackCommands;
use crate::context::AppContext;

/// Handle `fbl feedback`.
pub async fn handle(
    action: &FeedbackCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        FeedbackCommands::List(args) => list::run(args, ctx, flags).await,
        FeedbackCommands::Export(args) => export::run(args, ctx).await,
    }
}
