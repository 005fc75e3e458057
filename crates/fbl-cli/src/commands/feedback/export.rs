use std::io::Write;

use anyhow::Context;

use crate::cli::subcommands::QueryArgs;
use crate::context::AppContext;

/// Write the CSV export to stdout as the API returned it.
pub async fn run(args: &QueryArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let csv = ctx.service.export_feedback_csv(args.to_query()).await?;
    if csv.is_empty() {
        tracing::warn!("feedback export returned no data");
        return Ok(());
    }

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(csv.as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write CSV export")
}
