use anyhow::Context;
use fbl_core::entities::Label;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::LabelCommands;
use crate::context::AppContext;
use crate::output::table::{Column, GridCell};
use crate::output::{TextView, output};

#[derive(Debug, Serialize)]
struct LabelListResponse {
    labels: Vec<Label>,
}

impl TextView for LabelListResponse {
    fn columns(&self) -> Vec<Column> {
        vec![Column::new("label_id").numeric(), Column::new("label_name").wide()]
    }

    fn rows(&self) -> Vec<Vec<GridCell>> {
        self.labels
            .iter()
            .map(|label| {
                vec![
                    GridCell::plain(label.label_id.to_string()),
                    GridCell::plain(label.label_name.as_str()),
                ]
            })
            .collect()
    }
}

/// Handle `fbl label`.
pub async fn handle(
    action: &LabelCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        LabelCommands::List => {
            let labels = ctx
                .service
                .fetch_all_labels()
                .await
                .context("failed to fetch labels")?;
            output(&LabelListResponse { labels }, flags.format)
        }
    }
}
