use anyhow::Context;
use fbl_core::entities::Tag;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TagCommands;
use crate::context::AppContext;
use crate::output::table::{Column, GridCell};
use crate::output::{TextView, output};

#[derive(Debug, Serialize)]
struct TagListResponse {
    tags: Vec<Tag>,
}

#[derive(Debug, Serialize)]
struct TagChangeResponse {
    action: &'static str,
    comment_id: u64,
    tag_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    assignment_id: Option<u64>,
}

impl TextView for TagListResponse {
    fn columns(&self) -> Vec<Column> {
        vec![Column::new("tag_id").numeric(), Column::new("tag_name").wide()]
    }

    fn rows(&self) -> Vec<Vec<GridCell>> {
        self.tags
            .iter()
            .map(|tag| {
                vec![
                    GridCell::plain(tag.tag_id.to_string()),
                    GridCell::plain(tag.tag_name.as_str()),
                ]
            })
            .collect()
    }
}

impl TextView for TagChangeResponse {
    fn columns(&self) -> Vec<Column> {
        vec![
            Column::new("action"),
            Column::new("comment_id").numeric(),
            Column::new("tag_id").numeric(),
            Column::new("assignment_id").numeric(),
        ]
    }

    fn rows(&self) -> Vec<Vec<GridCell>> {
        vec![vec![
            GridCell::plain(self.action),
            GridCell::plain(self.comment_id.to_string()),
            GridCell::plain(self.tag_id.to_string()),
            GridCell::plain(
                self.assignment_id
                    .map_or_else(|| "-".to_string(), |id| id.to_string()),
            ),
        ]]
    }
}

/// Handle `fbl tag`.
pub async fn handle(
    action: &TagCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TagCommands::List => {
            let catalog = ctx
                .service
                .fetch_all_tags()
                .await
                .context("failed to fetch tag lookup")?;
            let tags = catalog.iter().cloned().collect();
            output(&TagListResponse { tags }, flags.format)
        }
        TagCommands::Add { comment_id, tag_id } => {
            ctx.service
                .add_tag(*comment_id, *tag_id)
                .await
                .with_context(|| format!("failed to tag feedback {comment_id} with tag {tag_id}"))?;
            output(
                &TagChangeResponse {
                    action: "added",
                    comment_id: *comment_id,
                    tag_id: *tag_id,
                    assignment_id: None,
                },
                flags.format,
            )
        }
        TagCommands::Remove {
            comment_id,
            tag_id,
            assignment_id,
        } => {
            ctx.service
                .remove_tag(*comment_id, *tag_id, *assignment_id)
                .await
                .with_context(|| {
                    format!("failed to remove tag {tag_id} from feedback {comment_id}")
                })?;
            output(
                &TagChangeResponse {
                    action: "removed",
                    comment_id: *comment_id,
                    tag_id: *tag_id,
                    assignment_id: Some(*assignment_id),
                },
                flags.format,
            )
        }
    }
}
