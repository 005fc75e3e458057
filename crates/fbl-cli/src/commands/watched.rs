use std::collections::HashMap;

use anyhow::Context;
use fbl_core::enums::TitleOrder;
use fbl_core::watched::WatchedContentSource;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::WatchedArgs;
use crate::context::AppContext;
use crate::output::table::{Column, GridCell, Tone};
use crate::output::{TextView, output};

#[derive(Debug, Serialize)]
struct WatchedResponse {
    flag_id: String,
    uid: u64,
    order: TitleOrder,
    nodes: Vec<WatchedNode>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct WatchedNode {
    nid: u64,
    title: Option<String>,
}

impl TextView for WatchedResponse {
    fn columns(&self) -> Vec<Column> {
        vec![Column::new("nid").numeric(), Column::new("title").wide()]
    }

    fn rows(&self) -> Vec<Vec<GridCell>> {
        self.nodes
            .iter()
            .map(|node| {
                let title = node.title.as_deref().map_or_else(
                    || GridCell::toned("(untitled)", Tone::Muted),
                    GridCell::plain,
                );
                vec![GridCell::plain(node.nid.to_string()), title]
            })
            .collect()
    }
}

/// Handle `fbl watched`.
pub async fn handle(
    args: &WatchedArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let flag_id = args
        .flag_id
        .clone()
        .unwrap_or_else(|| ctx.config.cms.flag_id.clone());
    let uid = ctx.service.reviewer_uid();
    let watched = ctx.service.watched();

    let ids = watched
        .fetch_flagged_content(&flag_id, uid, args.order)
        .await
        .context("failed to look up watched content (is cms.database_path set?)")?;

    let titles = match watched {
        Some(db) => db.node_titles(&ids).await.unwrap_or_else(|error| {
            tracing::warn!(%error, "failed to look up node titles");
            HashMap::new()
        }),
        None => HashMap::new(),
    };

    output(
        &WatchedResponse {
            flag_id,
            uid,
            order: args.order,
            nodes: watched_nodes(&ids, titles),
        },
        flags.format,
    )
}

fn watched_nodes(ids: &[u64], mut titles: HashMap<u64, String>) -> Vec<WatchedNode> {
    ids.iter()
        .map(|nid| WatchedNode {
            nid: *nid,
            title: titles.remove(nid),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use fbl_core::enums::TitleOrder;

    use super::{TextView, WatchedNode, WatchedResponse, watched_nodes};
    use crate::output::table::Tone;

    #[test]
    fn nodes_keep_lookup_order() {
        let titles = HashMap::from([(3, "Alpha".to_string()), (1, "Beta".to_string())]);
        let nodes = watched_nodes(&[3, 1, 8], titles);
        assert_eq!(
            nodes,
            vec![
                WatchedNode {
                    nid: 3,
                    title: Some("Alpha".into())
                },
                WatchedNode {
                    nid: 1,
                    title: Some("Beta".into())
                },
                WatchedNode { nid: 8, title: None },
            ]
        );
    }

    #[test]
    fn untitled_nodes_are_muted() {
        let response = WatchedResponse {
            flag_id: "watch_content".into(),
            uid: 8,
            order: TitleOrder::Asc,
            nodes: watched_nodes(&[4], HashMap::new()),
        };
        let rows = response.rows();
        assert_eq!(rows[0][0].text, "4");
        assert_eq!(rows[0][1].text, "(untitled)");
        assert_eq!(rows[0][1].tone, Tone::Muted);
    }
}
