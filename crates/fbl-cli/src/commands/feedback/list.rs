use std::collections::{BTreeSet, HashMap};

use anyhow::Context;
use fbl_config::CmsConfig;
use fbl_core::entities::FeedbackRecord;
use fbl_view::{SourcePage, build_feedback_table, build_pager};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ListArgs;
use crate::context::AppContext;
use crate::output::feedback::{FeedbackListResponse, output_feedback};

pub async fn run(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let query = args.query.to_query();

    let tags = ctx
        .service
        .fetch_all_tags()
        .await
        .context("failed to fetch tag lookup")?;

    let page = ctx.service.fetch_feedback(query).await?;
    let sources = lookup_sources(ctx, &page.results).await;

    let table = build_feedback_table(
        &page.results,
        &tags,
        page.is_watching_content,
        &args.fields,
        &sources,
        &ctx.config.cms.watched_content_url(),
    );
    let pager = build_pager(
        page.total,
        page.per_page,
        u64::from(args.query.page.unwrap_or(0)),
        &args.query.link_parameters(),
    );

    output_feedback(
        &FeedbackListResponse {
            total: page.total,
            per_page: page.per_page,
            table,
            pager,
        },
        flags.format,
    )
}

/// Titles and links for the nodes on this page. Without a CMS database the
/// table falls back to bare node ids.
async fn lookup_sources(
    ctx: &AppContext,
    results: &[FeedbackRecord],
) -> HashMap<u64, SourcePage> {
    let Some(db) = ctx.service.watched() else {
        return HashMap::new();
    };

    let ids = node_ids(results);
    match db.node_titles(&ids).await {
        Ok(titles) => source_pages(titles, &ctx.config.cms),
        Err(error) => {
            tracing::warn!(%error, "failed to look up source page titles");
            HashMap::new()
        }
    }
}

fn node_ids(results: &[FeedbackRecord]) -> Vec<u64> {
    results
        .iter()
        .filter_map(|feedback| feedback.node_id)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn source_pages(titles: HashMap<u64, String>, cms: &CmsConfig) -> HashMap<u64, SourcePage> {
    titles
        .into_iter()
        .map(|(nid, title)| {
            let url = cms.node_url(nid).unwrap_or_else(|| format!("/node/{nid}"));
            (nid, SourcePage { title, url })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use fbl_config::CmsConfig;
    use fbl_core::entities::FeedbackRecord;
    use pretty_assertions::assert_eq;

    use super::{node_ids, source_pages};

    #[test]
    fn node_ids_are_unique_and_sorted() {
        let results = [Some(9), None, Some(2), Some(9)]
            .into_iter()
            .map(|node_id| FeedbackRecord {
                node_id,
                ..FeedbackRecord::default()
            })
            .collect::<Vec<_>>();
        assert_eq!(node_ids(&results), vec![2, 9]);
    }

    #[test]
    fn source_pages_link_to_site_or_bare_path() {
        let titles = HashMap::from([(5, "Renew a license".to_string())]);

        let pages = source_pages(titles.clone(), &CmsConfig::default());
        assert_eq!(pages[&5].url, "/node/5");
        assert_eq!(pages[&5].title, "Renew a license");

        let cms = CmsConfig {
            site_base_url: "https://www.example.gov".to_string(),
            ..CmsConfig::default()
        };
        let pages = source_pages(titles, &cms);
        assert_eq!(pages[&5].url, "https://www.example.gov/node/5");
    }
}
