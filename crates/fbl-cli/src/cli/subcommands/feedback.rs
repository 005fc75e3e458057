use chrono::NaiveDate;
use clap::{Args, Subcommand};
use fbl_core::enums::SortVariant;
use fbl_core::query::{FeedbackFilters, FeedbackQuery};
use fbl_view::LimitField;

/// Feedback commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FeedbackCommands {
    /// List one page of feedback with its pager.
    List(ListArgs),
    /// Export feedback as CSV.
    Export(QueryArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub query: QueryArgs,
    /// Columns to show (comma separated). All columns when omitted.
    #[arg(long, value_delimiter = ',')]
    pub fields: Vec<LimitField>,
}

#[derive(Clone, Debug, Args)]
pub struct QueryArgs {
    #[command(flatten)]
    pub filters: FilterArgs,
    /// 0-based page.
    #[arg(long)]
    pub page: Option<u32>,
    /// newest or oldest.
    #[arg(long, default_value = "newest")]
    pub sort: SortVariant,
    /// Only feedback on content you watch.
    #[arg(long)]
    pub watch_content: bool,
}

#[derive(Clone, Debug, Args)]
pub struct FilterArgs {
    #[arg(long, value_delimiter = ',')]
    pub node_id: Vec<u64>,
    #[arg(long, value_delimiter = ',')]
    pub org_id: Vec<u64>,
    #[arg(long)]
    pub author_id: Option<u64>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub date_from: Option<NaiveDate>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub date_to: Option<NaiveDate>,
    #[arg(long)]
    pub tag_id: Option<u64>,
    #[arg(long)]
    pub info_found: Option<bool>,
}

impl QueryArgs {
    pub fn to_query(&self) -> FeedbackQuery {
        let filters = &self.filters;
        FeedbackQuery {
            filters: FeedbackFilters {
                node_id: non_empty(&filters.node_id),
                org_id: non_empty(&filters.org_id),
                author_id: filters.author_id,
                date_from: filters.date_from,
                date_to: filters.date_to,
                tag_id: filters.tag_id,
                info_found: filters.info_found,
            },
            sort: self.sort,
            page: self.page,
            watch_content: self.watch_content,
        }
    }

    /// Filters as `(key, value)` pairs for pager links.
    pub fn link_parameters(&self) -> Vec<(String, String)> {
        let filters = &self.filters;
        let join = |ids: &[u64]| {
            ids.iter()
                .map(u64::to_string)
                .collect::<Vec<_>>()
                .join(",")
        };

        let mut params = Vec::new();
        if !filters.node_id.is_empty() {
            params.push(("node_id".to_string(), join(&filters.node_id)));
        }
        if !filters.org_id.is_empty() {
            params.push(("org_id".to_string(), join(&filters.org_id)));
        }
        if let Some(author_id) = filters.author_id {
            params.push(("author_id".to_string(), author_id.to_string()));
        }
        if let Some(date) = filters.date_from {
            params.push(("date_from".to_string(), date.to_string()));
        }
        if let Some(date) = filters.date_to {
            params.push(("date_to".to_string(), date.to_string()));
        }
        if let Some(tag_id) = filters.tag_id {
            params.push(("tag_id".to_string(), tag_id.to_string()));
        }
        if let Some(info_found) = filters.info_found {
            params.push(("info_found".to_string(), u8::from(info_found).to_string()));
        }
        params.push(("sort".to_string(), self.sort.index().to_string()));
        if self.watch_content {
            params.push(("watch_content".to_string(), "1".to_string()));
        }
        params
    }
}

fn non_empty(ids: &[u64]) -> Option<Vec<u64>> {
    (!ids.is_empty()).then(|| ids.to_vec())
}
