//! Scoping feedback queries to content a reviewer watches.

use std::future::Future;

use crate::enums::TitleOrder;
use crate::errors::CoreError;
use crate::query::FeedbackFilters;

/// Flag id the CMS uses for "watch this content".
pub const DEFAULT_FLAG_ID: &str = "watch_content";

/// Source of the node ids a user has flagged.
pub trait WatchedContentSource {
    /// Node ids flagged with `flag_id` by account `uid`, ordered by node title.
    fn fetch_flagged_content(
        &self,
        flag_id: &str,
        uid: u64,
        order: TitleOrder,
    ) -> impl Future<Output = Result<Vec<u64>, CoreError>> + Send;
}

impl<T> WatchedContentSource for Option<T>
where
    T: WatchedContentSource + Sync,
{
    async fn fetch_flagged_content(
        &self,
        flag_id: &str,
        uid: u64,
        order: TitleOrder,
    ) -> Result<Vec<u64>, CoreError> {
        match self {
            Some(source) => source.fetch_flagged_content(flag_id, uid, order).await,
            None => Err(CoreError::WatchedContent(
                "no watched-content source is configured".to_string(),
            )),
        }
    }
}

/// Narrow the node filter to watched content.
///
/// Without a node filter, the watched ids become the filter. With one, only
/// requested ids that are also watched survive, in the requested order. Other
/// filters (`org_id`, `author_id`, ...) are left alone.
pub fn scope_to_watched(filters: &mut FeedbackFilters, watched: &[u64]) {
    let scoped = match filters.node_id.take() {
        None => watched.to_vec(),
        Some(requested) => requested
            .into_iter()
            .filter(|id| watched.contains(id))
            .collect(),
    };
    filters.node_id = Some(scoped);
}
