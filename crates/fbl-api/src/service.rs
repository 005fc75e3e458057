//! Reviewer-scoped facade over the client and the watched-content source.
//!
//! The service resolves the reviewer's account id and watched content before
//! anything reaches the wire, so `FeedbackClient` stays a plain endpoint
//! wrapper.

use fbl_core::entities::{Label, TagCatalog};
use fbl_core::enums::TitleOrder;
use fbl_core::query::{FeedbackQuery, FeedbackRequest};
use fbl_core::responses::FeedbackPage;
use fbl_core::watched::{WatchedContentSource, scope_to_watched};

use crate::{FeedbackApiError, FeedbackClient};

/// Feedback operations on behalf of one reviewer.
pub struct FeedbackService<W> {
    client: FeedbackClient,
    watched: W,
    reviewer_uid: u64,
    flag_id: String,
}

impl<W> FeedbackService<W>
where
    W: WatchedContentSource + Sync,
{
    pub fn new(
        client: FeedbackClient,
        watched: W,
        reviewer_uid: u64,
        flag_id: impl Into<String>,
    ) -> Self {
        Self {
            client,
            watched,
            reviewer_uid,
            flag_id: flag_id.into(),
        }
    }

    #[must_use]
    pub const fn client(&self) -> &FeedbackClient {
        &self.client
    }

    #[must_use]
    pub const fn watched(&self) -> &W {
        &self.watched
    }

    #[must_use]
    pub const fn reviewer_uid(&self) -> u64 {
        self.reviewer_uid
    }

    /// Fetch one page of feedback for `query`.
    ///
    /// API failures are swallowed into an empty page. When the query is scoped
    /// to watched content and the reviewer watches nothing, the page reports
    /// `is_watching_content = false`.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackApiError::Core`] when the watched-content lookup fails.
    pub async fn fetch_feedback(
        &self,
        query: FeedbackQuery,
    ) -> Result<FeedbackPage, FeedbackApiError> {
        let (request, watching) = self.scoped_request(query).await?;
        let mut page = self.client.fetch_feedback(&request).await;
        page.is_watching_content &= watching;
        Ok(page)
    }

    /// Export the feedback matching `query` as CSV. Pagination still applies.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackApiError::Core`] when the watched-content lookup fails.
    pub async fn export_feedback_csv(
        &self,
        query: FeedbackQuery,
    ) -> Result<String, FeedbackApiError> {
        let request = self.prepare_request(query).await?;
        Ok(self.client.export_feedback_csv(&request).await)
    }

    /// Tags visible to the reviewer, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackApiError::NotFound`] if the request fails.
    pub async fn fetch_all_tags(&self) -> Result<TagCatalog, FeedbackApiError> {
        self.client.fetch_all_tags(self.reviewer_uid).await
    }

    /// All labels, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackApiError::NotFound`] if the request fails.
    pub async fn fetch_all_labels(&self) -> Result<Vec<Label>, FeedbackApiError> {
        self.client.fetch_all_labels().await
    }

    /// # Errors
    ///
    /// Returns [`FeedbackApiError::NotFound`] if the request fails.
    pub async fn add_tag(&self, comment_id: u64, tag_id: u64) -> Result<(), FeedbackApiError> {
        self.client.add_tag(comment_id, tag_id, self.reviewer_uid).await
    }

    /// # Errors
    ///
    /// Returns [`FeedbackApiError::NotFound`] if the request fails.
    pub async fn remove_tag(
        &self,
        comment_id: u64,
        tag_id: u64,
        assignment_id: u64,
    ) -> Result<(), FeedbackApiError> {
        self.client
            .remove_tag(comment_id, tag_id, assignment_id, self.reviewer_uid)
            .await
    }

    /// Node ids the reviewer watches under the configured flag.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackApiError::Core`] when the lookup fails.
    pub async fn fetch_flagged_content(
        &self,
        order: TitleOrder,
    ) -> Result<Vec<u64>, FeedbackApiError> {
        Ok(self
            .watched
            .fetch_flagged_content(&self.flag_id, self.reviewer_uid, order)
            .await?)
    }

    /// Resolve paging and watched-content scoping into a wire request.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackApiError::Core`] when the lookup fails.
    pub async fn prepare_request(
        &self,
        query: FeedbackQuery,
    ) -> Result<FeedbackRequest, FeedbackApiError> {
        Ok(self.scoped_request(query).await?.0)
    }

    /// The wire request, and whether the reviewer watches any of the content
    /// it was scoped to. Unscoped queries always count as watching.
    async fn scoped_request(
        &self,
        mut query: FeedbackQuery,
    ) -> Result<(FeedbackRequest, bool), FeedbackApiError> {
        let mut watching = true;
        if query.watch_content {
            let watched = self.fetch_flagged_content(TitleOrder::Asc).await?;
            tracing::debug!(watched = watched.len(), "scoping feedback to watched content");
            watching = !watched.is_empty();
            scope_to_watched(&mut query.filters, &watched);
        }
        Ok((query.into_request(self.client.per_page())?, watching))
    }
}
