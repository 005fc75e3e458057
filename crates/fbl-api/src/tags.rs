//! Tag lookup and tag assignment.

use std::collections::BTreeMap;

use fbl_core::entities::{TagCatalog, TagLookupEntry};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{FeedbackApiError, FeedbackClient};

/// Lookup endpoints answer with a list, or with an object keyed by id.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum LookupPayload<T> {
    List(Vec<T>),
    Keyed(BTreeMap<String, T>),
}

impl<T> LookupPayload<T> {
    pub(crate) fn into_entries(self) -> Vec<T> {
        match self {
            Self::List(entries) => entries,
            Self::Keyed(map) => map.into_values().collect(),
        }
    }
}

#[derive(Serialize)]
struct TagLookupBody {
    author_id: u64,
}

#[derive(Serialize)]
struct AddTagBody {
    comment_id: u64,
    tag_id: u64,
    author_id: u64,
}

#[derive(Serialize)]
struct RemoveTagBody {
    comment_id: u64,
    tag_id: u64,
    id: u64,
    author_id: u64,
}

impl FeedbackClient {
    /// Fetch every tag visible to `author_id`, ordered alphabetically by name.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackApiError::NotFound`] if the request fails or the
    /// response cannot be decoded.
    pub async fn fetch_all_tags(&self, author_id: u64) -> Result<TagCatalog, FeedbackApiError> {
        let payload: LookupPayload<TagLookupEntry> = self
            .send_json(
                Method::GET,
                &self.endpoints.tag_lookup,
                Some(&TagLookupBody { author_id }),
            )
            .await
            .map_err(crate::http::RequestFailure::into_not_found)?;
        Ok(TagCatalog::from_lookup(payload.into_entries()))
    }

    /// Attach a tag to a feedback comment.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackApiError::NotFound`] if the request fails.
    pub async fn add_tag(
        &self,
        comment_id: u64,
        tag_id: u64,
        author_id: u64,
    ) -> Result<(), FeedbackApiError> {
        let body = AddTagBody {
            comment_id,
            tag_id,
            author_id,
        };
        self.send(Method::POST, &self.endpoints.tags, Some(&body))
            .await
            .map_err(crate::http::RequestFailure::into_not_found)?;
        tracing::info!(comment_id, tag_id, "tag added");
        Ok(())
    }

    /// Detach a tag from a feedback comment.
    ///
    /// `assignment_id` is the per-feedback id of the tag assignment.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackApiError::NotFound`] if the request fails.
    pub async fn remove_tag(
        &self,
        comment_id: u64,
        tag_id: u64,
        assignment_id: u64,
        author_id: u64,
    ) -> Result<(), FeedbackApiError> {
        let body = RemoveTagBody {
            comment_id,
            tag_id,
            id: assignment_id,
            author_id,
        };
        self.send(Method::DELETE, &self.endpoints.tags, Some(&body))
            .await
            .map_err(crate::http::RequestFailure::into_not_found)?;
        tracing::info!(comment_id, tag_id, assignment_id, "tag removed");
        Ok(())
    }
}
