//! Label lookup.

use fbl_core::entities::{Label, LabelLookupEntry, labels_from_lookup};
use reqwest::Method;

use crate::tags::LookupPayload;
use crate::{FeedbackApiError, FeedbackClient};

impl FeedbackClient {
    /// Fetch all labels, ordered alphabetically by name.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackApiError::NotFound`] if the request fails or the
    /// response cannot be decoded.
    pub async fn fetch_all_labels(&self) -> Result<Vec<Label>, FeedbackApiError> {
        let payload: LookupPayload<LabelLookupEntry> = self
            .send_json::<(), _>(Method::GET, &self.endpoints.labels, None)
            .await
            .map_err(crate::http::RequestFailure::into_not_found)?;
        Ok(labels_from_lookup(payload.into_entries()))
    }
}
