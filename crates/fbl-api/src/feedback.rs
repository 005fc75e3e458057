//! Feedback listing and CSV export.
//!
//! Both swallow API failures: the listing returns an empty page and the
//! export an empty body. The failure is still logged with the request
//! parameters.

use fbl_core::entities::FeedbackRecord;
use fbl_core::lenient::{id_from_any, opt_id_from_any};
use fbl_core::query::FeedbackRequest;
use fbl_core::responses::FeedbackPage;
use reqwest::Method;
use serde::Deserialize;

use crate::FeedbackClient;
use crate::http::RequestFailure;

/// `feedback/` response body. Empty entries in `results` are skipped.
#[derive(Debug, Deserialize)]
struct FeedbackResponse {
    #[serde(default)]
    results: Vec<Option<FeedbackRecord>>,
    #[serde(default, deserialize_with = "id_from_any")]
    total: u64,
    #[serde(default, deserialize_with = "opt_id_from_any")]
    per_page: Option<u64>,
}

impl FeedbackResponse {
    fn into_page(self, requested_per_page: u32) -> FeedbackPage {
        FeedbackPage {
            results: self.results.into_iter().flatten().collect(),
            total: self.total,
            per_page: self
                .per_page
                .and_then(|p| u32::try_from(p).ok())
                .filter(|p| *p > 0)
                .unwrap_or(requested_per_page),
            is_watching_content: true,
        }
    }
}

impl FeedbackClient {
    /// Fetch one page of feedback.
    ///
    /// Never fails: on any API error the failure is logged and an empty page
    /// with `total = 0` is returned.
    pub async fn fetch_feedback(&self, request: &FeedbackRequest) -> FeedbackPage {
        match self
            .send_json::<_, FeedbackResponse>(Method::GET, &self.endpoints.feedback, Some(request))
            .await
        {
            Ok(response) => response.into_page(request.per_page),
            Err(failure) => {
                log_swallowed(&failure, request);
                FeedbackPage::empty(request.per_page)
            }
        }
    }

    /// Fetch the feedback matching `request` as CSV.
    ///
    /// Never fails: on any API error the failure is logged and an empty body
    /// is returned.
    pub async fn export_feedback_csv(&self, request: &FeedbackRequest) -> String {
        let request = request.clone().as_csv();
        match self
            .send_text(Method::GET, &self.endpoints.feedback, Some(&request))
            .await
        {
            Ok(body) => body,
            Err(failure) => {
                log_swallowed(&failure, &request);
                String::new()
            }
        }
    }
}

fn log_swallowed(failure: &RequestFailure, request: &FeedbackRequest) {
    let params = serde_json::to_string(request).unwrap_or_default();
    tracing::error!(
        method = %failure.method,
        url = %failure.url,
        error = %failure.error,
        %params,
        "feedback API returned an error; answering with an empty result"
    );
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn response_skips_empty_rows_and_keeps_api_per_page() {
        let response: FeedbackResponse = serde_json::from_str(
            r#"{"results": [{"id": 1}, null, {"id": 2}], "total": "42", "per_page": 10}"#,
        )
        .unwrap();
        let page = response.into_page(20);
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.total, 42);
        assert_eq!(page.per_page, 10);
        assert!(page.is_watching_content);
    }

    #[test]
    fn missing_per_page_falls_back_to_requested() {
        let response: FeedbackResponse =
            serde_json::from_str(r#"{"results": [], "total": 0}"#).unwrap();
        assert_eq!(response.into_page(25).per_page, 25);
    }
}
