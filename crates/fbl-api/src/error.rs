//! Feedback API error types.

use fbl_core::errors::CoreError;
use thiserror::Error;

/// Errors surfaced to callers of the feedback API client.
///
/// Every failed request collapses into [`FeedbackApiError::NotFound`] after it
/// has been logged with its method, URL and response body.
#[derive(Debug, Error)]
pub enum FeedbackApiError {
    /// The API request failed (transport error, non-success status or an
    /// undecodable body).
    #[error("feedback API request failed: {method} {url}")]
    NotFound {
        /// HTTP method of the failed request.
        method: String,
        /// Fully resolved request URL.
        url: String,
    },

    /// Client settings could not be turned into a working HTTP client.
    #[error("invalid feedback API configuration: {0}")]
    InvalidConfig(String),

    /// Query validation or watched-content lookup failed.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Why a single request failed. Internal: callers only see `NotFound`.
#[derive(Debug, Error)]
pub(crate) enum RequestError {
    /// HTTP transport or body decoding error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Response body.
        message: String,
    },
}

impl RequestError {
    /// Text logged next to the request line: the response body when the API
    /// answered, otherwise the transport error.
    pub(crate) fn detail(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            Self::Http(e) => e.to_string(),
        }
    }
}
