//! # fbl-api
//!
//! Typed client for the external feedback API.
//!
//! One method per endpoint, all JSON in and JSON out over a single
//! `reqwest::Client` that carries the static headers:
//! - `GET feedback/`: feedback listing and CSV export
//! - `GET tag_lookup/`: tag catalog
//! - `GET labels/`: label lookup
//! - `POST tags/`, `DELETE tags/`: tag assignment
//!
//! There are no retries. Failed requests are logged and surface as
//! [`FeedbackApiError::NotFound`], except the feedback listing, which returns
//! an empty page instead.

mod error;
mod feedback;
mod http;
mod labels;
pub mod service;
mod tags;

pub use error::FeedbackApiError;
pub use service::FeedbackService;

use fbl_config::ApiConfig;
use reqwest::Url;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, REFERER};

/// Endpoint paths, relative to the configured base URL.
pub mod endpoints {
    pub const FEEDBACK: &str = "feedback/";
    pub const TAGS: &str = "tags/";
    pub const TAG_LOOKUP: &str = "tag_lookup/";
    pub const LABEL_LOOKUP: &str = "labels/";
}

/// Header carrying the API secret (header names are case-insensitive).
pub const AUTHENTICATE_HEADER: &str = "authenticate";

#[derive(Debug, Clone)]
struct Endpoints {
    feedback: Url,
    tags: Url,
    tag_lookup: Url,
    labels: Url,
}

/// HTTP client for the feedback API.
#[derive(Debug, Clone)]
pub struct FeedbackClient {
    http: reqwest::Client,
    endpoints: Endpoints,
    per_page: u32,
}

impl FeedbackClient {
    /// Build a client from API settings.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackApiError::InvalidConfig`] if the base URL does not
    /// parse, a header value is not valid ASCII, `per_page` is zero, or the
    /// underlying `reqwest::Client` fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, FeedbackApiError> {
        config
            .validate()
            .map_err(|e| FeedbackApiError::InvalidConfig(e.to_string()))?;

        let base = parse_base_url(&config.base_url)?;
        let endpoints = Endpoints {
            feedback: join(&base, endpoints::FEEDBACK)?,
            tags: join(&base, endpoints::TAGS)?,
            tag_lookup: join(&base, endpoints::TAG_LOOKUP)?,
            labels: join(&base, endpoints::LABEL_LOOKUP)?,
        };

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(REFERER, header_value("referer", &config.referer)?);
        let mut secret = header_value("authenticate_header", &config.authenticate_header)?;
        secret.set_sensitive(true);
        headers.insert(HeaderName::from_static(AUTHENTICATE_HEADER), secret);

        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("feedback-loop/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| FeedbackApiError::InvalidConfig(format!("HTTP client: {e}")))?;

        Ok(Self {
            http,
            endpoints,
            per_page: config.per_page,
        })
    }

    /// Configured page size for feedback listings.
    #[must_use]
    pub const fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Resolved URL of the feedback endpoint.
    #[must_use]
    pub const fn feedback_url(&self) -> &Url {
        &self.endpoints.feedback
    }
}

/// Parse the base URL, forcing a trailing slash so endpoint paths append
/// instead of replacing the last segment.
fn parse_base_url(raw: &str) -> Result<Url, FeedbackApiError> {
    let mut normalized = raw.trim().to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    Url::parse(&normalized)
        .map_err(|e| FeedbackApiError::InvalidConfig(format!("api.base_url '{raw}': {e}")))
}

fn join(base: &Url, path: &str) -> Result<Url, FeedbackApiError> {
    base.join(path)
        .map_err(|e| FeedbackApiError::InvalidConfig(format!("endpoint '{path}': {e}")))
}

fn header_value(field: &str, value: &str) -> Result<HeaderValue, FeedbackApiError> {
    HeaderValue::from_str(value)
        .map_err(|e| FeedbackApiError::InvalidConfig(format!("api.{field}: {e}")))
}
