//! Shared request plumbing for every endpoint.
//!
//! Status checks live here so endpoint modules only build bodies and map
//! responses. Failures keep the request line so they can be logged as
//! `METHOD URL: body`.

use reqwest::{Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::FeedbackClient;
use crate::error::{FeedbackApiError, RequestError};

/// A failed request together with the request line that produced it.
#[derive(Debug)]
pub(crate) struct RequestFailure {
    pub method: Method,
    pub url: Url,
    pub error: RequestError,
}

impl RequestFailure {
    /// Log the failure and turn it into the caller-facing error.
    pub(crate) fn into_not_found(self) -> FeedbackApiError {
        tracing::error!(
            method = %self.method,
            url = %self.url,
            body = %self.error.detail(),
            "feedback API request failed"
        );
        FeedbackApiError::NotFound {
            method: self.method.to_string(),
            url: self.url.to_string(),
        }
    }
}

/// Return the response unchanged on success, or [`RequestError::Api`] with the
/// status code and response body.
pub(crate) async fn check_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, RequestError> {
    if !resp.status().is_success() {
        return Err(RequestError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

impl FeedbackClient {
    /// Send a request with an optional JSON body and check its status.
    pub(crate) async fn send<B>(
        &self,
        method: Method,
        url: &Url,
        body: Option<&B>,
    ) -> Result<reqwest::Response, RequestFailure>
    where
        B: Serialize + ?Sized,
    {
        tracing::debug!(%method, %url, "feedback API request");
        let mut builder = self.http.request(method.clone(), url.clone());
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let result = match builder.send().await {
            Ok(resp) => check_response(resp).await,
            Err(e) => Err(RequestError::from(e)),
        };
        result.map_err(|error| RequestFailure {
            method,
            url: url.clone(),
            error,
        })
    }

    /// Send a request and decode the JSON response.
    pub(crate) async fn send_json<B, T>(
        &self,
        method: Method,
        url: &Url,
        body: Option<&B>,
    ) -> Result<T, RequestFailure>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self.send(method.clone(), url, body).await?;
        resp.json::<T>().await.map_err(|e| RequestFailure {
            method,
            url: url.clone(),
            error: RequestError::from(e),
        })
    }

    /// Send a request and return the raw response body.
    pub(crate) async fn send_text<B>(
        &self,
        method: Method,
        url: &Url,
        body: Option<&B>,
    ) -> Result<String, RequestFailure>
    where
        B: Serialize + ?Sized,
    {
        let resp = self.send(method.clone(), url, body).await?;
        resp.text().await.map_err(|e| RequestFailure {
            method,
            url: url.clone(),
            error: RequestError::from(e),
        })
    }
}
