//! External feedback API connection settings.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Referer sent with every request unless overridden.
fn default_referer() -> String {
    String::from("edit.mass.gov")
}

/// Default page size for feedback listings.
const fn default_per_page() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL every endpoint is resolved against (e.g. `https://feedback.example.gov/api/`).
    #[serde(default)]
    pub base_url: String,

    /// Secret sent in the `Authenticate` header.
    #[serde(default)]
    pub authenticate_header: String,

    /// Static `Referer` header value.
    #[serde(default = "default_referer")]
    pub referer: String,

    /// Feedback items per page.
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    /// Request timeout. Unset keeps the HTTP client's default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            authenticate_header: String::new(),
            referer: default_referer(),
            per_page: default_per_page(),
            timeout_secs: None,
        }
    }
}

impl ApiConfig {
    /// Check if the minimum fields for talking to the API are present.
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty() && !self.authenticate_header.is_empty()
    }

    /// Reject values the client cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero page size or a base URL
    /// that is not `http(s)`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.per_page == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.per_page".into(),
                reason: "must be a positive integer".into(),
            });
        }
        if !self.base_url.is_empty()
            && !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://"))
        {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: format!("'{}' is not an http(s) URL", self.base_url),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = ApiConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.per_page, 20);
        assert_eq!(config.referer, "edit.mass.gov");
        assert!(config.timeout_secs.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn configured_when_url_and_secret_set() {
        let config = ApiConfig {
            base_url: "https://feedback.example.gov/api/".into(),
            authenticate_header: "secret".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
    }

    #[test]
    fn zero_per_page_is_invalid() {
        let config = ApiConfig {
            per_page: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "api.per_page"
        ));
    }

    #[test]
    fn non_http_base_url_is_invalid() {
        let config = ApiConfig {
            base_url: "ftp://feedback".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
