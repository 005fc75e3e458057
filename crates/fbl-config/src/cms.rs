//! Host CMS settings: the database holding flagging data and the site URLs.

use serde::{Deserialize, Serialize};

fn default_flag_id() -> String {
    String::from("watch_content")
}

fn default_watched_content_path() -> String {
    String::from("/admin/watched-content")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CmsConfig {
    /// Path to a libSQL/SQLite copy of the CMS database (`flagging`,
    /// `node_field_data`).
    #[serde(default)]
    pub database_path: String,

    /// Flag that marks content as watched.
    #[serde(default = "default_flag_id")]
    pub flag_id: String,

    /// Public base URL of the CMS, used to link source pages.
    #[serde(default)]
    pub site_base_url: String,

    /// Path of the watched-content dashboard.
    #[serde(default = "default_watched_content_path")]
    pub watched_content_path: String,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            database_path: String::new(),
            flag_id: default_flag_id(),
            site_base_url: String::new(),
            watched_content_path: default_watched_content_path(),
        }
    }
}

impl CmsConfig {
    pub fn is_configured(&self) -> bool {
        !self.database_path.is_empty()
    }

    /// Absolute URL for a node, or `None` without a site base URL.
    pub fn node_url(&self, nid: u64) -> Option<String> {
        self.site_url(&format!("/node/{nid}"))
    }

    /// Absolute URL of the watched-content dashboard, or the bare path.
    pub fn watched_content_url(&self) -> String {
        self.site_url(&self.watched_content_path)
            .unwrap_or_else(|| self.watched_content_path.clone())
    }

    fn site_url(&self, path: &str) -> Option<String> {
        if self.site_base_url.is_empty() {
            return None;
        }
        Some(format!(
            "{}/{}",
            self.site_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = CmsConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.flag_id, "watch_content");
        assert_eq!(config.node_url(5), None);
        assert_eq!(config.watched_content_url(), "/admin/watched-content");
    }

    #[test]
    fn urls_join_without_double_slashes() {
        let config = CmsConfig {
            site_base_url: "https://edit.example.gov/".into(),
            ..Default::default()
        };
        assert_eq!(
            config.node_url(42).as_deref(),
            Some("https://edit.example.gov/node/42")
        );
        assert_eq!(
            config.watched_content_url(),
            "https://edit.example.gov/admin/watched-content"
        );
    }
}
