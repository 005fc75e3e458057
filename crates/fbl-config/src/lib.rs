//! # fbl-config
//!
//! Layered configuration loading for feedback-loop using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FEEDBACK_LOOP_*` prefix, `__` as separator)
//! 2. Project-level `.feedback-loop/config.toml`
//! 3. User-level `~/.config/feedback-loop/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `FEEDBACK_LOOP_API__BASE_URL` -> `api.base_url`,
//! `FEEDBACK_LOOP_REVIEWER__UID` -> `reviewer.uid`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! `.env` loading is left to the binary, which runs before [`FeedbackLoopConfig::load_from`].
//!
//! ```no_run
//! use std::path::Path;
//!
//! use fbl_config::FeedbackLoopConfig;
//!
//! let config = FeedbackLoopConfig::load_from(Path::new(".")).expect("config");
//!
//! if config.api.is_configured() {
//!     println!("Feedback API: {}", config.api.base_url);
//! }
//! ```

mod api;
mod cms;
mod error;
mod reviewer;

pub use api::ApiConfig;
pub use cms::CmsConfig;
pub use error::ConfigError;
pub use reviewer::ReviewerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix for every setting.
pub const ENV_PREFIX: &str = "FEEDBACK_LOOP_";

/// Project-local configuration directory name.
pub const PROJECT_DIR: &str = ".feedback-loop";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FeedbackLoopConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub cms: CmsConfig,
    #[serde(default)]
    pub reviewer: ReviewerConfig,
}

impl FeedbackLoopConfig {
    /// Load configuration using `project_root/.feedback-loop/config.toml` as the
    /// project layer.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source cannot be parsed or a value is invalid.
    pub fn load_from(project_root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment_in(project_root).extract()?;
        config.api.validate()?;
        Ok(config)
    }

    /// Build the provider chain for a project root.
    pub fn figment_in(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = project_root.join(PROJECT_DIR).join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("feedback-loop").join("config.toml"))
    }
}
