use anyhow::Context;
use fbl_api::{FeedbackClient, FeedbackService};
use fbl_config::FeedbackLoopConfig;
use fbl_db::CmsDb;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: FeedbackService<Option<CmsDb>>,
    pub config: FeedbackLoopConfig,
}

impl AppContext {
    /// Build the API client and open the CMS database when one is configured.
    ///
    /// A CMS database that fails to open is logged and left out; only
    /// commands that need watched content fail later.
    pub async fn init(config: FeedbackLoopConfig, user: Option<u64>) -> anyhow::Result<Self> {
        if !config.api.is_configured() {
            anyhow::bail!(
                "feedback API is not configured. Set api.base_url and api.authenticate_header \
                 (FEEDBACK_LOOP_API__BASE_URL, FEEDBACK_LOOP_API__AUTHENTICATE_HEADER)."
            );
        }
        let client =
            FeedbackClient::new(&config.api).context("failed to build feedback API client")?;

        let cms = if config.cms.is_configured() {
            match CmsDb::open_local(&config.cms.database_path).await {
                Ok(db) => Some(db),
                Err(error) => {
                    tracing::warn!(
                        %error,
                        "failed to open CMS database; watched content unavailable"
                    );
                    None
                }
            }
        } else {
            tracing::debug!("cms.database_path not set; watched content unavailable");
            None
        };

        let reviewer_uid = user.unwrap_or(config.reviewer.uid);
        if reviewer_uid == 0 {
            tracing::warn!("no reviewer account id configured; requests run as anonymous (uid 0)");
        }

        let service = FeedbackService::new(client, cms, reviewer_uid, config.cms.flag_id.clone());
        Ok(Self { service, config })
    }
}
