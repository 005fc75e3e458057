//! Identity of the reviewer the CLI acts for.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReviewerConfig {
    /// CMS account id. `0` is the anonymous account.
    #[serde(default)]
    pub uid: u64,
}

impl ReviewerConfig {
    pub const fn is_configured(&self) -> bool {
        self.uid != 0
    }
}
