//! Response shapes handed to callers and the CLI.

use serde::{Deserialize, Serialize};

use crate::entities::FeedbackRecord;

/// One page of feedback.
///
/// `is_watching_content` is `false` only when the page was scoped to watched
/// content and the reviewer watches nothing; the table then links to the
/// watched-content dashboard instead of reporting an empty page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedbackPage {
    pub results: Vec<FeedbackRecord>,
    pub total: u64,
    pub per_page: u32,
    pub is_watching_content: bool,
}

impl FeedbackPage {
    /// The page returned when the API request fails.
    #[must_use]
    pub const fn empty(per_page: u32) -> Self {
        Self {
            results: Vec::new(),
            total: 0,
            per_page,
            is_watching_content: true,
        }
    }
}
