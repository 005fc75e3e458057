//! Cross-cutting error types for feedback-loop.
//!
//! Domain-specific errors (`FeedbackApiError`, `DatabaseError`, `ConfigError`)
//! live in their respective crates. The CLI converges everything on `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any feedback-loop crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (paging parameters, ids, formats).
    #[error("Validation error: {0}")]
    Validation(String),

    /// The watched-content source could not answer.
    #[error("Watched content lookup failed: {0}")]
    WatchedContent(String),
}
