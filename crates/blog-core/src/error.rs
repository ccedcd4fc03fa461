//! Domain-level error types.

use thiserror::Error;

/// Repository-level errors.
///
/// Every variant is terminal for the call that produced it; nothing in the
/// stack retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepoError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Post not found: {id}")]
    NotFound { id: String },

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Deadline exceeded")]
    DeadlineExceeded,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl RepoError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// True for errors raised because the caller gave up, not because the
    /// operation failed.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled | Self::DeadlineExceeded)
    }
}
