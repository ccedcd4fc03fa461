//! Error handling - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use blog_core::RepoError;
use blog_shared::ErrorResponse;

/// Detail returned for every 404 on a post route.
pub const POST_NOT_FOUND: &str = "blog post with a given id not found";

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Internal(_) => ErrorResponse::internal_error(),
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from repository errors
impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound { .. } => AppError::NotFound(POST_NOT_FOUND.to_string()),
            err if err.is_cancellation() => {
                tracing::warn!(error = %err, "Request abandoned before reaching the store");
                AppError::Internal(err.to_string())
            }
            err => {
                tracing::error!(error = %err, "Post repository error");
                AppError::Internal(err.to_string())
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_errors_map_to_status() {
        let cases = [
            (RepoError::not_found("1"), StatusCode::NOT_FOUND),
            (
                RepoError::InvalidArgument("empty id".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (RepoError::Cancelled, StatusCode::INTERNAL_SERVER_ERROR),
            (RepoError::DeadlineExceeded, StatusCode::INTERNAL_SERVER_ERROR),
            (
                RepoError::Internal("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(AppError::from(err).status_code(), status);
        }
    }

    #[test]
    fn test_not_found_uses_fixed_message() {
        match AppError::from(RepoError::not_found("abc")) {
            AppError::NotFound(detail) => assert_eq!(detail, POST_NOT_FOUND),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
