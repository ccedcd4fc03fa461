//! Post body validation extractor.

use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use std::future::Future;
use std::pin::Pin;

use blog_core::domain::Post;
use blog_shared::PostRequest;

use super::error::AppError;

/// A post body that parsed as JSON and has a non-blank title, content and
/// author.
///
/// Handlers receive it as a typed argument; a request that fails
/// validation never reaches the handler.
#[derive(Debug, Clone)]
pub struct ValidatedPost(PostRequest);

impl ValidatedPost {
    /// Build the domain post, stamping it with `id`.
    pub fn into_post(self, id: impl Into<String>) -> Post {
        let PostRequest {
            title,
            content,
            author,
        } = self.0;
        Post::new(id, title, content, author)
    }
}

impl FromRequest for ValidatedPost {
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        // Read the raw bytes so the body parses whatever Content-Type says.
        let bytes = web::Bytes::from_request(req, payload);

        Box::pin(async move {
            let bytes = bytes.await.map_err(|e| {
                tracing::debug!(error = %e, "Failed to read post body");
                AppError::BadRequest("invalid body provided".to_string())
            })?;
            let body: PostRequest = serde_json::from_slice(&bytes).map_err(|e| {
                tracing::debug!(error = %e, "Rejected post body");
                AppError::BadRequest("invalid body provided".to_string())
            })?;

            if let Some(field) = body.first_missing_field() {
                return Err(AppError::BadRequest(format!("missing {field} field")));
            }

            Ok(ValidatedPost(body))
        })
    }
}
