//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /posts` and `PUT /posts/{id}`.
///
/// Missing fields deserialize as empty strings so that validation, not the
/// JSON parser, reports which field is absent. Any `id` in the body is
/// ignored: the server assigns it on create and takes it from the path on
/// update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
}

impl PostRequest {
    /// First field that is empty after trimming, checked in the order
    /// title, content, author.
    pub fn first_missing_field(&self) -> Option<&'static str> {
        [
            ("title", &self.title),
            ("content", &self.content),
            ("author", &self.author),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }
}
