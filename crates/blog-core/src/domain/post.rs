use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Post entity - a single blog post.
///
/// The `id` is opaque to the domain. It is assigned by the HTTP layer on
/// creation and is the key the repository stores the post under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Post {
    #[serde(default)]
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: String,
    #[schema(example = "Getting Started with Rust")]
    pub title: String,
    pub content: String,
    pub author: String,
}

impl Post {
    /// Create a post with the given id and fields.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            author: author.into(),
        }
    }
}
