use async_trait::async_trait;

use crate::context::RequestContext;
use crate::domain::Post;
use crate::error::RepoError;

/// Post repository - storage backend for blog posts.
///
/// Every operation receives the caller's [`RequestContext`] and must check
/// it before touching storage.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Store a post under its id, replacing any post with the same id.
    async fn create(&self, ctx: &RequestContext, post: Post) -> Result<Post, RepoError>;

    /// Return every stored post. Order is unspecified.
    async fn get_all(&self, ctx: &RequestContext) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its id.
    async fn get_by_id(&self, ctx: &RequestContext, id: &str) -> Result<Post, RepoError>;

    /// Replace the post stored under `id`. The stored post's id is always `id`.
    async fn update(&self, ctx: &RequestContext, id: &str, post: Post)
    -> Result<Post, RepoError>;

    /// Remove the post stored under `id`.
    async fn delete(&self, ctx: &RequestContext, id: &str) -> Result<(), RepoError>;

    /// Number of stored posts.
    async fn count(&self, ctx: &RequestContext) -> Result<usize, RepoError>;
}
