//! Post service - the stable facade request handlers depend on.

use std::sync::Arc;

use crate::context::RequestContext;
use crate::domain::Post;
use crate::error::RepoError;
use crate::ports::PostRepository;

/// Forwards every call to the configured [`PostRepository`].
///
/// Results and errors pass through unchanged, so swapping the storage
/// backend never touches the HTTP layer.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, ctx: &RequestContext, post: Post) -> Result<Post, RepoError> {
        self.repo.create(ctx, post).await
    }

    pub async fn get_all(&self, ctx: &RequestContext) -> Result<Vec<Post>, RepoError> {
        self.repo.get_all(ctx).await
    }

    pub async fn get_by_id(&self, ctx: &RequestContext, id: &str) -> Result<Post, RepoError> {
        self.repo.get_by_id(ctx, id).await
    }

    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: &str,
        post: Post,
    ) -> Result<Post, RepoError> {
        self.repo.update(ctx, id, post).await
    }

    pub async fn delete(&self, ctx: &RequestContext, id: &str) -> Result<(), RepoError> {
        self.repo.delete(ctx, id).await
    }

    pub async fn count(&self, ctx: &RequestContext) -> Result<usize, RepoError> {
        self.repo.count(ctx).await
    }
}
