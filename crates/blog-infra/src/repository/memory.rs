//! In-memory post repository - the authoritative store for blog posts.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::RequestContext;
use blog_core::domain::Post;
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

/// In-memory post repository using a HashMap behind one async RwLock.
///
/// The lock covers the whole keyspace: writes exclude every other call,
/// reads share the lock with each other. Callers always get clones back,
/// never a reference into the map.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    posts: RwLock<HashMap<String, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, ctx: &RequestContext, post: Post) -> Result<Post, RepoError> {
        ctx.check()?;

        if post.id.is_empty() {
            return Err(RepoError::InvalidArgument(
                "post id cannot be empty".to_string(),
            ));
        }

        let mut posts = self.posts.write().await;
        if posts.insert(post.id.clone(), post.clone()).is_some() {
            tracing::debug!(post_id = %post.id, "Overwrote existing post on create");
        } else {
            tracing::debug!(post_id = %post.id, "Created post");
        }

        Ok(post)
    }

    async fn get_all(&self, ctx: &RequestContext) -> Result<Vec<Post>, RepoError> {
        ctx.check()?;

        let posts = self.posts.read().await;
        Ok(posts.values().cloned().collect())
    }

    async fn get_by_id(&self, ctx: &RequestContext, id: &str) -> Result<Post, RepoError> {
        ctx.check()?;

        let posts = self.posts.read().await;
        posts.get(id).cloned().ok_or_else(|| RepoError::not_found(id))
    }

    async fn update(
        &self,
        ctx: &RequestContext,
        id: &str,
        mut post: Post,
    ) -> Result<Post, RepoError> {
        ctx.check()?;

        let mut posts = self.posts.write().await;
        let slot = posts.get_mut(id).ok_or_else(|| RepoError::not_found(id))?;

        // The addressed id always wins over whatever the payload carried.
        post.id = id.to_string();
        *slot = post.clone();
        tracing::debug!(post_id = %id, "Updated post");

        Ok(post)
    }

    async fn delete(&self, ctx: &RequestContext, id: &str) -> Result<(), RepoError> {
        ctx.check()?;

        let mut posts = self.posts.write().await;
        posts.remove(id).ok_or_else(|| RepoError::not_found(id))?;
        tracing::debug!(post_id = %id, "Deleted post");

        Ok(())
    }

    async fn count(&self, ctx: &RequestContext) -> Result<usize, RepoError> {
        ctx.check()?;

        Ok(self.posts.read().await.len())
    }
}
