//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::PostService;
use blog_core::ports::PostRepository;
use blog_infra::InMemoryPostRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
}

impl AppState {
    /// Build the application state backed by a fresh in-memory store.
    pub fn new() -> Self {
        let state = Self::with_repository(Arc::new(InMemoryPostRepository::new()));
        tracing::info!("Application state initialized with in-memory post store");
        state
    }

    /// Build the application state on top of any post repository.
    pub fn with_repository(repo: Arc<dyn PostRepository>) -> Self {
        Self {
            posts: PostService::new(repo),
        }
    }
}
