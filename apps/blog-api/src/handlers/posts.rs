//! Blog post CRUD handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blog_core::domain::Post;
use blog_shared::{ErrorResponse, PostRequest};

use crate::middleware::error::AppResult;
use crate::middleware::{RequestScope, ValidatedPost};
use crate::state::AppState;

/// Get all blog posts
#[utoipa::path(
    get,
    path = "/api/v1/posts",
    tag = "Blog Posts",
    responses(
        (status = 200, description = "List of blog posts", body = [Post]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_posts(
    state: web::Data<AppState>,
    scope: RequestScope,
) -> AppResult<HttpResponse> {
    let posts = state.posts.get_all(scope.ctx()).await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// Get a blog post by ID
#[utoipa::path(
    get,
    path = "/api/v1/posts/{id}",
    tag = "Blog Posts",
    params(("id" = String, Path, description = "Blog post ID")),
    responses(
        (status = 200, description = "Blog post details", body = Post),
        (status = 404, description = "Blog post not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_post(
    state: web::Data<AppState>,
    scope: RequestScope,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get_by_id(scope.ctx(), &path).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// Create a new blog post
///
/// The server assigns the id; any id in the body is ignored.
#[utoipa::path(
    post,
    path = "/api/v1/posts",
    tag = "Blog Posts",
    request_body = PostRequest,
    responses(
        (status = 201, description = "Created blog post", body = Post),
        (status = 400, description = "Invalid request body or missing required fields", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_post(
    state: web::Data<AppState>,
    scope: RequestScope,
    body: ValidatedPost,
) -> AppResult<HttpResponse> {
    let post = body.into_post(Uuid::new_v4().to_string());
    let created = state.posts.create(scope.ctx(), post).await?;

    tracing::info!(post_id = %created.id, "Blog post created");
    Ok(HttpResponse::Created().json(created))
}

/// Update a blog post
#[utoipa::path(
    put,
    path = "/api/v1/posts/{id}",
    tag = "Blog Posts",
    params(("id" = String, Path, description = "Blog post ID")),
    request_body = PostRequest,
    responses(
        (status = 200, description = "Updated blog post", body = Post),
        (status = 400, description = "Invalid request body or missing required fields", body = ErrorResponse),
        (status = 404, description = "Blog post not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn update_post(
    state: web::Data<AppState>,
    scope: RequestScope,
    path: web::Path<String>,
    body: ValidatedPost,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let updated = state
        .posts
        .update(scope.ctx(), &id, body.into_post(id.as_str()))
        .await?;

    Ok(HttpResponse::Ok().json(updated))
}

/// Delete a blog post
#[utoipa::path(
    delete,
    path = "/api/v1/posts/{id}",
    tag = "Blog Posts",
    params(("id" = String, Path, description = "Blog post ID")),
    responses(
        (status = 204, description = "Blog post deleted successfully (no content)"),
        (status = 404, description = "Blog post not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_post(
    state: web::Data<AppState>,
    scope: RequestScope,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    state.posts.delete(scope.ctx(), &path).await?;

    tracing::info!(post_id = %path, "Blog post deleted");
    Ok(HttpResponse::NoContent().finish())
}
