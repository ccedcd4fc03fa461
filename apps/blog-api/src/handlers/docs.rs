//! API index and the generated OpenAPI document.

use actix_web::HttpResponse;
use serde_json::json;
use utoipa::OpenApi;

use blog_core::domain::Post;
use blog_shared::{ErrorResponse, PostRequest};

use super::posts;

/// OpenAPI description assembled from the handler annotations.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Blog Posts API",
        description = "A simple REST API for managing blog posts"
    ),
    paths(
        posts::list_posts,
        posts::get_post,
        posts::create_post,
        posts::update_post,
        posts::delete_post
    ),
    components(schemas(Post, PostRequest, ErrorResponse)),
    tags((name = "Blog Posts", description = "Operations related to blog posts management"))
)]
pub struct ApiDoc;

/// Where the Swagger UI is mounted.
pub const DOCS_PATH: &str = "/api/docs";

/// Where the raw OpenAPI JSON is served.
pub const OPENAPI_PATH: &str = "/api/openapi.json";

/// GET / - entry point listing where everything lives.
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": "Welcome to Blog Posts API",
        "version": env!("CARGO_PKG_VERSION"),
        "docs": format!("{DOCS_PATH}/"),
        "openapi": OPENAPI_PATH,
        "health": "/health",
        "api_base": "/api/v1",
        "endpoints": {
            "GET /api/v1/posts": "Get all blog posts",
            "GET /api/v1/posts/{id}": "Get a blog post by ID",
            "POST /api/v1/posts": "Create a new blog post",
            "PUT /api/v1/posts/{id}": "Update a blog post",
            "DELETE /api/v1/posts/{id}": "Delete a blog post"
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_document_covers_every_post_route() {
        let doc: Value = serde_json::to_value(ApiDoc::openapi()).unwrap();
        assert_eq!(doc["info"]["title"], "Blog Posts API");

        let paths = &doc["paths"];
        for method in ["get", "post"] {
            assert!(
                paths["/api/v1/posts"][method].is_object(),
                "missing {method} /api/v1/posts"
            );
        }
        for method in ["get", "put", "delete"] {
            assert!(
                paths["/api/v1/posts/{id}"][method].is_object(),
                "missing {method} /api/v1/posts/{{id}}"
            );
        }
        assert!(paths["/api/v1/posts/{id}"]["delete"]["responses"]["204"].is_object());
        assert_eq!(
            paths["/api/v1/posts/{id}"]["get"]["parameters"][0]["name"],
            "id"
        );
    }

    #[test]
    fn test_document_schemas_match_wire_types() {
        let doc: Value = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let schemas = &doc["components"]["schemas"];

        for field in ["id", "title", "content", "author"] {
            assert!(schemas["Post"]["properties"][field].is_object(), "Post.{field}");
        }
        // The renamed serde field must appear under its wire name.
        assert!(schemas["ErrorResponse"]["properties"]["type"].is_object());
        assert!(schemas["ErrorResponse"]["properties"]["error_type"].is_null());
        assert!(schemas["PostRequest"]["properties"]["title"].is_object());
    }
}
