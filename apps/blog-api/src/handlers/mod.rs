//! HTTP handlers and route configuration.

mod docs;
mod health;
mod posts;

use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use docs::{ApiDoc, DOCS_PATH, OPENAPI_PATH};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(docs::index))
        .route("/health", web::get().to(health::health_check))
        .service(
            SwaggerUi::new(format!("{DOCS_PATH}/{{_:.*}}")).url(OPENAPI_PATH, ApiDoc::openapi()),
        )
        .service(
            web::scope("/api/v1").service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list_posts))
                    .route("", web::post().to(posts::create_post))
                    .route("/{id}", web::get().to(posts::get_post))
                    .route("/{id}", web::put().to(posts::update_post))
                    .route("/{id}", web::delete().to(posts::delete_post)),
            ),
        );
}
