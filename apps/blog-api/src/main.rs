//! # Blog Posts API
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use middleware::{CorsMiddleware, RequestContextMiddleware};
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        host = %config.host,
        port = config.port,
        request_timeout_ms = config.request_timeout.map(|t| t.as_millis() as u64),
        "Starting Blog Posts API"
    );
    tracing::info!("API endpoints under /api/v1, docs at /api/docs/, health at /health");

    // One store for the whole process, shared by every worker
    let state = AppState::new();
    let request_timeout = config.request_timeout;

    HttpServer::new(move || {
        App::new()
            .wrap(CorsMiddleware)
            .wrap(RequestContextMiddleware::new(request_timeout))
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))
    .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?
    .run()
    .await
    .context("HTTP server terminated with an error")
}
