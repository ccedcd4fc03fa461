//! Middleware and request extractors.

pub mod cors;
pub mod error;
pub mod request_context;
pub mod validation;

pub use cors::CorsMiddleware;
pub use request_context::{RequestContextMiddleware, RequestScope};
pub use validation::ValidatedPost;
