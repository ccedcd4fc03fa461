//! # Blog Core
//!
//! The domain layer of the blog posts API.
//! Holds the `Post` entity, the repository port, and the service facade
//! that request handlers talk to. No storage or web code lives here.

pub mod context;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use context::RequestContext;
pub use error::RepoError;
pub use service::PostService;
