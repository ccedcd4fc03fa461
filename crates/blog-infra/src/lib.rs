//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//! Today that is a single in-memory post repository; content is lost when
//! the process exits.

pub mod repository;

pub use repository::InMemoryPostRepository;
