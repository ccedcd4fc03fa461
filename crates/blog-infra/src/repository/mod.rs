//! Post repository implementations.

mod memory;

pub use memory::InMemoryPostRepository;
