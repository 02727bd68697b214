//! Posts: the row model, the repository contract and an in-memory backend.

pub mod memory;
pub mod models;
pub mod repository;

pub use memory::{InMemoryBackend, RepoCall};
pub use models::{Draft, NewPost, Post};
pub use repository::{BackendError, PostRepository};
