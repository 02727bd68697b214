//! The post repository contract.
//!
//! Every operation is one request against the backend. Ownership of the rows
//! touched by `update` and `delete` is never checked here: the backend's
//! row-level authorization is the only gate, and its rejections come back as
//! [`BackendError`].

use async_trait::async_trait;
use thiserror::Error;

use super::models::{Draft, Post};

/// Any transport, query or authorization failure reported by the backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("backend request failed (status {status:?}): {message}")]
pub struct BackendError {
    /// HTTP status, when the backend answered at all
    pub status: Option<u16>,
    pub message: String,
}

impl BackendError {
    #[must_use]
    pub fn new(status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// A failure that never produced a response.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(None, message)
    }

    /// A rejection carrying the backend's HTTP status.
    #[must_use]
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::new(Some(status), message)
    }
}

/// CRUD access to the `posts` table, scoped by owner.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// The owner's posts, newest first. An owner without posts gets an empty list.
    async fn list_owned_by(&self, owner_id: &str) -> Result<Vec<Post>, BackendError>;

    /// Insert one row for `owner_id`.
    async fn create(&self, draft: &Draft, owner_id: &str) -> Result<(), BackendError>;

    /// Replace content, images and video URLs of one row. A missing row is a no-op.
    async fn update(&self, post_id: &str, draft: &Draft) -> Result<(), BackendError>;

    async fn delete(&self, post_id: &str) -> Result<(), BackendError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_display() {
        let err = BackendError::rejected(403, "new row violates row-level security policy");
        assert_eq!(
            err.to_string(),
            "backend request failed (status Some(403)): new row violates row-level security policy"
        );

        let err = BackendError::transport("connection refused");
        assert_eq!(err.status, None);
        assert!(err.to_string().contains("connection refused"));
    }
}
