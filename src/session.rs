//! Session accessor: who is signed in, if anyone.

use async_trait::async_trait;
use serde::Deserialize;

/// The authenticated user as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Identity {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl Identity {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: None,
        }
    }
}

/// Read-only view of the current session.
///
/// Implementations return `None` when there is no session or the backend
/// cannot confirm one; they never fail.
#[async_trait]
pub trait SessionAccessor: Send + Sync {
    async fn current_user(&self) -> Option<Identity>;
}

/// A session already looked up once for this request.
#[derive(Debug, Clone, Default)]
pub struct ResolvedSession(pub Option<Identity>);

#[async_trait]
impl SessionAccessor for ResolvedSession {
    async fn current_user(&self) -> Option<Identity> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_deserializes_auth_user() {
        let json = r#"{"id":"5f1c","aud":"authenticated","email":"ana@example.com","role":"authenticated"}"#;
        let identity: Identity = serde_json::from_str(json).unwrap();
        assert_eq!(identity.id, "5f1c");
        assert_eq!(identity.email.as_deref(), Some("ana@example.com"));
    }

    #[tokio::test]
    async fn test_resolved_session() {
        assert_eq!(ResolvedSession(None).current_user().await, None);
        let session = ResolvedSession(Some(Identity::new("u-1")));
        assert_eq!(session.current_user().await, Some(Identity::new("u-1")));
    }
}
