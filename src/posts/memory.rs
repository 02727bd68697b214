//! In-process backend used by tests and local demos.
//!
//! Behaves like the hosted service with row-level security enabled: rows are
//! only writable by their owner, and a write by anyone else is rejected with
//! a 403. Every repository call is recorded so callers can assert on exactly
//! which requests were issued.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use super::models::{Draft, Post};
use super::repository::{BackendError, PostRepository};
use crate::session::{Identity, SessionAccessor};

/// One recorded repository call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoCall {
    List { owner_id: String },
    Create { draft: Draft, owner_id: String },
    Update { post_id: String, draft: Draft },
    Delete { post_id: String },
}

impl RepoCall {
    /// Whether this call changes data.
    #[must_use]
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Self::List { .. })
    }
}

#[derive(Debug, Default)]
struct State {
    rows: Vec<Post>,
    user: Option<Identity>,
    calls: Vec<RepoCall>,
    fail_next: Option<BackendError>,
    sequence: i64,
}

/// Thread-safe in-memory posts table plus session.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    state: Mutex<State>,
}

impl InMemoryBackend {
    /// An empty table with nobody signed in.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty table with `user_id` signed in.
    #[must_use]
    pub fn signed_in(user_id: &str) -> Self {
        let backend = Self::new();
        backend.sign_in(Identity::new(user_id));
        backend
    }

    pub fn sign_in(&self, identity: Identity) {
        self.lock().user = Some(identity);
    }

    pub fn sign_out(&self) {
        self.lock().user = None;
    }

    /// Insert a row directly, bypassing authorization, and return it.
    pub fn seed(&self, owner_id: &str, draft: Draft) -> Post {
        let mut state = self.lock();
        let post = state.new_row(owner_id, draft);
        state.rows.push(post.clone());
        post
    }

    /// Make the next repository call fail with `error`.
    pub fn fail_next(&self, error: BackendError) {
        self.lock().fail_next = Some(error);
    }

    /// All rows, in insertion order.
    #[must_use]
    pub fn rows(&self) -> Vec<Post> {
        self.lock().rows.clone()
    }

    /// Every repository call made so far.
    #[must_use]
    pub fn calls(&self) -> Vec<RepoCall> {
        self.lock().calls.clone()
    }

    /// Number of create/update/delete calls made so far.
    #[must_use]
    pub fn mutation_count(&self) -> usize {
        self.lock().calls.iter().filter(|c| c.is_mutation()).count()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl State {
    fn record(&mut self, call: RepoCall) -> Result<(), BackendError> {
        self.calls.push(call);
        self.fail_next.take().map_or(Ok(()), Err)
    }

    fn new_row(&mut self, owner_id: &str, draft: Draft) -> Post {
        self.sequence += 1;
        Post {
            id: format!("post-{}", self.sequence),
            content: draft.content,
            images: draft.images,
            video_urls: draft.video_urls,
            created_at: timestamp(self.sequence),
            owner: owner_id.to_string(),
        }
    }

    /// Row-level security check for writes to an existing row.
    fn authorize_write(&self, post_id: &str) -> Result<Option<usize>, BackendError> {
        let Some(user) = &self.user else {
            return Err(BackendError::rejected(401, "JWT required"));
        };
        let Some(index) = self.rows.iter().position(|p| p.id == post_id) else {
            return Ok(None);
        };
        if self.rows[index].owner != user.id {
            return Err(BackendError::rejected(
                403,
                "permission denied: row belongs to another user",
            ));
        }
        Ok(Some(index))
    }
}

/// Strictly increasing creation times, one second apart.
fn timestamp(sequence: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000 + sequence, 0)
        .single()
        .unwrap_or_default()
}

#[async_trait]
impl PostRepository for InMemoryBackend {
    async fn list_owned_by(&self, owner_id: &str) -> Result<Vec<Post>, BackendError> {
        let mut state = self.lock();
        state.record(RepoCall::List {
            owner_id: owner_id.to_string(),
        })?;

        let mut posts: Vec<Post> = state
            .rows
            .iter()
            .filter(|p| p.owner == owner_id)
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn create(&self, draft: &Draft, owner_id: &str) -> Result<(), BackendError> {
        let mut state = self.lock();
        state.record(RepoCall::Create {
            draft: draft.clone(),
            owner_id: owner_id.to_string(),
        })?;

        match &state.user {
            Some(user) if user.id == owner_id => {}
            Some(_) => {
                return Err(BackendError::rejected(
                    403,
                    "new row violates row-level security policy",
                ))
            }
            None => return Err(BackendError::rejected(401, "JWT required")),
        }

        let post = state.new_row(owner_id, draft.clone());
        state.rows.push(post);
        Ok(())
    }

    async fn update(&self, post_id: &str, draft: &Draft) -> Result<(), BackendError> {
        let mut state = self.lock();
        state.record(RepoCall::Update {
            post_id: post_id.to_string(),
            draft: draft.clone(),
        })?;

        if let Some(index) = state.authorize_write(post_id)? {
            let row = &mut state.rows[index];
            row.content = draft.content.clone();
            row.images = draft.images.clone();
            row.video_urls = draft.video_urls.clone();
        }
        Ok(())
    }

    async fn delete(&self, post_id: &str) -> Result<(), BackendError> {
        let mut state = self.lock();
        state.record(RepoCall::Delete {
            post_id: post_id.to_string(),
        })?;

        if let Some(index) = state.authorize_write(post_id)? {
            state.rows.remove(index);
        }
        Ok(())
    }
}

#[async_trait]
impl SessionAccessor for InMemoryBackend {
    async fn current_user(&self) -> Option<Identity> {
        self.lock().user.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_is_scoped_and_newest_first() {
        let backend = InMemoryBackend::signed_in("alice");
        let first = backend.seed("alice", Draft::text("first"));
        backend.seed("bob", Draft::text("not mine"));
        let second = backend.seed("alice", Draft::text("second"));

        let posts = backend.list_owned_by("alice").await.unwrap();
        let ids: Vec<_> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec![second.id.as_str(), first.id.as_str()]);
    }

    #[tokio::test]
    async fn test_cross_owner_writes_are_rejected() {
        let backend = InMemoryBackend::signed_in("alice");
        let bobs = backend.seed("bob", Draft::text("bob's post"));

        let err = backend
            .update(&bobs.id, &Draft::text("hijacked"))
            .await
            .unwrap_err();
        assert_eq!(err.status, Some(403));

        let err = backend.delete(&bobs.id).await.unwrap_err();
        assert_eq!(err.status, Some(403));

        let err = backend
            .create(&Draft::text("as bob"), "bob")
            .await
            .unwrap_err();
        assert_eq!(err.status, Some(403));

        assert_eq!(backend.rows()[0].content, "bob's post");
    }

    #[tokio::test]
    async fn test_update_missing_row_is_noop() {
        let backend = InMemoryBackend::signed_in("alice");
        backend
            .update("does-not-exist", &Draft::text("x"))
            .await
            .unwrap();
        assert!(backend.rows().is_empty());
        assert_eq!(backend.mutation_count(), 1);
    }

    #[tokio::test]
    async fn test_fail_next_fails_once() {
        let backend = InMemoryBackend::signed_in("alice");
        backend.fail_next(BackendError::transport("boom"));

        assert!(backend.list_owned_by("alice").await.is_err());
        assert!(backend.list_owned_by("alice").await.is_ok());
    }
}
