//! The form state controller.
//!
//! Owns the draft, the edit target, the owned-post list and the latest
//! notice, and turns user intents into repository calls. One controller
//! serves one rendered form; nothing here is shared.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error, info, warn};

use super::state::{FormState, Notice};
use crate::posts::{BackendError, Post, PostRepository};
use crate::session::SessionAccessor;

#[derive(Debug, Error)]
pub enum FormError {
    /// Nobody is signed in; the caller should send the user to the login page.
    #[error("authentication required")]
    AuthRequired,
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Result of a `submit` that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The draft was empty; nothing was sent.
    Skipped,
    Created,
    Updated,
}

pub struct FormController {
    repo: Arc<dyn PostRepository>,
    session: Arc<dyn SessionAccessor>,
    state: FormState,
    posts: Vec<Post>,
    notice: Option<Notice>,
}

impl FormController {
    /// A controller in `Composing(empty)` with no posts loaded.
    #[must_use]
    pub fn new(repo: Arc<dyn PostRepository>, session: Arc<dyn SessionAccessor>) -> Self {
        Self::with_state(repo, session, FormState::default())
    }

    /// A controller resuming from an existing state.
    #[must_use]
    pub fn with_state(
        repo: Arc<dyn PostRepository>,
        session: Arc<dyn SessionAccessor>,
        state: FormState,
    ) -> Self {
        Self {
            repo,
            session,
            state,
            posts: Vec::new(),
            notice: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// The signed-in user's posts as of the last successful fetch.
    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    #[must_use]
    pub fn find_post(&self, post_id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == post_id)
    }

    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.state.draft_mut().content = content.into();
    }

    /// Append an image URL to the draft. Blank input is ignored.
    pub fn attach_image(&mut self, url: &str) {
        if let Some(url) = clean_url(url) {
            self.state.draft_mut().images.push(url);
        }
    }

    /// Append a video URL to the draft. Blank input is ignored.
    pub fn attach_video(&mut self, url: &str) {
        if let Some(url) = clean_url(url) {
            self.state.draft_mut().video_urls.push(url);
        }
    }

    /// Switch to editing `post`, discarding whatever was in the draft.
    pub fn begin_edit(&mut self, post: &Post) {
        debug!(post_id = %post.id, "Editing post");
        self.state = FormState::Editing {
            post_id: post.id.clone(),
            draft: post.to_draft(),
        };
    }

    /// Back to an empty new-post draft.
    pub fn cancel_edit(&mut self) {
        self.state = FormState::default();
    }

    /// Re-fetch the signed-in user's posts.
    ///
    /// Without a session nothing is requested. A failed fetch is logged and
    /// the previous list is kept.
    pub async fn refresh(&mut self) {
        let Some(user) = self.session.current_user().await else {
            debug!("No session, skipping post list fetch");
            return;
        };
        self.load_posts(&user.id).await;
    }

    async fn load_posts(&mut self, owner_id: &str) {
        match self.repo.list_owned_by(owner_id).await {
            Ok(posts) => {
                debug!(owner_id = %owner_id, count = posts.len(), "Fetched posts");
                self.posts = posts;
            }
            Err(e) => {
                error!(owner_id = %owner_id, error = %e, "Error fetching user posts");
            }
        }
    }

    /// Save the draft: update the edit target if there is one, else create.
    ///
    /// On success the form returns to an empty draft and the list is
    /// re-fetched. On failure the draft and edit target are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::AuthRequired`] when nobody is signed in and
    /// [`FormError::Backend`] when the backend rejects the write.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, FormError> {
        if self.state.draft().is_empty() {
            debug!("Empty draft, nothing to submit");
            return Ok(SubmitOutcome::Skipped);
        }

        let Some(user) = self.session.current_user().await else {
            warn!("Submit without a session");
            self.notice = Some(Notice::LOGIN_REQUIRED);
            return Err(FormError::AuthRequired);
        };

        let result = match &self.state {
            FormState::Editing { post_id, draft } => self
                .repo
                .update(post_id, draft)
                .await
                .map(|()| SubmitOutcome::Updated),
            FormState::Composing(draft) => self
                .repo
                .create(draft, &user.id)
                .await
                .map(|()| SubmitOutcome::Created),
        };

        match result {
            Ok(outcome) => {
                info!(
                    user_id = %user.id,
                    post_id = self.state.editing().unwrap_or("new"),
                    outcome = ?outcome,
                    "Post saved"
                );
                self.notice = Some(if outcome == SubmitOutcome::Updated {
                    Notice::UPDATED
                } else {
                    Notice::CREATED
                });
                self.state = FormState::default();
                self.load_posts(&user.id).await;
                Ok(outcome)
            }
            Err(e) => {
                error!(user_id = %user.id, error = %e, "Error with post");
                self.notice = Some(Notice::SUBMIT_FAILED);
                Err(e.into())
            }
        }
    }

    /// Delete a post, whatever the form is currently doing.
    ///
    /// The form state is not touched, even when `post_id` is the edit target.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Backend`] when the backend rejects the delete.
    pub async fn delete_post(&mut self, post_id: &str) -> Result<(), FormError> {
        match self.repo.delete(post_id).await {
            Ok(()) => {
                info!(post_id = %post_id, "Post deleted");
                self.notice = Some(Notice::DELETED);
                self.refresh().await;
                Ok(())
            }
            Err(e) => {
                error!(post_id = %post_id, error = %e, "Error deleting post");
                self.notice = Some(Notice::DELETE_FAILED);
                Err(e.into())
            }
        }
    }
}

/// Trim a pasted URL and drop any line breaks inside it.
///
/// Draft media lists travel between requests one URL per line, so a URL must
/// never contain one.
fn clean_url(url: &str) -> Option<String> {
    let url: String = url.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();
    let url = url.trim();
    (!url.is_empty()).then(|| url.to_string())
}
