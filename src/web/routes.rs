use std::str::FromStr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::Form;
use axum::Router;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::pages::{render_login_page, render_posts_page, split_urls};
use super::session::{clear_session_cookie, session_cookie, AccessToken};
use super::AppState;
use crate::form::{FormController, FormError, FormState, SubmitOutcome};
use crate::posts::Draft;
use crate::session::{ResolvedSession, SessionAccessor};

/// Create the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/posts", get(posts_page).post(post_action))
        .route("/login", get(login_page).post(login))
        .route("/logout", post(logout))
        .route("/healthz", get(health))
}

/// Intent carried by the `action` field of the posts form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostAction {
    AttachImage,
    AttachVideo,
    Submit,
    Cancel,
    Edit(String),
    Delete(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown action: {0:?}")]
pub struct UnknownAction(String);

impl FromStr for PostAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let action = match s {
            "attach_image" => Self::AttachImage,
            "attach_video" => Self::AttachVideo,
            "submit" => Self::Submit,
            "cancel" => Self::Cancel,
            _ => match s.split_once(':') {
                Some(("edit", id)) if !id.is_empty() => Self::Edit(id.to_string()),
                Some(("delete", id)) if !id.is_empty() => Self::Delete(id.to_string()),
                _ => return Err(UnknownAction(s.to_string())),
            },
        };
        Ok(action)
    }
}

/// Everything the posts form sends back.
#[derive(Debug, Default, Deserialize)]
pub struct PostForm {
    #[serde(default)]
    pub content: String,
    /// Newline-separated image URLs of the draft
    #[serde(default)]
    pub images: String,
    /// Newline-separated video URLs of the draft
    #[serde(default)]
    pub video_urls: String,
    /// Id of the post being edited, empty when composing
    #[serde(default)]
    pub editing: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub video_url: String,
    #[serde(default)]
    pub action: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

// ========== Posts ==========

async fn home() -> Redirect {
    Redirect::to("/posts")
}

async fn posts_page(State(state): State<AppState>, AccessToken(token): AccessToken) -> Response {
    let client = state.backend.for_user(token);
    let user = client.current_user().await;

    let mut controller = FormController::new(
        Arc::new(client),
        Arc::new(ResolvedSession(user.clone())),
    );
    controller.refresh().await;

    Html(render_posts_page(&controller, user.as_ref()).into_string()).into_response()
}

async fn post_action(
    State(state): State<AppState>,
    AccessToken(token): AccessToken,
    Form(form): Form<PostForm>,
) -> Response {
    let action = match form.action.parse::<PostAction>() {
        Ok(action) => action,
        Err(e) => {
            warn!(error = %e, "Rejected posts form");
            return (StatusCode::BAD_REQUEST, e.to_string()).into_response();
        }
    };
    debug!(action = ?action, "Posts form action");

    let client = state.backend.for_user(token);
    let user = client.current_user().await;

    let draft = Draft {
        content: form.content,
        images: split_urls(&form.images),
        video_urls: split_urls(&form.video_urls),
    };
    let mut controller = FormController::with_state(
        Arc::new(client),
        Arc::new(ResolvedSession(user.clone())),
        FormState::from_parts(draft, Some(form.editing)),
    );

    match action {
        PostAction::AttachImage => {
            controller.attach_image(&form.image_url);
            controller.refresh().await;
        }
        PostAction::AttachVideo => {
            controller.attach_video(&form.video_url);
            controller.refresh().await;
        }
        PostAction::Cancel => {
            controller.cancel_edit();
            controller.refresh().await;
        }
        PostAction::Edit(post_id) => {
            controller.refresh().await;
            match controller.find_post(&post_id).cloned() {
                Some(post) => controller.begin_edit(&post),
                None => warn!(post_id = %post_id, "Edit requested for a post not in the list"),
            }
        }
        PostAction::Delete(post_id) => {
            if controller.delete_post(&post_id).await.is_err() {
                controller.refresh().await;
            }
        }
        PostAction::Submit => match controller.submit().await {
            Ok(SubmitOutcome::Created | SubmitOutcome::Updated) => {}
            Ok(SubmitOutcome::Skipped) | Err(FormError::Backend(_)) => {
                controller.refresh().await;
            }
            Err(FormError::AuthRequired) => {
                return Redirect::to(&state.config.login_path).into_response();
            }
        },
    }

    Html(render_posts_page(&controller, user.as_ref()).into_string()).into_response()
}

// ========== Auth ==========

async fn login_page() -> Html<String> {
    Html(render_login_page(None).into_string())
}

async fn login(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    match state
        .backend
        .sign_in_with_password(form.email.trim(), &form.password)
        .await
    {
        Ok(session) => {
            info!(user_id = %session.user.id, "User signed in");
            let cookie = session_cookie(
                &session.access_token,
                session.expires_in,
                state.config.secure_cookies,
            );
            ([(header::SET_COOKIE, cookie)], Redirect::to("/posts")).into_response()
        }
        Err(e) => {
            warn!(error = %e, "Sign-in failed");
            let message = match e.status {
                Some(400 | 401 | 422) => "E-mail ou senha inválidos",
                _ => "Não foi possível entrar. Tente novamente.",
            };
            (
                StatusCode::UNAUTHORIZED,
                Html(render_login_page(Some(message)).into_string()),
            )
                .into_response()
        }
    }
}

async fn logout(State(state): State<AppState>, AccessToken(token): AccessToken) -> Response {
    if let Some(token) = token {
        state.backend.sign_out(&token).await;
    }
    let cookie = clear_session_cookie(state.config.secure_cookies);
    (
        [(header::SET_COOKIE, cookie)],
        Redirect::to(&state.config.login_path),
    )
        .into_response()
}

async fn health() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_actions() {
        assert_eq!("submit".parse(), Ok(PostAction::Submit));
        assert_eq!("cancel".parse(), Ok(PostAction::Cancel));
        assert_eq!("attach_image".parse(), Ok(PostAction::AttachImage));
        assert_eq!("attach_video".parse(), Ok(PostAction::AttachVideo));
        assert_eq!(
            "edit:post-1".parse(),
            Ok(PostAction::Edit("post-1".to_string()))
        );
        assert_eq!(
            "delete:9b2f:x".parse(),
            Ok(PostAction::Delete("9b2f:x".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_unknown_actions() {
        for raw in ["", "publish", "edit:", "delete:", "drop:1", "Submit"] {
            assert!(raw.parse::<PostAction>().is_err(), "{raw:?} should be rejected");
        }
    }
}
