//! Client for the hosted backend service.
//!
//! Talks to the auth API (`/auth/v1`) and the auto-generated REST API over
//! the posts table (`/rest/v1`). Every request carries the project's anon key
//! and, when a user is signed in, that user's access token, so the backend's
//! row-level security policies see who is calling.

mod auth;
mod rest;

use std::time::Duration;

use reqwest::RequestBuilder;
use serde::Deserialize;

pub use auth::AuthSession;

use crate::config::Config;
use crate::posts::BackendError;

/// Shared, cheaply cloneable handle to the backend.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
    posts_table: String,
}

impl SupabaseClient {
    /// Create a new client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self, BackendError> {
        Self::with_settings(
            &config.supabase_url,
            &config.supabase_anon_key,
            &config.posts_table,
            config.http_timeout,
        )
    }

    /// Create a client from explicit settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_settings(
        base_url: &str,
        anon_key: &str,
        posts_table: &str,
        timeout: Duration,
    ) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BackendError::transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            posts_table: posts_table.to_string(),
        })
    }

    /// Bind this client to one caller's access token (or none).
    #[must_use]
    pub fn for_user(&self, access_token: Option<String>) -> UserClient {
        UserClient {
            backend: self.clone(),
            access_token: access_token.filter(|t| !t.is_empty()),
        }
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.base_url)
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.posts_table)
    }

    /// Attach the API key and bearer token to a request.
    fn authorize(&self, request: RequestBuilder, access_token: Option<&str>) -> RequestBuilder {
        let bearer = access_token.unwrap_or(&self.anon_key);
        request
            .header("apikey", &self.anon_key)
            .bearer_auth(bearer)
    }
}

/// The backend as seen by one caller.
///
/// Implements both [`crate::session::SessionAccessor`] and
/// [`crate::posts::PostRepository`].
#[derive(Debug, Clone)]
pub struct UserClient {
    backend: SupabaseClient,
    access_token: Option<String>,
}

impl UserClient {
    /// Whether a token is attached at all. Says nothing about its validity.
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.access_token.is_some()
    }

    fn request(&self, request: RequestBuilder) -> RequestBuilder {
        self.backend
            .authorize(request, self.access_token.as_deref())
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(e: reqwest::Error) -> Self {
        Self::new(e.status().map(|s| s.as_u16()), e.to_string())
    }
}

/// Error body shapes returned by the REST and auth APIs.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    msg: Option<String>,
    error_description: Option<String>,
}

/// Turn a non-success response into a [`BackendError`].
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown".to_string());
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.message.or(b.msg).or(b.error_description))
        .unwrap_or(body);

    Err(BackendError::rejected(status.as_u16(), message))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> SupabaseClient {
        SupabaseClient::with_settings(base, "anon", "posts", Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_urls_strip_trailing_slash() {
        let client = client("https://project.supabase.co/");
        assert_eq!(
            client.table_url(),
            "https://project.supabase.co/rest/v1/posts"
        );
        assert_eq!(
            client.auth_url("user"),
            "https://project.supabase.co/auth/v1/user"
        );
    }

    #[test]
    fn test_for_user_ignores_empty_token() {
        let client = client("https://project.supabase.co");
        assert!(!client.for_user(Some(String::new())).has_token());
        assert!(!client.for_user(None).has_token());
        assert!(client.for_user(Some("jwt".to_string())).has_token());
    }
}
