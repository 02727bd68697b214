//! Auth API: current user lookup, password sign-in, sign-out.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{check_status, SupabaseClient, UserClient};
use crate::posts::BackendError;
use crate::session::{Identity, SessionAccessor};

/// Tokens returned by a successful sign-in.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    /// Lifetime of `access_token` in seconds
    pub expires_in: u64,
    pub user: Identity,
}

#[derive(Debug, Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

impl SupabaseClient {
    /// Exchange email and password for an access token.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are rejected or the backend is unreachable.
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, BackendError> {
        debug!(email = %email, "Signing in with password");

        let response = self
            .http
            .post(self.auth_url("token"))
            .query(&[("grant_type", "password")])
            .header("apikey", &self.anon_key)
            .json(&PasswordGrant { email, password })
            .send()
            .await?;

        let session: AuthSession = check_status(response).await?.json().await?;
        Ok(session)
    }

    /// Revoke an access token. Failures are logged and ignored.
    pub async fn sign_out(&self, access_token: &str) {
        let request = self.authorize(self.http.post(self.auth_url("logout")), Some(access_token));
        match request.send().await {
            Ok(response) if response.status().is_success() => {
                debug!("Signed out");
            }
            Ok(response) => {
                warn!(status = %response.status(), "Sign-out rejected by backend");
            }
            Err(e) => {
                warn!(error = %e, "Sign-out request failed");
            }
        }
    }
}

#[async_trait]
impl SessionAccessor for UserClient {
    async fn current_user(&self) -> Option<Identity> {
        if !self.has_token() {
            debug!("No access token, treating as signed out");
            return None;
        }

        let request = self.request(self.backend.http.get(self.backend.auth_url("user")));
        let response = match request.send().await {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "Failed to reach auth API");
                return None;
            }
        };

        if !response.status().is_success() {
            debug!(status = %response.status(), "Access token not accepted");
            return None;
        }

        match response.json::<Identity>().await {
            Ok(identity) => Some(identity),
            Err(e) => {
                warn!(error = %e, "Failed to parse auth user response");
                None
            }
        }
    }
}
