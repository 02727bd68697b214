//! Session cookie handling.
//!
//! The browser holds the backend access token in an `HttpOnly` cookie. The
//! server never stores it; each request hands it back to the backend, which
//! decides whether it is still valid.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};

pub const SESSION_COOKIE: &str = "sb-access-token";

/// Access token from the session cookie, if the browser sent one.
#[derive(Debug, Clone, Default)]
pub struct AccessToken(pub Option<String>);

#[async_trait]
impl<S> FromRequestParts<S> for AccessToken
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|h| h.to_str().ok())
            .flat_map(|cookies| cookies.split(';'))
            .find_map(|cookie| {
                cookie
                    .trim()
                    .strip_prefix(SESSION_COOKIE)
                    .and_then(|rest| rest.strip_prefix('='))
            })
            .filter(|token| !token.is_empty())
            .map(ToString::to_string);

        Ok(Self(token))
    }
}

/// `Set-Cookie` value storing a fresh access token.
#[must_use]
pub fn session_cookie(token: &str, max_age_secs: u64, secure: bool) -> String {
    let secure = if secure { "; Secure" } else { "" };
    format!("{SESSION_COOKIE}={token}; HttpOnly{secure}; SameSite=Lax; Path=/; Max-Age={max_age_secs}")
}

/// `Set-Cookie` value that removes the session cookie.
#[must_use]
pub fn clear_session_cookie(secure: bool) -> String {
    session_cookie("", 0, secure)
}
