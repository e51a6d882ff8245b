//! In-memory sessions and the admin gate middleware.
//!
//! A session is a random token in an HttpOnly cookie mapped to a logged-in
//! marker. The gate wraps the admin routes: no valid marker means a redirect
//! to `/login` and the wrapped handler never runs. Sessions live in process
//! memory and do not survive a restart.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{header, HeaderMap};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use dashmap::DashMap;
use uuid::Uuid;

use super::AppState;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "retroblog_session";

#[derive(Debug, Clone)]
struct Session {
    logged_in: bool,
}

/// Concurrent session table keyed by cookie token.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<DashMap<String, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a logged-in session and return its token.
    pub fn create_logged_in(&self) -> String {
        let token = Uuid::new_v4().to_string();
        self.inner
            .insert(token.clone(), Session { logged_in: true });
        token
    }

    /// Whether the token maps to a logged-in session.
    pub fn is_logged_in(&self, token: &str) -> bool {
        self.inner.get(token).map(|s| s.logged_in).unwrap_or(false)
    }

    /// Drop a session unconditionally.
    pub fn remove(&self, token: &str) {
        self.inner.remove(token);
    }
}

/// Extract the session token from the request's Cookie header.
pub(crate) fn session_token(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').map(str::trim).find_map(|pair| {
        let rest = pair.strip_prefix(SESSION_COOKIE)?;
        let value = rest.strip_prefix('=')?;
        Some(value.to_string())
    })
}

/// Build the Set-Cookie value for a freshly created session.
pub(crate) fn session_cookie(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax")
}

/// Session gate for the admin routes.
///
/// Short-circuits with a redirect to the login page when the request
/// carries no logged-in session.
pub async fn require_login(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let logged_in = session_token(request.headers())
        .map(|token| state.sessions.is_logged_in(&token))
        .unwrap_or(false);

    if !logged_in {
        return Redirect::to("/login").into_response();
    }

    next.run(request).await
}
