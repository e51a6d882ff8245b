//! Login and logout.
//!
//! Credentials are compared in constant time against the configured admin
//! account. A bad pair gets a generic notice and the form again; nothing
//! distinguishes which half was wrong.

use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::response::{AppendHeaders, Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use subtle::ConstantTimeEq;
use tracing::info;

use super::super::session::{session_cookie, session_token};
use super::super::AppState;
use crate::config::AdminConfig;
use crate::render;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    username: String,
    password: String,
}

/// GET /login
pub async fn login_form() -> Html<String> {
    Html(render::login_page(None))
}

/// POST /login
pub async fn login(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    if credentials_match(&state.config.admin, &form.username, &form.password) {
        let token = state.sessions.create_logged_in();
        info!("admin login succeeded");
        (
            AppendHeaders([(header::SET_COOKIE, session_cookie(&token))]),
            Redirect::to("/admin"),
        )
            .into_response()
    } else {
        info!("admin login rejected");
        Html(render::login_page(Some("Invalid username or password")))
            .into_response()
    }
}

/// GET /logout - drop the session unconditionally and go home.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Redirect {
    if let Some(token) = session_token(&headers) {
        state.sessions.remove(&token);
    }
    Redirect::to("/")
}

fn credentials_match(admin: &AdminConfig, username: &str, password: &str) -> bool {
    let user_ok: bool = username
        .as_bytes()
        .ct_eq(admin.username.as_bytes())
        .into();
    let pass_ok: bool = password
        .as_bytes()
        .ct_eq(admin.password.as_bytes())
        .into();
    user_ok && pass_ok
}
