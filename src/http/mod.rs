//! HTTP surface: application state, router assembly and the error type.
//!
//! Public pages, the posts API and the login flow are open; the admin
//! routes sit behind the session gate middleware. Request logging comes
//! from tower-http's `TraceLayer`.

pub mod handlers;
pub mod session;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{middleware, Router};
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::config::Config;
use crate::db::{Store, StoreError};
use session::SessionStore;

use handlers::{admin, api, auth, pages};

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub config: Arc<Config>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(store: Store, config: Arc<Config>) -> Self {
        Self {
            store,
            config,
            sessions: SessionStore::new(),
        }
    }
}

/// Handler-level errors mapped to HTTP responses.
///
/// The two literal bodies are part of the public contract: an unknown slug
/// is a plain-text 404 and a duplicate slug is a plain-text 400. Everything
/// else is a logged 500.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(&'static str),

    #[error("{0}")]
    Conflict(&'static str),

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateSlug => Self::Conflict("Error: Slug already exists"),
            other => Self::Store(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            Self::Conflict(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            Self::Store(err) => {
                error!("store failure: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}

/// Assemble the full application router.
pub fn router(state: AppState) -> Router {
    let admin_routes = Router::new()
        .route("/admin", get(admin::panel))
        .route(
            "/admin/new-post",
            get(admin::new_post_form).post(admin::create_post),
        )
        .route("/admin/delete-post/{id}", post(admin::delete_post))
        .route("/admin/update-status", post(admin::update_status))
        .route("/admin/delete-status/{id}", post(admin::delete_status))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            session::require_login,
        ));

    Router::new()
        .route("/", get(pages::home))
        .route("/blog", get(pages::blog))
        .route("/post/{slug}", get(pages::post_detail))
        .route("/about", get(pages::about))
        .route("/resume", get(pages::resume))
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/api/posts", get(api::posts))
        .merge(admin_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
