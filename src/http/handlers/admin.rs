//! Gated content management handlers.
//!
//! Every route here sits behind the session gate. Mutations redirect back
//! to the panel; the one surfaced failure is a duplicate slug on insert.

use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use axum::Form;
use serde::Deserialize;

use super::super::{AppError, AppState};
use crate::db::NewPost;
use crate::render;

/// GET /admin - all posts plus the five most recent status messages.
pub async fn panel(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let posts = state.store.all_posts_async().await?;
    let statuses = state.store.recent_statuses_async(5).await?;
    Ok(Html(render::admin_page(&posts, &statuses)))
}

/// GET /admin/new-post
pub async fn new_post_form() -> Html<String> {
    Html(render::new_post_page())
}

#[derive(Debug, Deserialize)]
pub struct NewPostForm {
    title: String,
    content: String,
    excerpt: String,
    slug: String,
}

/// POST /admin/new-post
///
/// A duplicate slug surfaces as a 400 with a literal error body; the store
/// is left unchanged.
pub async fn create_post(
    State(state): State<AppState>,
    Form(form): Form<NewPostForm>,
) -> Result<Redirect, AppError> {
    state
        .store
        .insert_post_async(NewPost {
            title: form.title,
            content: form.content,
            excerpt: Some(form.excerpt),
            slug: form.slug,
        })
        .await?;
    Ok(Redirect::to("/admin"))
}

/// POST /admin/delete-post/{id} - comments first, then the post.
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    state.store.delete_post_async(id).await?;
    Ok(Redirect::to("/admin"))
}

#[derive(Debug, Deserialize)]
pub struct StatusForm {
    status: String,
}

/// POST /admin/update-status - blank text is silently skipped.
pub async fn update_status(
    State(state): State<AppState>,
    Form(form): Form<StatusForm>,
) -> Result<Redirect, AppError> {
    state.store.add_status_async(form.status).await?;
    Ok(Redirect::to("/admin"))
}

/// POST /admin/delete-status/{id} - silent no-op on unknown id.
pub async fn delete_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    state.store.delete_status_async(id).await?;
    Ok(Redirect::to("/admin"))
}
