//! Public HTML pages.

use axum::extract::{Path, State};
use axum::response::Html;

use super::super::{AppError, AppState};
use crate::render;

/// GET / - the five most recent posts plus the latest status message.
pub async fn home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let posts = state.store.recent_posts_async(5).await?;
    let status = state
        .store
        .recent_statuses_async(1)
        .await?
        .into_iter()
        .next();
    Ok(Html(render::home_page(&posts, status.as_ref())))
}

/// GET /blog - every post, newest first.
pub async fn blog(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let posts = state.store.all_posts_async().await?;
    Ok(Html(render::blog_page(&posts)))
}

/// GET /post/{slug} - one post with its comments, newest comment first.
pub async fn post_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, AppError> {
    let post = state
        .store
        .post_by_slug_async(slug)
        .await?
        .ok_or(AppError::NotFound("Post not found"))?;
    let comments = state.store.comments_for_post_async(post.id).await?;
    Ok(Html(render::post_page(&post, &comments)))
}

/// GET /about
pub async fn about() -> Html<String> {
    Html(render::about_page())
}

/// GET /resume
pub async fn resume() -> Html<String> {
    Html(render::resume_page())
}
