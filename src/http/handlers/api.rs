//! JSON posts API.

use axum::extract::State;
use axum::Json;

use super::super::{AppError, AppState};
use crate::db::Post;

/// GET /api/posts - every post by recency, as a sequence of objects with
/// exactly `{id, title, content, excerpt, date_created, slug}`.
pub async fn posts(State(state): State<AppState>) -> Result<Json<Vec<Post>>, AppError> {
    let posts = state.store.all_posts_async().await?;
    Ok(Json(posts))
}
