//! Async wrappers over the synchronous store operations.
//!
//! These wrap the blocking SQLite calls in `spawn_blocking` so handlers can
//! await them without stalling the runtime. Each wrapper clones the store
//! handle into the task; the connection it opens is released before the
//! wrapper resolves.

use super::{Comment, NewPost, Post, Status, Store, StoreError};

impl Store {
    pub async fn recent_posts_async(&self, limit: u32) -> Result<Vec<Post>, StoreError> {
        let store = self.clone();
        tokio::task::spawn_blocking(move || store.recent_posts(limit)).await?
    }

    pub async fn all_posts_async(&self) -> Result<Vec<Post>, StoreError> {
        let store = self.clone();
        tokio::task::spawn_blocking(move || store.all_posts()).await?
    }

    pub async fn post_by_slug_async(&self, slug: String) -> Result<Option<Post>, StoreError> {
        let store = self.clone();
        tokio::task::spawn_blocking(move || store.post_by_slug(&slug)).await?
    }

    pub async fn insert_post_async(&self, post: NewPost) -> Result<(), StoreError> {
        let store = self.clone();
        tokio::task::spawn_blocking(move || store.insert_post(&post)).await?
    }

    pub async fn delete_post_async(&self, id: i64) -> Result<(), StoreError> {
        let store = self.clone();
        tokio::task::spawn_blocking(move || store.delete_post(id)).await?
    }

    pub async fn comments_for_post_async(&self, post_id: i64) -> Result<Vec<Comment>, StoreError> {
        let store = self.clone();
        tokio::task::spawn_blocking(move || store.comments_for_post(post_id)).await?
    }

    pub async fn add_status_async(&self, content: String) -> Result<bool, StoreError> {
        let store = self.clone();
        tokio::task::spawn_blocking(move || store.add_status(&content)).await?
    }

    pub async fn recent_statuses_async(&self, limit: u32) -> Result<Vec<Status>, StoreError> {
        let store = self.clone();
        tokio::task::spawn_blocking(move || store.recent_statuses(limit)).await?
    }

    pub async fn delete_status_async(&self, id: i64) -> Result<(), StoreError> {
        let store = self.clone();
        tokio::task::spawn_blocking(move || store.delete_status(id)).await?
    }

    pub async fn slugs_async(&self) -> Result<Vec<String>, StoreError> {
        let store = self.clone();
        tokio::task::spawn_blocking(move || store.slugs()).await?
    }
}
