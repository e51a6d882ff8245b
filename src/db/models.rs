//! Row types for the blog store.
//!
//! Timestamps are surfaced exactly as SQLite stores them
//! (`CURRENT_TIMESTAMP` text); nothing in the system parses them.

use rusqlite::Row;
use serde::Serialize;

/// A published blog post.
///
/// Serializes to the posts API shape: exactly `id`, `title`, `content`,
/// `excerpt`, `date_created` and `slug`.
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub date_created: String,
    pub slug: String,
}

impl Post {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            title: row.get("title")?,
            content: row.get("content")?,
            excerpt: row.get("excerpt")?,
            date_created: row.get("date_created")?,
            slug: row.get("slug")?,
        })
    }
}

/// Fields for a new post submission. The id and timestamp are assigned by
/// the store.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub slug: String,
}

/// A comment attached to a post.
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub author: String,
    pub content: String,
    pub date_created: String,
}

impl Comment {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            post_id: row.get("post_id")?,
            author: row.get("author")?,
            content: row.get("content")?,
            date_created: row.get("date_created")?,
        })
    }
}

/// A short status message shown on the homepage and admin panel.
#[derive(Debug, Clone)]
pub struct Status {
    pub id: i64,
    pub content: String,
    pub date_created: String,
}

impl Status {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            content: row.get("content")?,
            date_created: row.get("date_created")?,
        })
    }
}
