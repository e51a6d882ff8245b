//! Embedded SQLite store for posts, comments and status messages.
//!
//! [`Store`] holds only the database path. Every operation opens a fresh
//! connection, runs its statements, and releases the connection on all exit
//! paths when the handle drops. There is no pooling and no transaction spans
//! more than one operation; each write commits immediately. The store
//! serializes concurrent writers itself.

mod async_ops;
mod models;
mod schema;
#[cfg(test)]
mod tests;

pub use models::{Comment, NewPost, Post, Status};

use rusqlite::{params, Connection, ErrorCode};
use std::path::{Path, PathBuf};

/// Typed store errors.
///
/// `DuplicateSlug` is the one condition callers branch on: a post insert
/// that collides with an existing slug. Everything else is a fatal request
/// failure.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A post insert violated the slug uniqueness constraint.
    #[error("slug already exists")]
    DuplicateSlug,

    /// Any other SQLite failure.
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    /// Filesystem failure while preparing the database location.
    #[error("failed to prepare database directory: {0}")]
    Io(#[from] std::io::Error),

    /// A blocking store task failed to complete.
    #[error("store task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Handle to the blog database.
///
/// Cheap to clone; each clone opens its own connections.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Open the store at `path`, creating parent directories, the database
    /// file, the schema and the seed posts as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the schema
    /// cannot be initialized.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let store = Self { path };
        let conn = store.conn()?;
        schema::init(&conn)?;
        Ok(store)
    }

    /// Open a fresh connection. Dropped (and thereby released) at the end of
    /// the calling operation, on every exit path.
    fn conn(&self) -> Result<Connection, StoreError> {
        Ok(Connection::open(&self.path)?)
    }

    /// The most recent `limit` posts, newest first.
    pub fn recent_posts(&self, limit: u32) -> Result<Vec<Post>, StoreError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT * FROM posts ORDER BY date_created DESC, id DESC LIMIT ?1",
        )?;
        let posts = stmt
            .query_map([limit], |row| Post::from_row(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(posts)
    }

    /// All posts, newest first.
    pub fn all_posts(&self) -> Result<Vec<Post>, StoreError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT * FROM posts ORDER BY date_created DESC, id DESC")?;
        let posts = stmt
            .query_map([], |row| Post::from_row(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(posts)
    }

    /// Look up a single post by its slug.
    pub fn post_by_slug(&self, slug: &str) -> Result<Option<Post>, StoreError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT * FROM posts WHERE slug = ?1")?;
        let mut rows = stmt.query_map([slug], |row| Post::from_row(row))?;
        match rows.next() {
            Some(post) => Ok(Some(post?)),
            None => Ok(None),
        }
    }

    /// Insert a new post.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateSlug`] when the slug is already taken;
    /// the store is left unchanged in that case.
    pub fn insert_post(&self, post: &NewPost) -> Result<(), StoreError> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO posts (title, content, excerpt, slug) VALUES (?1, ?2, ?3, ?4)",
            params![post.title, post.content, post.excerpt, post.slug],
        )
        .map_err(|err| match err {
            rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation => {
                StoreError::DuplicateSlug
            }
            other => StoreError::Sqlite(other),
        })?;
        Ok(())
    }

    /// Delete a post and its comments. Referential cleanup is manual: the
    /// comments go first, then the post. Deleting an unknown id is a silent
    /// no-op.
    pub fn delete_post(&self, id: i64) -> Result<(), StoreError> {
        let conn = self.conn()?;
        conn.execute("DELETE FROM comments WHERE post_id = ?1", [id])?;
        conn.execute("DELETE FROM posts WHERE id = ?1", [id])?;
        Ok(())
    }

    /// Comments for a post, newest first.
    pub fn comments_for_post(&self, post_id: i64) -> Result<Vec<Comment>, StoreError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT * FROM comments WHERE post_id = ?1 ORDER BY date_created DESC, id DESC",
        )?;
        let comments = stmt
            .query_map([post_id], |row| Comment::from_row(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(comments)
    }

    /// Attach a comment to a post.
    ///
    /// No route exposes this yet; the schema and the detail page anticipate
    /// it, and seeding and tests exercise it.
    pub fn add_comment(&self, post_id: i64, author: &str, content: &str) -> Result<(), StoreError> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO comments (post_id, author, content) VALUES (?1, ?2, ?3)",
            params![post_id, author, content],
        )?;
        Ok(())
    }

    /// Insert a status message unless it is blank after trimming.
    ///
    /// Returns `true` when a row was inserted, `false` when the text was
    /// skipped.
    pub fn add_status(&self, content: &str) -> Result<bool, StoreError> {
        if content.trim().is_empty() {
            return Ok(false);
        }
        let conn = self.conn()?;
        conn.execute("INSERT INTO status (content) VALUES (?1)", [content])?;
        Ok(true)
    }

    /// The most recent `limit` status messages, newest first.
    pub fn recent_statuses(&self, limit: u32) -> Result<Vec<Status>, StoreError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT * FROM status ORDER BY date_created DESC, id DESC LIMIT ?1",
        )?;
        let statuses = stmt
            .query_map([limit], |row| Status::from_row(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(statuses)
    }

    /// Delete a status message by id. Silent no-op if the id is unknown.
    pub fn delete_status(&self, id: i64) -> Result<(), StoreError> {
        let conn = self.conn()?;
        conn.execute("DELETE FROM status WHERE id = ?1", [id])?;
        Ok(())
    }

    /// All post slugs, for the snapshot generator.
    pub fn slugs(&self) -> Result<Vec<String>, StoreError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT slug FROM posts")?;
        let slugs = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(slugs)
    }

    /// Number of posts in the store.
    pub fn post_count(&self) -> Result<i64, StoreError> {
        let conn = self.conn()?;
        Ok(conn.query_row("SELECT COUNT(*) FROM posts", [], |row| row.get(0))?)
    }

    /// Number of status messages in the store.
    pub fn status_count(&self) -> Result<i64, StoreError> {
        let conn = self.conn()?;
        Ok(conn.query_row("SELECT COUNT(*) FROM status", [], |row| row.get(0))?)
    }

    /// Number of comments attached to the given post.
    pub fn comment_count(&self, post_id: i64) -> Result<i64, StoreError> {
        let conn = self.conn()?;
        Ok(conn.query_row(
            "SELECT COUNT(*) FROM comments WHERE post_id = ?1",
            [post_id],
            |row| row.get(0),
        )?)
    }
}
