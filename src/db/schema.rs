//! Schema initialization and seed data.
//!
//! The schema is additive-only: three `CREATE TABLE IF NOT EXISTS`
//! statements, safe to run on every process start. Four sample posts are
//! seeded exactly once, when the posts table is first found empty.

use rusqlite::{params, Connection};

use super::StoreError;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS posts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    excerpt TEXT,
    date_created TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    slug TEXT UNIQUE
);

CREATE TABLE IF NOT EXISTS comments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    post_id INTEGER,
    author TEXT NOT NULL,
    content TEXT NOT NULL,
    date_created TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY (post_id) REFERENCES posts (id)
);

CREATE TABLE IF NOT EXISTS status (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    content TEXT NOT NULL,
    date_created TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);
";

/// Sample posts inserted when the posts table is empty:
/// (title, content, excerpt, slug).
const SEED_POSTS: [(&str, &str, &str, &str); 4] = [
    (
        "My First Post",
        "Welcome to my first blog post! This is where my story begins. I'm excited to share my journey in tech, learning, and life.",
        "Welcome to my first blog post! This is where my story begins.",
        "my-first-post",
    ),
    (
        "Adventures in Indie Coding",
        "How I started hand-coding my own blog and why I love the old web. Exploring the beauty of simple HTML and CSS.",
        "How I started hand-coding my own blog and why I love the old web.",
        "adventures-in-indie-coding",
    ),
    (
        "Retro Web Finds",
        "Sharing my favorite vintage sites and pixel art from the 90s. A nostalgic journey through web history.",
        "Sharing my favorite vintage sites and pixel art from the 90s.",
        "retro-web-finds",
    ),
    (
        "Learning Computer Science",
        "My experiences as an 18-year-old CS student in India. The challenges, discoveries, and exciting projects.",
        "My experiences as an 18-year-old CS student in India.",
        "learning-computer-science",
    ),
];

/// Ensure the three tables exist and seed the sample posts if the posts
/// table is empty. Idempotent.
pub(crate) fn init(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(SCHEMA)?;

    let count: i64 = conn.query_row("SELECT COUNT(*) FROM posts", [], |row| row.get(0))?;
    if count == 0 {
        for (title, content, excerpt, slug) in SEED_POSTS {
            conn.execute(
                "INSERT INTO posts (title, content, excerpt, slug) VALUES (?1, ?2, ?3, ?4)",
                params![title, content, excerpt, slug],
            )?;
        }
    }

    Ok(())
}
