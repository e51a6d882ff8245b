//! Personal-blog content manager.
//!
//! CRUD over an embedded SQLite store, served over HTTP with axum, plus a
//! one-shot snapshot command that renders the dynamic pages into a static
//! file tree for deployment to a static host.

pub mod config;
pub mod db;
pub mod http;
pub mod render;
pub mod snapshot;
