//! Route handlers, grouped by surface.
//!
//! - [`pages`] - public HTML pages
//! - [`auth`] - login and logout
//! - [`admin`] - gated content management
//! - [`api`] - the JSON posts API

pub mod admin;
pub mod api;
pub mod auth;
pub mod pages;
