//! Tests for the SQLite-backed store.

use super::*;
use tempfile::TempDir;

fn open_store(tmp: &TempDir) -> Store {
    Store::open(tmp.path().join("blog.db")).unwrap()
}

fn new_post(slug: &str) -> NewPost {
    NewPost {
        title: format!("Post {slug}"),
        content: "content".to_string(),
        excerpt: Some("excerpt".to_string()),
        slug: slug.to_string(),
    }
}

#[test]
fn first_open_seeds_four_posts() {
    let tmp = TempDir::new().unwrap();
    let store = open_store(&tmp);

    let posts = store.all_posts().unwrap();
    assert_eq!(posts.len(), 4);

    let slugs: Vec<&str> = posts.iter().map(|p| p.slug.as_str()).collect();
    for expected in [
        "my-first-post",
        "adventures-in-indie-coding",
        "retro-web-finds",
        "learning-computer-science",
    ] {
        assert!(slugs.contains(&expected), "missing seed slug {expected}");
    }
}

#[test]
fn reopen_does_not_duplicate_seeds() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("blog.db");

    let _first = Store::open(&path).unwrap();
    let second = Store::open(&path).unwrap();

    assert_eq!(second.post_count().unwrap(), 4);
}

#[test]
fn recent_posts_respects_limit() {
    let tmp = TempDir::new().unwrap();
    let store = open_store(&tmp);

    store.insert_post(&new_post("fifth")).unwrap();
    store.insert_post(&new_post("sixth")).unwrap();

    let recent = store.recent_posts(5).unwrap();
    assert_eq!(recent.len(), 5);

    let all = store.all_posts().unwrap();
    assert_eq!(all.len(), 6);
}

#[test]
fn posts_are_ordered_newest_first() {
    let tmp = TempDir::new().unwrap();
    let store = open_store(&tmp);

    store.insert_post(&new_post("latest")).unwrap();

    let posts = store.all_posts().unwrap();
    assert_eq!(posts[0].slug, "latest");
}

#[test]
fn insert_post_is_retrievable_by_slug() {
    let tmp = TempDir::new().unwrap();
    let store = open_store(&tmp);
    let before = store.post_count().unwrap();

    store
        .insert_post(&NewPost {
            title: "X".to_string(),
            content: "Y".to_string(),
            excerpt: Some("Z".to_string()),
            slug: "x".to_string(),
        })
        .unwrap();

    assert_eq!(store.post_count().unwrap(), before + 1);

    let post = store.post_by_slug("x").unwrap().unwrap();
    assert_eq!(post.title, "X");
    assert_eq!(post.content, "Y");
    assert_eq!(post.excerpt.as_deref(), Some("Z"));
}

#[test]
fn post_by_unknown_slug_is_none() {
    let tmp = TempDir::new().unwrap();
    let store = open_store(&tmp);

    assert!(store.post_by_slug("no-such-post").unwrap().is_none());
}

#[test]
fn duplicate_slug_leaves_store_unchanged() {
    let tmp = TempDir::new().unwrap();
    let store = open_store(&tmp);
    let before = store.post_count().unwrap();

    let result = store.insert_post(&new_post("my-first-post"));
    assert!(matches!(result, Err(StoreError::DuplicateSlug)));
    assert_eq!(store.post_count().unwrap(), before);
}

#[test]
fn delete_post_removes_its_comments() {
    let tmp = TempDir::new().unwrap();
    let store = open_store(&tmp);

    let post = store.post_by_slug("my-first-post").unwrap().unwrap();
    store.add_comment(post.id, "visitor", "great post").unwrap();
    store.add_comment(post.id, "friend", "welcome!").unwrap();
    assert_eq!(store.comment_count(post.id).unwrap(), 2);

    store.delete_post(post.id).unwrap();

    assert!(store.post_by_slug("my-first-post").unwrap().is_none());
    assert_eq!(store.comment_count(post.id).unwrap(), 0);
}

#[test]
fn delete_unknown_post_is_a_noop() {
    let tmp = TempDir::new().unwrap();
    let store = open_store(&tmp);

    store.delete_post(9999).unwrap();
    assert_eq!(store.post_count().unwrap(), 4);
}

#[test]
fn comments_are_ordered_newest_first() {
    let tmp = TempDir::new().unwrap();
    let store = open_store(&tmp);

    let post = store.post_by_slug("retro-web-finds").unwrap().unwrap();
    store.add_comment(post.id, "a", "first").unwrap();
    store.add_comment(post.id, "b", "second").unwrap();

    let comments = store.comments_for_post(post.id).unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].content, "second");
    assert_eq!(comments[1].content, "first");
}

#[test]
fn blank_status_is_skipped() {
    let tmp = TempDir::new().unwrap();
    let store = open_store(&tmp);

    assert!(!store.add_status("   \t  ").unwrap());
    assert!(!store.add_status("").unwrap());
    assert_eq!(store.status_count().unwrap(), 0);
}

#[test]
fn status_lifecycle() {
    let tmp = TempDir::new().unwrap();
    let store = open_store(&tmp);

    assert!(store.add_status("first update").unwrap());
    assert!(store.add_status("second update").unwrap());

    let statuses = store.recent_statuses(5).unwrap();
    assert_eq!(statuses.len(), 2);
    assert_eq!(statuses[0].content, "second update");

    store.delete_status(statuses[0].id).unwrap();
    assert_eq!(store.status_count().unwrap(), 1);

    // Deleting an unknown id is a silent no-op.
    store.delete_status(12345).unwrap();
    assert_eq!(store.status_count().unwrap(), 1);
}

#[test]
fn slugs_covers_every_post() {
    let tmp = TempDir::new().unwrap();
    let store = open_store(&tmp);

    let slugs = store.slugs().unwrap();
    assert_eq!(slugs.len(), 4);
    assert!(slugs.contains(&"learning-computer-science".to_string()));
}
