//! Server-side HTML rendering.
//!
//! Plain functions that build page bodies as strings; there is no template
//! engine. Everything that originates from the store or a form goes through
//! [`escape`] before interpolation.

use crate::db::{Comment, Post, Status};

/// Escape text for interpolation into HTML.
pub(crate) fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title} | Retro Blog</title>\n\
         <link rel=\"stylesheet\" href=\"/static/style.css\">\n</head>\n<body>\n\
         <nav><a href=\"/\">Home</a> <a href=\"/blog\">Blog</a> \
         <a href=\"/about\">About</a> <a href=\"/resume\">Resume</a></nav>\n\
         <main>\n{body}</main>\n</body>\n</html>\n"
    )
}

fn post_item(post: &Post) -> String {
    let excerpt = post
        .excerpt
        .as_deref()
        .map(|e| format!("<p>{}</p>", escape(e)))
        .unwrap_or_default();
    format!(
        "<li><a href=\"/post/{slug}\">{title}</a> <small>{date}</small>{excerpt}</li>\n",
        slug = escape(&post.slug),
        title = escape(&post.title),
        date = escape(&post.date_created),
    )
}

pub(crate) fn home_page(posts: &[Post], status: Option<&Status>) -> String {
    let mut body = String::from("<h1>Welcome to my corner of the web</h1>\n");
    if let Some(status) = status {
        body.push_str(&format!(
            "<p class=\"status\">{} <small>{}</small></p>\n",
            escape(&status.content),
            escape(&status.date_created)
        ));
    }
    body.push_str("<h2>Latest posts</h2>\n<ul class=\"posts\">\n");
    for post in posts {
        body.push_str(&post_item(post));
    }
    body.push_str("</ul>\n");
    layout("Home", &body)
}

pub(crate) fn blog_page(posts: &[Post]) -> String {
    let mut body = String::from("<h1>Blog</h1>\n<ul class=\"posts\">\n");
    for post in posts {
        body.push_str(&post_item(post));
    }
    body.push_str("</ul>\n");
    layout("Blog", &body)
}

pub(crate) fn post_page(post: &Post, comments: &[Comment]) -> String {
    let mut body = format!(
        "<article>\n<h1>{title}</h1>\n<p class=\"date\">{date}</p>\n<div class=\"content\">{content}</div>\n</article>\n",
        title = escape(&post.title),
        date = escape(&post.date_created),
        content = escape(&post.content),
    );
    body.push_str("<section class=\"comments\">\n<h2>Comments</h2>\n");
    if comments.is_empty() {
        body.push_str("<p>No comments yet.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for comment in comments {
            body.push_str(&format!(
                "<li><strong>{author}</strong> <small>{date}</small><p>{content}</p></li>\n",
                author = escape(&comment.author),
                date = escape(&comment.date_created),
                content = escape(&comment.content),
            ));
        }
        body.push_str("</ul>\n");
    }
    body.push_str("</section>\n");
    layout(&escape(&post.title), &body)
}

pub(crate) fn about_page() -> String {
    layout(
        "About",
        "<h1>About</h1>\n<p>Hand-coded blog about tech, learning and the old web.</p>\n",
    )
}

pub(crate) fn resume_page() -> String {
    layout(
        "Resume",
        "<h1>Resume</h1>\n<p>Computer science student. Projects, coursework and experiments live on the blog.</p>\n",
    )
}

pub(crate) fn login_page(notice: Option<&str>) -> String {
    let notice = notice
        .map(|n| format!("<p class=\"notice\">{}</p>\n", escape(n)))
        .unwrap_or_default();
    let body = format!(
        "<h1>Login</h1>\n{notice}\
         <form method=\"post\" action=\"/login\">\n\
         <label>Username <input type=\"text\" name=\"username\"></label>\n\
         <label>Password <input type=\"password\" name=\"password\"></label>\n\
         <button type=\"submit\">Log in</button>\n</form>\n"
    );
    layout("Login", &body)
}

pub(crate) fn admin_page(posts: &[Post], statuses: &[Status]) -> String {
    let mut body = String::from(
        "<h1>Admin</h1>\n<p><a href=\"/admin/new-post\">New post</a> <a href=\"/logout\">Log out</a></p>\n",
    );

    body.push_str(
        "<h2>Status</h2>\n<form method=\"post\" action=\"/admin/update-status\">\n\
         <textarea name=\"status\" rows=\"2\"></textarea>\n\
         <button type=\"submit\">Post status</button>\n</form>\n<ul class=\"statuses\">\n",
    );
    for status in statuses {
        body.push_str(&format!(
            "<li>{content} <small>{date}</small>\
             <form method=\"post\" action=\"/admin/delete-status/{id}\">\
             <button type=\"submit\">Delete</button></form></li>\n",
            content = escape(&status.content),
            date = escape(&status.date_created),
            id = status.id,
        ));
    }
    body.push_str("</ul>\n");

    body.push_str("<h2>Posts</h2>\n<ul class=\"admin-posts\">\n");
    for post in posts {
        body.push_str(&format!(
            "<li><a href=\"/post/{slug}\">{title}</a> <small>{date}</small>\
             <form method=\"post\" action=\"/admin/delete-post/{id}\">\
             <button type=\"submit\">Delete</button></form></li>\n",
            slug = escape(&post.slug),
            title = escape(&post.title),
            date = escape(&post.date_created),
            id = post.id,
        ));
    }
    body.push_str("</ul>\n");

    layout("Admin", &body)
}

pub(crate) fn new_post_page() -> String {
    layout(
        "New post",
        "<h1>New post</h1>\n\
         <form method=\"post\" action=\"/admin/new-post\">\n\
         <label>Title <input type=\"text\" name=\"title\"></label>\n\
         <label>Slug <input type=\"text\" name=\"slug\"></label>\n\
         <label>Excerpt <input type=\"text\" name=\"excerpt\"></label>\n\
         <label>Content <textarea name=\"content\" rows=\"12\"></textarea></label>\n\
         <button type=\"submit\">Publish</button>\n</form>\n",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_covers_html_metacharacters() {
        assert_eq!(
            escape("<script>\"&'</script>"),
            "&lt;script&gt;&quot;&amp;&#39;&lt;/script&gt;"
        );
        assert_eq!(escape("plain text"), "plain text");
    }

    #[test]
    fn post_page_escapes_store_content() {
        let post = Post {
            id: 1,
            title: "<b>title</b>".to_string(),
            content: "body".to_string(),
            excerpt: None,
            date_created: "2024-01-01 00:00:00".to_string(),
            slug: "t".to_string(),
        };
        let html = post_page(&post, &[]);
        assert!(html.contains("&lt;b&gt;title&lt;/b&gt;"));
        assert!(!html.contains("<b>title</b>"));
        assert!(html.contains("No comments yet."));
    }
}
