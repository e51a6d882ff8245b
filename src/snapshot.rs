//! Static snapshot generator.
//!
//! One-shot, sequential batch that renders the dynamic pages into a file
//! tree suitable for a static host. The routes are driven through the
//! in-process router rather than a network socket, so the output is exactly
//! what the server would have sent.

use anyhow::{ensure, Context, Result};
use axum::body::{Body, Bytes};
use axum::http::Request;
use axum::Router;
use http_body_util::BodyExt;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};

use crate::config::Config;
use crate::db::Store;
use crate::http::{router, AppState};

/// Fixed pages snapshotted on every run: (route, output file).
const FIXED_PAGES: [(&str, &str); 4] = [
    ("/", "index.html"),
    ("/about", "about.html"),
    ("/blog", "blog.html"),
    ("/resume", "resume.html"),
];

/// Generate the static site into `out_dir`.
///
/// Copies the asset trees verbatim, writes the four fixed pages, then one
/// `post/<slug>.html` per post. A failure enumerating slugs is logged and
/// the fixed pages still complete.
///
/// # Errors
///
/// Returns an error if the output tree cannot be written or a fixed page
/// fails to render.
pub async fn generate(store: Store, config: Arc<Config>, out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    for src in [&config.static_dir, &config.assets_dir] {
        if src.is_dir() {
            let name = src
                .file_name()
                .with_context(|| format!("Asset directory has no name: {}", src.display()))?;
            replace_dir(src, &out_dir.join(name))?;
            info!("copied {} into snapshot", src.display());
        }
    }

    let app = router(AppState::new(store.clone(), config));

    for (route, file) in FIXED_PAGES {
        let body = fetch(app.clone(), route)
            .await
            .with_context(|| format!("Failed to render {route}"))?;
        fs::write(out_dir.join(file), &body)?;
        info!("wrote {file}");
    }

    match store.slugs_async().await {
        Ok(slugs) => {
            let post_dir = out_dir.join("post");
            fs::create_dir_all(&post_dir)?;
            for slug in slugs {
                let body = fetch(app.clone(), &format!("/post/{slug}"))
                    .await
                    .with_context(|| format!("Failed to render post {slug}"))?;
                fs::write(post_dir.join(format!("{slug}.html")), &body)?;
                info!("wrote post/{slug}.html");
            }
        }
        Err(err) => {
            // Partial-failure tolerant: the fixed pages above are already
            // on disk even when the post listing cannot be read.
            error!("failed to enumerate posts for snapshot: {err}");
        }
    }

    info!("snapshot complete in {}", out_dir.display());
    Ok(())
}

/// Drive one route through the router and return the response body.
async fn fetch(app: Router, uri: &str) -> Result<Bytes> {
    use tower::ServiceExt;

    let response = app
        .oneshot(Request::get(uri).body(Body::empty())?)
        .await?;
    ensure!(
        response.status().is_success(),
        "GET {uri} returned {}",
        response.status()
    );
    Ok(response.into_body().collect().await?.to_bytes())
}

/// Replace `dest` with a verbatim copy of `src`.
fn replace_dir(src: &Path, dest: &Path) -> Result<()> {
    if dest.exists() {
        fs::remove_dir_all(dest)
            .with_context(|| format!("Failed to clear {}", dest.display()))?;
    }
    copy_dir_recursive(src, dest)
}

fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<()> {
    fs::create_dir_all(dest)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let path = entry.path();
        let dest_path = dest.join(entry.file_name());
        if path.is_dir() {
            copy_dir_recursive(&path, &dest_path)?;
        } else {
            fs::copy(&path, &dest_path)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn snapshot_writes_fixed_pages_and_posts() {
        let tmp = TempDir::new().unwrap();
        let store = Store::open(tmp.path().join("blog.db")).unwrap();

        let static_dir = tmp.path().join("static");
        fs::create_dir_all(&static_dir).unwrap();
        fs::write(static_dir.join("style.css"), "body { color: green; }").unwrap();

        let config = Config {
            static_dir,
            assets_dir: tmp.path().join("assets"), // absent, skipped
            ..Config::default()
        };

        let out = tmp.path().join("dist");
        generate(store, Arc::new(config), &out).await.unwrap();

        for file in ["index.html", "about.html", "blog.html", "resume.html"] {
            assert!(out.join(file).is_file(), "missing {file}");
        }
        for slug in [
            "my-first-post",
            "adventures-in-indie-coding",
            "retro-web-finds",
            "learning-computer-science",
        ] {
            assert!(
                out.join("post").join(format!("{slug}.html")).is_file(),
                "missing post/{slug}.html"
            );
        }
        assert!(out.join("static").join("style.css").is_file());

        let blog = fs::read_to_string(out.join("blog.html")).unwrap();
        assert!(blog.contains("my-first-post"));
    }

    #[tokio::test]
    async fn rerun_replaces_existing_asset_copy() {
        let tmp = TempDir::new().unwrap();
        let store = Store::open(tmp.path().join("blog.db")).unwrap();

        let static_dir = tmp.path().join("static");
        fs::create_dir_all(&static_dir).unwrap();
        fs::write(static_dir.join("style.css"), "v1").unwrap();

        let config = Arc::new(Config {
            static_dir: static_dir.clone(),
            assets_dir: tmp.path().join("assets"),
            ..Config::default()
        });

        let out = tmp.path().join("dist");
        generate(store.clone(), config.clone(), &out).await.unwrap();

        // A stale file from the previous copy disappears on rerun.
        fs::write(out.join("static").join("stale.css"), "old").unwrap();
        fs::write(static_dir.join("style.css"), "v2").unwrap();
        generate(store, config, &out).await.unwrap();

        assert!(!out.join("static").join("stale.css").exists());
        assert_eq!(
            fs::read_to_string(out.join("static").join("style.css")).unwrap(),
            "v2"
        );
    }
}
