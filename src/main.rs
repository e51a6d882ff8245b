//! retroblog CLI: serve the blog or build the static snapshot.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use retroblog::config::Config;
use retroblog::db::Store;
use retroblog::http::{self, AppState};
use retroblog::snapshot;

#[derive(Parser)]
#[command(
    name = "retroblog",
    version,
    about = "Personal blog server and static snapshot builder"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the blog server
    Serve {
        /// Listening port (overrides config and PORT)
        #[arg(long)]
        port: Option<u16>,
        /// Path to the SQLite database
        #[arg(long)]
        db: Option<PathBuf>,
    },
    /// Snapshot the dynamic pages into a static file tree
    Build {
        /// Output directory (default: dist)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Path to the SQLite database
        #[arg(long)]
        db: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = Config::load()?;

    match cli.command {
        Command::Serve { port, db } => {
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(db) = db {
                config.database = db;
            }
            serve(config).await
        }
        Command::Build { out, db } => {
            if let Some(db) = db {
                config.database = db;
            }
            let out = out.unwrap_or_else(|| config.dist_dir.clone());
            let store = Store::open(&config.database).context("Failed to open blog database")?;
            snapshot::generate(store, Arc::new(config), &out).await
        }
    }
}

async fn serve(config: Config) -> Result<()> {
    let store = Store::open(&config.database).context("Failed to open blog database")?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = http::router(AppState::new(store, Arc::new(config)));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("listening on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
