//! # vt-server
//!
//! Vitrine submission server.
//!
//! Exposes the portfolio submission endpoint and wires the publish
//! pipeline together: multipart form in, image archived locally, asset
//! and patched site document committed to the hosting repository, record
//! appended to the local JSON list.
//!
//! ## Usage
//!
//! ```text
//! GITHUB_TOKEN=... vt-server --config vitrine.toml
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use vt_projects::ProjectStore;
use vt_publish::{DocumentSpec, Publisher};
use vt_remote::GitHubStore;

mod config;
mod routes;

use config::ServerConfig;
use routes::{build_app, AppState};

/// Vitrine submission server.
#[derive(Parser)]
#[command(name = "vt-server", about = "Vitrine portfolio submission server")]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = "vitrine.toml")]
    config: PathBuf,

    /// Override the bind address from the config file.
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("vt_server=info".parse()?)
                .add_directive("vt_publish=info".parse()?)
                .add_directive("vt_remote=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::load(&cli.config)?;

    let token = std::env::var(&config.token_env)
        .with_context(|| format!("{} is not set", config.token_env))?;

    let store = GitHubStore::new(config.repo.clone(), token)?;
    let publisher = Publisher::new(
        store,
        config.repo.clone(),
        DocumentSpec {
            path: config.document.path.clone(),
            anchor: config.document.anchor.clone(),
        },
    );
    let projects = ProjectStore::new(&config.data_file, &config.images_dir)?;

    let state = AppState {
        publisher: Arc::new(publisher),
        projects: Arc::new(projects),
    };
    let app = build_app(state);

    let bind = cli.bind.unwrap_or(config.bind);
    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("binding {bind}"))?;

    tracing::info!(%bind, repo = %format!("{}/{}", config.repo.owner, config.repo.repo), "vitrine server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
