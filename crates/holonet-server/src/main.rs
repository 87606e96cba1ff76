//! holonet server binary.
//!
//! Reads `config.toml` (or the path given with `--config`) and the
//! environment, opens the SQLite store named by `DATABASE_URL`, and serves
//! the JSON API over HTTP.

mod database;
mod settings;

use std::path::PathBuf;

use anyhow::Context as _;
use axum::{ServiceExt, extract::Request};
use clap::Parser;
use holonet_api::{ApiConfig, AppState};
use holonet_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use database::DatabaseTarget;
use settings::ServerConfig;

#[derive(Parser)]
#[command(author, version, about = "Holonet REST API server")]
struct Cli {
  /// Path to the TOML configuration file. Missing files are ignored.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let server_cfg = ServerConfig::load(cli.config)?;

  let store = open_store(database::resolve(server_cfg.database_url.as_deref())).await?;

  let state = AppState::new(store, ApiConfig {
    default_user_id: server_cfg.default_user_id,
  });
  let app = holonet_api::app(state);
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
    .await
    .context("server error")?;

  Ok(())
}

async fn open_store(target: DatabaseTarget) -> anyhow::Result<SqliteStore> {
  match target {
    DatabaseTarget::SqliteFile(path) => {
      tracing::info!(path = %path.display(), "opening SQLite store");
      SqliteStore::open(&path)
        .await
        .with_context(|| format!("failed to open store at {path:?}"))
    }
    DatabaseTarget::SqliteMemory => {
      tracing::warn!("using an in-memory store; data is lost on exit");
      SqliteStore::open_in_memory()
        .await
        .context("failed to open in-memory store")
    }
    DatabaseTarget::Postgres(_) => anyhow::bail!(
      "DATABASE_URL selects PostgreSQL, but this build only ships the SQLite store"
    ),
  }
}
