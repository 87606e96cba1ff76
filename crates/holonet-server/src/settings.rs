//! Server configuration: defaults, then an optional TOML file, then the
//! environment (`HOST`, `PORT`, `DATABASE_URL`, `DEFAULT_USER_ID`).

use std::path::PathBuf;

use anyhow::Context as _;
use serde::Deserialize;

/// Runtime server configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:            String,
  pub port:            u16,
  /// Raw `DATABASE_URL`; see [`crate::database::resolve`].
  pub database_url:    Option<String>,
  /// Caller assumed by favorites endpoints when no `X-User-Id` is sent.
  pub default_user_id: i64,
}

impl ServerConfig {
  pub fn load(file: PathBuf) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .set_default("host", "0.0.0.0")?
      .set_default("port", 3000)?
      .set_default("default_user_id", 1)?
      .add_source(config::File::from(file).required(false))
      .add_source(config::Environment::default().try_parsing(true))
      .build()
      .context("failed to read configuration")?;

    settings
      .try_deserialize()
      .context("failed to deserialise ServerConfig")
  }
}
