//! Error type for `holonet-store-sqlite`.

use holonet_core::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Core(#[from] holonet_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// A favorites row with both or neither target column set.
  #[error("favorite {0} has no single target")]
  CorruptFavorite(i64),
}

impl StoreError for Error {
  fn domain(&self) -> Option<&holonet_core::Error> {
    match self {
      Error::Core(e) => Some(e),
      _ => None,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
