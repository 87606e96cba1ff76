//! Error types for `holonet-core`.

use thiserror::Error;

use crate::favorite::FavoriteTarget;

/// Domain-level failures a store backend reports through
/// [`StoreError::domain`](crate::store::StoreError::domain).
#[derive(Debug, Error)]
pub enum Error {
  #[error("email already registered: {0}")]
  DuplicateEmail(String),

  #[error("user {user_id} already has {target} as a favorite")]
  DuplicateFavorite {
    user_id: i64,
    target:  FavoriteTarget,
  },
}
