//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every error renders as `{"message": "..."}` with the matching status.

use axum::{
  Json,
  extract::rejection::PathRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use holonet_core::{favorite::FavoriteTarget, store::StoreError};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("{0}")]
  NotFound(String),

  #[error("{0}")]
  BadRequest(String),

  #[error("{0}")]
  Conflict(String),

  #[error("{0}")]
  Internal(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  pub fn not_found(entity: &str) -> Self {
    ApiError::NotFound(format!("{entity} not found"))
  }

  /// Map a backend error, surfacing domain conflicts as 409s.
  pub fn store<E: StoreError>(err: E) -> Self {
    match err.domain() {
      Some(holonet_core::Error::DuplicateEmail(_)) => {
        ApiError::Conflict("Email already registered".to_string())
      }
      Some(holonet_core::Error::DuplicateFavorite { target, .. }) => {
        let what = match target {
          FavoriteTarget::Person(_) => "Person",
          FavoriteTarget::Planet(_) => "Planet",
        };
        ApiError::Conflict(format!("{what} already in favorites"))
      }
      None => ApiError::Store(Box::new(err)),
    }
  }
}

/// Routes only exist for integer ids, so an unparsable segment is a 404.
impl From<PathRejection> for ApiError {
  fn from(rejection: PathRejection) -> Self {
    tracing::debug!(%rejection, "unmatched id segment");
    ApiError::NotFound("Not found".to_string())
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m),
      ApiError::Conflict(m) => (StatusCode::CONFLICT, m),
      err @ (ApiError::Internal(_) | ApiError::Store(_)) => {
        // Backend detail goes to the log only.
        tracing::error!(error = %err, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
      }
    };
    (status, Json(json!({ "message": message }))).into_response()
  }
}
