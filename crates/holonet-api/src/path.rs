//! Numeric `{id}` path segment extractor.
//!
//! Routes only match integer ids, so a segment that does not parse as an
//! `i64` is a 404 with the usual JSON envelope rather than axum's plain-text
//! 400.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use crate::error::ApiError;

/// The `{id}` segment of an entity route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i64);

impl<S: Send + Sync> FromRequestParts<S> for IdPath {
  type Rejection = ApiError;

  async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
    let Path(id) = Path::<i64>::from_request_parts(parts, state).await?;
    Ok(IdPath(id))
  }
}
