//! Caller-identity extractor.
//!
//! Favorites endpoints act on behalf of a user. The caller names itself with
//! the `X-User-Id` header; without it the configured default user is assumed.
//! This identifies, it does not authenticate.

use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, request::Parts};
use holonet_core::store::GalaxyStore;

use crate::{AppState, error::ApiError};

pub const CALLER_HEADER: &str = "x-user-id";

/// The id of the user a request acts for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller(pub i64);

/// Resolve the caller from headers — used by the extractor and by tests.
pub fn resolve_caller(headers: &HeaderMap, default_user_id: i64) -> Result<Caller, ApiError> {
  let Some(value) = headers.get(CALLER_HEADER) else {
    return Ok(Caller(default_user_id));
  };

  value
    .to_str()
    .ok()
    .and_then(|s| s.trim().parse().ok())
    .map(Caller)
    .ok_or_else(|| ApiError::BadRequest(format!("Header '{CALLER_HEADER}' must be a user id")))
}

impl<S> FromRequestParts<AppState<S>> for Caller
where
  S: GalaxyStore + Clone + 'static,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &AppState<S>,
  ) -> Result<Self, Self::Rejection> {
    resolve_caller(&parts.headers, state.config.default_user_id)
  }
}
