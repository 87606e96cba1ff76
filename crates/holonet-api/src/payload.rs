//! Lenient JSON request bodies.
//!
//! A missing, malformed or non-object body is read as an empty object, so a
//! bad payload surfaces as a field validation error (400) rather than as an
//! extractor rejection.

use std::convert::Infallible;

use axum::extract::{FromRequest, Request};
use bytes::Bytes;
use serde_json::{Map, Value};

use crate::error::ApiError;

/// The top-level fields of a JSON object body.
#[derive(Debug, Default)]
pub struct JsonFields(pub Map<String, Value>);

impl<S: Send + Sync> FromRequest<S> for JsonFields {
  type Rejection = Infallible;

  async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
    let bytes = Bytes::from_request(req, state).await.unwrap_or_default();
    Ok(Self::from_slice(&bytes))
  }
}

impl JsonFields {
  pub fn from_slice(bytes: &[u8]) -> Self {
    match serde_json::from_slice(bytes) {
      Ok(Value::Object(map)) => JsonFields(map),
      _ => JsonFields::default(),
    }
  }

  fn get(&self, key: &str) -> Option<&Value> {
    self.0.get(key).filter(|v| !v.is_null())
  }

  /// A non-empty string field.
  pub fn required_str(&self, key: &str) -> Result<String, ApiError> {
    match self.optional_str(key)? {
      Some(s) if !s.is_empty() => Ok(s),
      _ => Err(ApiError::BadRequest(format!("Field '{key}' is required"))),
    }
  }

  /// A string field; absent and `null` are both `None`.
  pub fn optional_str(&self, key: &str) -> Result<Option<String>, ApiError> {
    match self.get(key) {
      None => Ok(None),
      Some(Value::String(s)) => Ok(Some(s.clone())),
      Some(_) => Err(ApiError::BadRequest(format!("Field '{key}' must be a string"))),
    }
  }

  /// An integer field. Numeric strings are accepted and floats are
  /// truncated toward zero.
  pub fn optional_int(&self, key: &str) -> Result<Option<i64>, ApiError> {
    let invalid = || ApiError::BadRequest(format!("Field '{key}' must be an integer"));

    match self.get(key) {
      None => Ok(None),
      Some(Value::Number(n)) => n
        .as_i64()
        .or_else(|| {
          n.as_f64()
            .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
            .map(|f| f.trunc() as i64)
        })
        .map(Some)
        .ok_or_else(invalid),
      Some(Value::String(s)) => s.trim().parse().map(Some).map_err(|_| invalid()),
      Some(_) => Err(invalid()),
    }
  }

  pub fn optional_bool(&self, key: &str) -> Result<Option<bool>, ApiError> {
    match self.get(key) {
      None => Ok(None),
      Some(Value::Bool(b)) => Ok(Some(*b)),
      Some(_) => Err(ApiError::BadRequest(format!("Field '{key}' must be a boolean"))),
    }
  }
}
