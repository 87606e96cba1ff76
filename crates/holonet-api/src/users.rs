//! Handlers for `/user` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/user` | All users, without password hashes |
//! | `POST` | `/user` | Body: `{"email":"..","password":"..","is_active":true}`; 409 on duplicate email |

use argon2::{Argon2, PasswordHasher, password_hash::SaltString};
use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use holonet_core::{
  entity::{NewUser, User},
  store::GalaxyStore,
};
use rand_core::OsRng;

use crate::{AppState, error::ApiError, payload::JsonFields};

/// `GET /user`
pub async fn list<S>(State(state): State<AppState<S>>) -> Result<Json<Vec<User>>, ApiError>
where
  S: GalaxyStore + Clone + 'static,
{
  let users = state.store.list_users().await.map_err(ApiError::store)?;
  Ok(Json(users))
}

/// `POST /user` — the password is stored as an argon2 PHC string.
pub async fn create<S>(
  State(state): State<AppState<S>>,
  body: JsonFields,
) -> Result<impl IntoResponse, ApiError>
where
  S: GalaxyStore + Clone + 'static,
{
  let email     = body.required_str("email")?;
  let password  = body.required_str("password")?;
  let is_active = body.optional_bool("is_active")?.unwrap_or(true);

  let password_hash = hash_password(password).await?;

  let user = state
    .store
    .add_user(NewUser { email, password_hash, is_active })
    .await
    .map_err(ApiError::store)?;

  tracing::info!(user_id = user.id, "user created");
  Ok((StatusCode::CREATED, Json(user)))
}

/// Argon2 is deliberately slow; keep it off the async workers.
async fn hash_password(password: String) -> Result<String, ApiError> {
  tokio::task::spawn_blocking(move || {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
      .hash_password(password.as_bytes(), &salt)
      .map(|hash| hash.to_string())
      .map_err(|e| ApiError::Internal(format!("argon2 error: {e}")))
  })
  .await
  .map_err(|e| ApiError::Internal(format!("hashing task failed: {e}")))?
}
