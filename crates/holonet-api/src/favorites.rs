//! Handlers for favorites.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/users/favorites` | The caller's favorites, each with its `item` |
//! | `POST`   | `/favorite/planet/:id` | 201; 404 unknown user/planet; 409 duplicate |
//! | `POST`   | `/favorite/people/:id` | 201; 404 unknown user/person; 409 duplicate |
//! | `DELETE` | `/favorite/planet/:id` | 404 unknown user or no such favorite |
//! | `DELETE` | `/favorite/people/:id` | 404 unknown user or no such favorite |
//!
//! The acting user comes from the [`Caller`] extractor.

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use holonet_core::{
  favorite::{FavoriteEntry, FavoriteItem, FavoriteTarget},
  store::GalaxyStore,
};
use serde_json::{Value, json};

use crate::{AppState, caller::Caller, error::ApiError, path::IdPath};

/// Capitalised and lower-case nouns for a target kind, for messages.
fn nouns(target: FavoriteTarget) -> (&'static str, &'static str) {
  match target {
    FavoriteTarget::Person(_) => ("Person", "person"),
    FavoriteTarget::Planet(_) => ("Planet", "planet"),
  }
}

async fn require_user<S: GalaxyStore>(store: &S, user_id: i64) -> Result<(), ApiError> {
  store
    .get_user(user_id)
    .await
    .map_err(ApiError::store)?
    .map(|_| ())
    .ok_or_else(|| ApiError::NotFound("User doesn't exist".to_string()))
}

async fn resolve_item<S: GalaxyStore>(
  store: &S,
  target: FavoriteTarget,
) -> Result<FavoriteItem, ApiError> {
  let item = match target {
    FavoriteTarget::Person(id) => store
      .get_person(id)
      .await
      .map_err(ApiError::store)?
      .map(FavoriteItem::Person),
    FavoriteTarget::Planet(id) => store
      .get_planet(id)
      .await
      .map_err(ApiError::store)?
      .map(FavoriteItem::Planet),
  };
  item.ok_or_else(|| ApiError::not_found(nouns(target).0))
}

async fn add<S: GalaxyStore>(
  state: &AppState<S>,
  user_id: i64,
  target: FavoriteTarget,
) -> Result<FavoriteEntry, ApiError> {
  require_user(&*state.store, user_id).await?;
  let item = resolve_item(&*state.store, target).await?;

  let favorite = state
    .store
    .add_favorite(user_id, target)
    .await
    .map_err(ApiError::store)?;

  tracing::info!(user_id, %target, "favorite added");
  Ok(FavoriteEntry { favorite, item })
}

async fn remove<S: GalaxyStore>(
  state: &AppState<S>,
  user_id: i64,
  target: FavoriteTarget,
) -> Result<Value, ApiError> {
  require_user(&*state.store, user_id).await?;

  let removed = state
    .store
    .remove_favorite(user_id, target)
    .await
    .map_err(ApiError::store)?;

  let (_, noun) = nouns(target);
  if !removed {
    return Err(ApiError::NotFound(format!("Favorite {noun} not found")));
  }

  tracing::info!(user_id, %target, "favorite removed");
  Ok(json!({ "message": format!("Favorite {noun} removed") }))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /users/favorites`
pub async fn list<S>(
  State(state): State<AppState<S>>,
  Caller(user_id): Caller,
) -> Result<Json<Vec<FavoriteEntry>>, ApiError>
where
  S: GalaxyStore + Clone + 'static,
{
  require_user(&*state.store, user_id).await?;
  let favorites = state
    .store
    .list_favorites(user_id)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(favorites))
}

// ─── Planets ──────────────────────────────────────────────────────────────────

/// `POST /favorite/planet/:id`
pub async fn add_planet<S>(
  State(state): State<AppState<S>>,
  Caller(user_id): Caller,
  IdPath(planet_id): IdPath,
) -> Result<impl IntoResponse, ApiError>
where
  S: GalaxyStore + Clone + 'static,
{
  let entry = add(&state, user_id, FavoriteTarget::Planet(planet_id)).await?;
  Ok((StatusCode::CREATED, Json(entry)))
}

/// `DELETE /favorite/planet/:id`
pub async fn remove_planet<S>(
  State(state): State<AppState<S>>,
  Caller(user_id): Caller,
  IdPath(planet_id): IdPath,
) -> Result<Json<Value>, ApiError>
where
  S: GalaxyStore + Clone + 'static,
{
  Ok(Json(remove(&state, user_id, FavoriteTarget::Planet(planet_id)).await?))
}

// ─── People ───────────────────────────────────────────────────────────────────

/// `POST /favorite/people/:id`
pub async fn add_person<S>(
  State(state): State<AppState<S>>,
  Caller(user_id): Caller,
  IdPath(person_id): IdPath,
) -> Result<impl IntoResponse, ApiError>
where
  S: GalaxyStore + Clone + 'static,
{
  let entry = add(&state, user_id, FavoriteTarget::Person(person_id)).await?;
  Ok((StatusCode::CREATED, Json(entry)))
}

/// `DELETE /favorite/people/:id`
pub async fn remove_person<S>(
  State(state): State<AppState<S>>,
  Caller(user_id): Caller,
  IdPath(person_id): IdPath,
) -> Result<Json<Value>, ApiError>
where
  S: GalaxyStore + Clone + 'static,
{
  Ok(Json(remove(&state, user_id, FavoriteTarget::Person(person_id)).await?))
}
