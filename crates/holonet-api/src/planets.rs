//! Handlers for `/planets` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/planets` | All planets |
//! | `POST`   | `/planets` | Body: `{"name":"..","climate":"..","terrain":"..","population":..}` |
//! | `GET`    | `/planets/:id` | 404 if not found |
//! | `PUT`    | `/planets/:id` | Full replace; omitted fields become `null` |
//! | `DELETE` | `/planets/:id` | Also removes favorites pointing at the planet |
//!
//! `name` is trimmed and must be non-empty. `population` may be an integer, a
//! numeric string or a float (truncated).

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use holonet_core::{
  entity::{Planet, PlanetInput},
  store::GalaxyStore,
};
use serde_json::{Value, json};

use crate::{AppState, error::ApiError, path::IdPath, payload::JsonFields};

fn planet_input(body: &JsonFields) -> Result<PlanetInput, ApiError> {
  let name = body.optional_str("name")?.unwrap_or_default().trim().to_owned();
  if name.is_empty() {
    return Err(ApiError::BadRequest("Field 'name' is required".to_string()));
  }

  Ok(PlanetInput {
    name,
    climate:    body.optional_str("climate")?,
    terrain:    body.optional_str("terrain")?,
    population: body.optional_int("population")?,
  })
}

async fn find<S: GalaxyStore>(store: &S, id: i64) -> Result<Planet, ApiError> {
  store
    .get_planet(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::not_found("Planet"))
}

/// `GET /planets`
pub async fn list<S>(State(state): State<AppState<S>>) -> Result<Json<Vec<Planet>>, ApiError>
where
  S: GalaxyStore + Clone + 'static,
{
  let planets = state.store.list_planets().await.map_err(ApiError::store)?;
  Ok(Json(planets))
}

/// `GET /planets/:id`
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  IdPath(id): IdPath,
) -> Result<Json<Planet>, ApiError>
where
  S: GalaxyStore + Clone + 'static,
{
  Ok(Json(find(&*state.store, id).await?))
}

/// `POST /planets`
pub async fn create<S>(
  State(state): State<AppState<S>>,
  body: JsonFields,
) -> Result<impl IntoResponse, ApiError>
where
  S: GalaxyStore + Clone + 'static,
{
  let input = planet_input(&body)?;
  let planet = state.store.add_planet(input).await.map_err(ApiError::store)?;

  tracing::info!(planet_id = planet.id, "planet created");
  Ok((StatusCode::CREATED, Json(planet)))
}

/// `PUT /planets/:id`
pub async fn replace<S>(
  State(state): State<AppState<S>>,
  IdPath(id): IdPath,
  body: JsonFields,
) -> Result<Json<Planet>, ApiError>
where
  S: GalaxyStore + Clone + 'static,
{
  find(&*state.store, id).await?;
  let input = planet_input(&body)?;

  let planet = state
    .store
    .replace_planet(id, input)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::not_found("Planet"))?;

  tracing::info!(planet_id = id, "planet replaced");
  Ok(Json(planet))
}

/// `DELETE /planets/:id`
pub async fn delete_one<S>(
  State(state): State<AppState<S>>,
  IdPath(id): IdPath,
) -> Result<Json<Value>, ApiError>
where
  S: GalaxyStore + Clone + 'static,
{
  let deleted = state.store.delete_planet(id).await.map_err(ApiError::store)?;
  if !deleted {
    return Err(ApiError::not_found("Planet"));
  }

  tracing::info!(planet_id = id, "planet deleted");
  Ok(Json(json!({ "message": "Planet deleted" })))
}
