//! Handlers for `/people` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/people` | All people |
//! | `POST`   | `/people` | Body: `{"name":"..","email":"..","gender":".."}`; `name` required |
//! | `GET`    | `/people/:id` | 404 if not found |
//! | `PUT`    | `/people/:id` | Full replace; omitted fields become `null` |
//! | `DELETE` | `/people/:id` | Also removes favorites pointing at the person |

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use holonet_core::{
  entity::{Person, PersonInput},
  store::GalaxyStore,
};
use serde_json::{Value, json};

use crate::{AppState, error::ApiError, path::IdPath, payload::JsonFields};

fn person_input(body: &JsonFields) -> Result<PersonInput, ApiError> {
  Ok(PersonInput {
    name:   body.required_str("name")?,
    email:  body.optional_str("email")?,
    gender: body.optional_str("gender")?,
  })
}

async fn find<S: GalaxyStore>(store: &S, id: i64) -> Result<Person, ApiError> {
  store
    .get_person(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::not_found("Person"))
}

/// `GET /people`
pub async fn list<S>(State(state): State<AppState<S>>) -> Result<Json<Vec<Person>>, ApiError>
where
  S: GalaxyStore + Clone + 'static,
{
  let people = state.store.list_people().await.map_err(ApiError::store)?;
  Ok(Json(people))
}

/// `GET /people/:id`
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  IdPath(id): IdPath,
) -> Result<Json<Person>, ApiError>
where
  S: GalaxyStore + Clone + 'static,
{
  Ok(Json(find(&*state.store, id).await?))
}

/// `POST /people`
pub async fn create<S>(
  State(state): State<AppState<S>>,
  body: JsonFields,
) -> Result<impl IntoResponse, ApiError>
where
  S: GalaxyStore + Clone + 'static,
{
  let input = person_input(&body)?;
  let person = state.store.add_person(input).await.map_err(ApiError::store)?;

  tracing::info!(person_id = person.id, "person created");
  Ok((StatusCode::CREATED, Json(person)))
}

/// `PUT /people/:id`
pub async fn replace<S>(
  State(state): State<AppState<S>>,
  IdPath(id): IdPath,
  body: JsonFields,
) -> Result<Json<Person>, ApiError>
where
  S: GalaxyStore + Clone + 'static,
{
  find(&*state.store, id).await?;
  let input = person_input(&body)?;

  let person = state
    .store
    .replace_person(id, input)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::not_found("Person"))?;

  tracing::info!(person_id = id, "person replaced");
  Ok(Json(person))
}

/// `DELETE /people/:id`
pub async fn delete_one<S>(
  State(state): State<AppState<S>>,
  IdPath(id): IdPath,
) -> Result<Json<Value>, ApiError>
where
  S: GalaxyStore + Clone + 'static,
{
  let deleted = state.store.delete_person(id).await.map_err(ApiError::store)?;
  if !deleted {
    return Err(ApiError::not_found("Person"));
  }

  tracing::info!(person_id = id, "person deleted");
  Ok(Json(json!({ "message": "Person deleted" })))
}
