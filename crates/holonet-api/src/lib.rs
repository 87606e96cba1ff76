//! JSON REST API for Holonet.
//!
//! Exposes an axum [`Router`] backed by any [`GalaxyStore`].
//! TLS and transport concerns are the caller's responsibility.
//!
//! # Serving
//!
//! ```rust,ignore
//! let app = holonet_api::app(AppState::new(store, ApiConfig::default()));
//! axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;
//! ```

pub mod caller;
pub mod error;
pub mod favorites;
pub mod path;
pub mod payload;
pub mod people;
pub mod planets;
pub mod sitemap;
pub mod users;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use holonet_core::store::GalaxyStore;
use tower::Layer as _;
use tower_http::{
  cors::CorsLayer,
  normalize_path::{NormalizePath, NormalizePathLayer},
  trace::TraceLayer,
};

pub use error::ApiError;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime knobs the handlers need.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  /// Caller assumed by favorites endpoints when no `X-User-Id` header is sent.
  pub default_user_id: i64,
}

impl Default for ApiConfig {
  fn default() -> Self { ApiConfig { default_user_id: 1 } }
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: GalaxyStore> {
  pub store:  Arc<S>,
  pub config: Arc<ApiConfig>,
}

impl<S: GalaxyStore> AppState<S> {
  pub fn new(store: S, config: ApiConfig) -> Self {
    AppState { store: Arc::new(store), config: Arc::new(config) }
  }
}

// ─── Routes ───────────────────────────────────────────────────────────────────

/// One row of the route table rendered by the sitemap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
  pub method: &'static str,
  pub path:   &'static str,
}

const fn endpoint(method: &'static str, path: &'static str) -> Endpoint {
  Endpoint { method, path }
}

/// Every route [`router`] serves.
pub const ENDPOINTS: &[Endpoint] = &[
  endpoint("GET", "/"),
  endpoint("GET", "/user"),
  endpoint("POST", "/user"),
  endpoint("GET", "/users/favorites"),
  endpoint("POST", "/favorite/planet/{id}"),
  endpoint("DELETE", "/favorite/planet/{id}"),
  endpoint("POST", "/favorite/people/{id}"),
  endpoint("DELETE", "/favorite/people/{id}"),
  endpoint("GET", "/people"),
  endpoint("POST", "/people"),
  endpoint("GET", "/people/{id}"),
  endpoint("PUT", "/people/{id}"),
  endpoint("DELETE", "/people/{id}"),
  endpoint("GET", "/planets"),
  endpoint("POST", "/planets"),
  endpoint("GET", "/planets/{id}"),
  endpoint("PUT", "/planets/{id}"),
  endpoint("DELETE", "/planets/{id}"),
];

/// Build the API [`Router`] for `state`.
///
/// Routes are matched exactly; wrap with [`app`] to also accept a trailing
/// slash.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: GalaxyStore + Clone + 'static,
{
  Router::new()
    .route("/", get(sitemap::handler))
    // Users
    .route("/user", get(users::list::<S>).post(users::create::<S>))
    .route("/users/favorites", get(favorites::list::<S>))
    // Favorites
    .route(
      "/favorite/planet/{id}",
      post(favorites::add_planet::<S>).delete(favorites::remove_planet::<S>),
    )
    .route(
      "/favorite/people/{id}",
      post(favorites::add_person::<S>).delete(favorites::remove_person::<S>),
    )
    // People
    .route("/people", get(people::list::<S>).post(people::create::<S>))
    .route(
      "/people/{id}",
      get(people::get_one::<S>)
        .put(people::replace::<S>)
        .delete(people::delete_one::<S>),
    )
    // Planets
    .route("/planets", get(planets::list::<S>).post(planets::create::<S>))
    .route(
      "/planets/{id}",
      get(planets::get_one::<S>)
        .put(planets::replace::<S>)
        .delete(planets::delete_one::<S>),
    )
    .layer(CorsLayer::permissive())
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// [`router`] with trailing slashes trimmed before routing, so `/people/`
/// and `/people` are the same endpoint.
pub fn app<S>(state: AppState<S>) -> NormalizePath<Router>
where
  S: GalaxyStore + Clone + 'static,
{
  NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
