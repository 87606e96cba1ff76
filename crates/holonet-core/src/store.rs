//! The `GalaxyStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `holonet-store-sqlite`).
//! The HTTP layer (`holonet-api`) depends on this abstraction, not on any
//! concrete backend.

use std::future::Future;

use crate::{
  entity::{NewUser, Person, PersonInput, Planet, PlanetInput, User},
  favorite::{Favorite, FavoriteEntry, FavoriteTarget},
};

// ─── Error classification ─────────────────────────────────────────────────────

/// A backend error that may carry a domain-level [`crate::Error`].
///
/// Callers use [`StoreError::domain`] to tell conflicts (which map to a client
/// error) apart from infrastructure failures.
pub trait StoreError: std::error::Error + Send + Sync + 'static {
  fn domain(&self) -> Option<&crate::Error>;
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a Holonet storage backend.
///
/// Lookups return `Option`; a missing row is not an error. Replacements and
/// deletions report whether the row existed, and never touch the store when
/// it did not.
///
/// Deleting a person or a planet also deletes every favorite that points at
/// it.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait GalaxyStore: Send + Sync {
  type Error: StoreError;

  // ── Users ─────────────────────────────────────────────────────────────

  /// Persist a new user. Fails with [`crate::Error::DuplicateEmail`] if the
  /// email is taken.
  fn add_user(
    &self,
    input: NewUser,
  ) -> impl Future<Output = Result<User, Self::Error>> + Send + '_;

  fn get_user(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + '_;

  fn list_users(
    &self,
  ) -> impl Future<Output = Result<Vec<User>, Self::Error>> + Send + '_;

  // ── People ────────────────────────────────────────────────────────────

  fn add_person(
    &self,
    input: PersonInput,
  ) -> impl Future<Output = Result<Person, Self::Error>> + Send + '_;

  fn get_person(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Person>, Self::Error>> + Send + '_;

  fn list_people(
    &self,
  ) -> impl Future<Output = Result<Vec<Person>, Self::Error>> + Send + '_;

  /// Overwrite every mutable field of person `id`. Returns `None` if no such
  /// person exists.
  fn replace_person(
    &self,
    id: i64,
    input: PersonInput,
  ) -> impl Future<Output = Result<Option<Person>, Self::Error>> + Send + '_;

  /// Delete person `id` and the favorites that reference it. Returns `false`
  /// if no such person exists.
  fn delete_person(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Planets ───────────────────────────────────────────────────────────

  fn add_planet(
    &self,
    input: PlanetInput,
  ) -> impl Future<Output = Result<Planet, Self::Error>> + Send + '_;

  fn get_planet(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Planet>, Self::Error>> + Send + '_;

  fn list_planets(
    &self,
  ) -> impl Future<Output = Result<Vec<Planet>, Self::Error>> + Send + '_;

  fn replace_planet(
    &self,
    id: i64,
    input: PlanetInput,
  ) -> impl Future<Output = Result<Option<Planet>, Self::Error>> + Send + '_;

  fn delete_planet(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Favorites ─────────────────────────────────────────────────────────

  /// Record that `user_id` favorites `target`.
  ///
  /// Uniqueness of `(user_id, target)` is enforced by the backend itself, so
  /// concurrent identical calls produce one row and
  /// [`crate::Error::DuplicateFavorite`] for the rest.
  fn add_favorite(
    &self,
    user_id: i64,
    target: FavoriteTarget,
  ) -> impl Future<Output = Result<Favorite, Self::Error>> + Send + '_;

  /// Remove the favorite for `(user_id, target)`. Returns `false` if there
  /// was none.
  fn remove_favorite(
    &self,
    user_id: i64,
    target: FavoriteTarget,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// All favorites of `user_id`, each joined with the entity it points at.
  fn list_favorites(
    &self,
    user_id: i64,
  ) -> impl Future<Output = Result<Vec<FavoriteEntry>, Self::Error>> + Send + '_;
}
