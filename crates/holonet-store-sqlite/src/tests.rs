//! Integration tests for `SqliteStore` against an in-memory database.

use holonet_core::{
  entity::{NewUser, PersonInput, PlanetInput},
  favorite::{FavoriteItem, FavoriteTarget},
  store::{GalaxyStore, StoreError},
};

use crate::{Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn new_user(email: &str) -> NewUser {
  NewUser {
    email:         email.into(),
    password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".into(),
    is_active:     true,
  }
}

fn luke() -> PersonInput {
  PersonInput {
    name:   "Luke Skywalker".into(),
    email:  Some("luke@rebellion.org".into()),
    gender: Some("male".into()),
  }
}

fn tatooine() -> PlanetInput {
  PlanetInput {
    name:       "Tatooine".into(),
    climate:    Some("arid".into()),
    terrain:    Some("desert".into()),
    population: Some(200_000),
  }
}

// ─── Users ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_and_get_user() {
  let s = store().await;

  let user = s.add_user(new_user("han@falcon.net")).await.unwrap();
  assert_eq!(user.id, 1);

  let fetched = s.get_user(user.id).await.unwrap().unwrap();
  assert_eq!(fetched, user);
  assert!(fetched.is_active);
}

#[tokio::test]
async fn duplicate_email_is_a_domain_conflict() {
  let s = store().await;
  s.add_user(new_user("han@falcon.net")).await.unwrap();

  let err = s.add_user(new_user("han@falcon.net")).await.unwrap_err();
  assert!(matches!(
    err.domain(),
    Some(holonet_core::Error::DuplicateEmail(email)) if email == "han@falcon.net"
  ));
  assert_eq!(s.list_users().await.unwrap().len(), 1);
}

#[tokio::test]
async fn get_user_missing_returns_none() {
  let s = store().await;
  assert!(s.get_user(42).await.unwrap().is_none());
}

// ─── People ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn person_round_trips() {
  let s = store().await;

  let person = s.add_person(luke()).await.unwrap();
  let fetched = s.get_person(person.id).await.unwrap().unwrap();
  assert_eq!(fetched, person);
  assert_eq!(fetched.email.as_deref(), Some("luke@rebellion.org"));
}

#[tokio::test]
async fn replace_person_clears_absent_optionals() {
  let s = store().await;
  let person = s.add_person(luke()).await.unwrap();

  let replaced = s
    .replace_person(person.id, PersonInput { name: "Ben".into(), ..Default::default() })
    .await
    .unwrap()
    .unwrap();
  assert_eq!(replaced.name, "Ben");
  assert!(replaced.email.is_none());
  assert!(replaced.gender.is_none());

  let fetched = s.get_person(person.id).await.unwrap().unwrap();
  assert_eq!(fetched, replaced);
}

#[tokio::test]
async fn replace_missing_person_changes_nothing() {
  let s = store().await;
  s.add_person(luke()).await.unwrap();

  let result = s.replace_person(99, PersonInput { name: "Ghost".into(), ..Default::default() })
    .await
    .unwrap();
  assert!(result.is_none());

  let people = s.list_people().await.unwrap();
  assert_eq!(people.len(), 1);
  assert_eq!(people[0].name, "Luke Skywalker");
}

#[tokio::test]
async fn delete_person_reports_existence() {
  let s = store().await;
  let person = s.add_person(luke()).await.unwrap();

  assert!(s.delete_person(person.id).await.unwrap());
  assert!(!s.delete_person(person.id).await.unwrap());
  assert!(s.get_person(person.id).await.unwrap().is_none());
}

// ─── Planets ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn planets_list_in_id_order() {
  let s = store().await;
  s.add_planet(tatooine()).await.unwrap();
  s.add_planet(PlanetInput { name: "Hoth".into(), ..Default::default() })
    .await
    .unwrap();

  let planets = s.list_planets().await.unwrap();
  let names: Vec<_> = planets.iter().map(|p| p.name.as_str()).collect();
  assert_eq!(names, ["Tatooine", "Hoth"]);
  assert_eq!(planets[1].population, None);
}

#[tokio::test]
async fn replace_planet_overwrites_every_field() {
  let s = store().await;
  let planet = s.add_planet(tatooine()).await.unwrap();

  let replaced = s
    .replace_planet(planet.id, PlanetInput {
      name:       "Tatooine".into(),
      population: Some(1),
      ..Default::default()
    })
    .await
    .unwrap()
    .unwrap();

  assert_eq!(s.get_planet(planet.id).await.unwrap().unwrap(), replaced);
  assert!(replaced.climate.is_none());
  assert_eq!(replaced.population, Some(1));
}

// ─── Favorites ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_and_list_favorites_with_items() {
  let s = store().await;
  let user = s.add_user(new_user("leia@alderaan.gov")).await.unwrap();
  let person = s.add_person(luke()).await.unwrap();
  let planet = s.add_planet(tatooine()).await.unwrap();

  s.add_favorite(user.id, FavoriteTarget::Planet(planet.id)).await.unwrap();
  s.add_favorite(user.id, FavoriteTarget::Person(person.id)).await.unwrap();

  let entries = s.list_favorites(user.id).await.unwrap();
  assert_eq!(entries.len(), 2);
  assert_eq!(entries[0].item, FavoriteItem::Planet(planet));
  assert_eq!(entries[1].item, FavoriteItem::Person(person));
}

#[tokio::test]
async fn duplicate_favorite_is_rejected_by_the_store() {
  let s = store().await;
  let user = s.add_user(new_user("leia@alderaan.gov")).await.unwrap();
  let planet = s.add_planet(tatooine()).await.unwrap();
  let target = FavoriteTarget::Planet(planet.id);

  s.add_favorite(user.id, target).await.unwrap();
  let err = s.add_favorite(user.id, target).await.unwrap_err();

  assert!(matches!(
    err,
    Error::Core(holonet_core::Error::DuplicateFavorite { user_id, target: t })
      if user_id == user.id && t == target
  ));
  assert_eq!(s.list_favorites(user.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn same_id_as_person_and_planet_are_distinct_favorites() {
  let s = store().await;
  let user = s.add_user(new_user("leia@alderaan.gov")).await.unwrap();
  let person = s.add_person(luke()).await.unwrap();
  let planet = s.add_planet(tatooine()).await.unwrap();
  assert_eq!(person.id, planet.id);

  s.add_favorite(user.id, FavoriteTarget::Person(person.id)).await.unwrap();
  s.add_favorite(user.id, FavoriteTarget::Planet(planet.id)).await.unwrap();
  assert_eq!(s.list_favorites(user.id).await.unwrap().len(), 2);
}

#[tokio::test]
async fn remove_favorite_only_matches_its_kind() {
  let s = store().await;
  let user = s.add_user(new_user("leia@alderaan.gov")).await.unwrap();
  let planet = s.add_planet(tatooine()).await.unwrap();

  s.add_favorite(user.id, FavoriteTarget::Planet(planet.id)).await.unwrap();

  assert!(!s.remove_favorite(user.id, FavoriteTarget::Person(planet.id)).await.unwrap());
  assert!(s.remove_favorite(user.id, FavoriteTarget::Planet(planet.id)).await.unwrap());
  assert!(s.list_favorites(user.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn deleting_planet_cascades_to_favorites() {
  let s = store().await;
  let user = s.add_user(new_user("leia@alderaan.gov")).await.unwrap();
  let planet = s.add_planet(tatooine()).await.unwrap();
  let person = s.add_person(luke()).await.unwrap();

  s.add_favorite(user.id, FavoriteTarget::Planet(planet.id)).await.unwrap();
  s.add_favorite(user.id, FavoriteTarget::Person(person.id)).await.unwrap();

  assert!(s.delete_planet(planet.id).await.unwrap());

  let entries = s.list_favorites(user.id).await.unwrap();
  assert_eq!(entries.len(), 1);
  assert_eq!(entries[0].favorite.target, FavoriteTarget::Person(person.id));
}

#[tokio::test]
async fn deleting_person_cascades_to_favorites() {
  let s = store().await;
  let user = s.add_user(new_user("leia@alderaan.gov")).await.unwrap();
  let person = s.add_person(luke()).await.unwrap();

  s.add_favorite(user.id, FavoriteTarget::Person(person.id)).await.unwrap();
  assert!(s.delete_person(person.id).await.unwrap());
  assert!(s.list_favorites(user.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn favorite_for_missing_planet_is_a_database_error() {
  let s = store().await;
  let user = s.add_user(new_user("leia@alderaan.gov")).await.unwrap();

  let err = s.add_favorite(user.id, FavoriteTarget::Planet(77)).await.unwrap_err();
  assert!(matches!(err, Error::Database(_)));
  assert!(err.domain().is_none());
}
