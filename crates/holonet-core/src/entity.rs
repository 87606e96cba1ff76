//! The three catalogue entities: users, people and planets.
//!
//! Each entity derives `Serialize`; the derived JSON shape is the wire
//! contract the API returns verbatim.

use serde::Serialize;

// ─── User ─────────────────────────────────────────────────────────────────────

/// A registered account. The password hash never leaves the store, so it has
/// no field here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
  pub id:        i64,
  pub email:     String,
  #[serde(skip)]
  pub is_active: bool,
}

/// Input for [`GalaxyStore::add_user`](crate::store::GalaxyStore::add_user).
#[derive(Debug, Clone)]
pub struct NewUser {
  pub email:         String,
  /// PHC string produced by argon2, e.g. `$argon2id$v=19$…`
  pub password_hash: String,
  pub is_active:     bool,
}

// ─── Person ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
  pub id:     i64,
  pub name:   String,
  pub email:  Option<String>,
  pub gender: Option<String>,
}

/// Every mutable field of a [`Person`]. Used for both create and full
/// replacement, so an absent optional always clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonInput {
  pub name:   String,
  pub email:  Option<String>,
  pub gender: Option<String>,
}

impl PersonInput {
  pub fn into_person(self, id: i64) -> Person {
    Person { id, name: self.name, email: self.email, gender: self.gender }
  }
}

// ─── Planet ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Planet {
  pub id:         i64,
  pub name:       String,
  pub climate:    Option<String>,
  pub terrain:    Option<String>,
  pub population: Option<i64>,
}

/// Every mutable field of a [`Planet`]; see [`PersonInput`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanetInput {
  pub name:       String,
  pub climate:    Option<String>,
  pub terrain:    Option<String>,
  pub population: Option<i64>,
}

impl PlanetInput {
  pub fn into_planet(self, id: i64) -> Planet {
    Planet {
      id,
      name:       self.name,
      climate:    self.climate,
      terrain:    self.terrain,
      population: self.population,
    }
  }
}
