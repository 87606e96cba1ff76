//! Favorites — a user's bookmark on exactly one person or planet.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::entity::{Person, Planet};

/// What a favorite points at. A favorite targets exactly one entity, so the
/// two foreign keys are never both set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FavoriteTarget {
  Person(i64),
  Planet(i64),
}

impl FavoriteTarget {
  pub fn person_id(self) -> Option<i64> {
    match self {
      FavoriteTarget::Person(id) => Some(id),
      FavoriteTarget::Planet(_) => None,
    }
  }

  pub fn planet_id(self) -> Option<i64> {
    match self {
      FavoriteTarget::Planet(id) => Some(id),
      FavoriteTarget::Person(_) => None,
    }
  }

  /// Rebuild a target from its two nullable columns. Returns `None` unless
  /// exactly one is set.
  pub fn from_columns(person_id: Option<i64>, planet_id: Option<i64>) -> Option<Self> {
    match (person_id, planet_id) {
      (Some(id), None) => Some(FavoriteTarget::Person(id)),
      (None, Some(id)) => Some(FavoriteTarget::Planet(id)),
      _ => None,
    }
  }
}

impl fmt::Display for FavoriteTarget {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      FavoriteTarget::Person(id) => write!(f, "person {id}"),
      FavoriteTarget::Planet(id) => write!(f, "planet {id}"),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Favorite {
  pub id:      i64,
  pub user_id: i64,
  pub target:  FavoriteTarget,
}

/// The entity a favorite resolves to, embedded under `item` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FavoriteItem {
  Person(Person),
  Planet(Planet),
}

/// A favorite joined with the entity it points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteEntry {
  pub favorite: Favorite,
  pub item:     FavoriteItem,
}

/// Flat wire shape: `{id, user_id, person_id, planet_id, item}`.
#[derive(Serialize)]
struct FavoriteWire<'a> {
  id:        i64,
  user_id:   i64,
  person_id: Option<i64>,
  planet_id: Option<i64>,
  item:      &'a FavoriteItem,
}

impl Serialize for FavoriteEntry {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let Favorite { id, user_id, target } = self.favorite;
    FavoriteWire {
      id,
      user_id,
      person_id: target.person_id(),
      planet_id: target.planet_id(),
      item: &self.item,
    }
    .serialize(serializer)
  }
}
