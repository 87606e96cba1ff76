//! Row decoding helpers between SQLite rows and the domain types.
//!
//! Column order in every `SELECT` must match the order the helpers read.

use holonet_core::{
  entity::{Person, Planet, User},
  favorite::{Favorite, FavoriteEntry, FavoriteItem, FavoriteTarget},
};
use rusqlite::{Row, ffi};

use crate::{Error, Result};

pub const USER_COLUMNS: &str = "id, email, is_active";
pub const PERSON_COLUMNS: &str = "id, name, email, gender";
pub const PLANET_COLUMNS: &str = "id, name, climate, terrain, population";

/// `true` when `err` is a UNIQUE (or partial unique index) violation.
pub fn is_unique_violation(err: &rusqlite::Error) -> bool {
  matches!(
    err,
    rusqlite::Error::SqliteFailure(e, _)
      if e.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE
  )
}

pub fn user_from_row(row: &Row<'_>) -> rusqlite::Result<User> {
  Ok(User {
    id:        row.get(0)?,
    email:     row.get(1)?,
    is_active: row.get(2)?,
  })
}

pub fn person_from_row(row: &Row<'_>) -> rusqlite::Result<Person> {
  Ok(Person {
    id:     row.get(0)?,
    name:   row.get(1)?,
    email:  row.get(2)?,
    gender: row.get(3)?,
  })
}

pub fn planet_from_row(row: &Row<'_>) -> rusqlite::Result<Planet> {
  Ok(Planet {
    id:         row.get(0)?,
    name:       row.get(1)?,
    climate:    row.get(2)?,
    terrain:    row.get(3)?,
    population: row.get(4)?,
  })
}

// ─── Favorites ───────────────────────────────────────────────────────────────

/// `favorites` joined against both target tables.
pub const FAVORITE_ENTRY_SELECT: &str = "
SELECT f.id, f.user_id, f.person_id, f.planet_id,
       p.name, p.email, p.gender,
       pl.name, pl.climate, pl.terrain, pl.population
FROM favorites f
LEFT JOIN people  p  ON p.id  = f.person_id
LEFT JOIN planets pl ON pl.id = f.planet_id";

/// A favorites row plus the nullable columns of both joined tables.
pub struct RawFavoriteEntry {
  pub id:                i64,
  pub user_id:           i64,
  pub person_id:         Option<i64>,
  pub planet_id:         Option<i64>,
  pub person_name:       Option<String>,
  pub person_email:      Option<String>,
  pub person_gender:     Option<String>,
  pub planet_name:       Option<String>,
  pub planet_climate:    Option<String>,
  pub planet_terrain:    Option<String>,
  pub planet_population: Option<i64>,
}

impl RawFavoriteEntry {
  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(RawFavoriteEntry {
      id:                row.get(0)?,
      user_id:           row.get(1)?,
      person_id:         row.get(2)?,
      planet_id:         row.get(3)?,
      person_name:       row.get(4)?,
      person_email:      row.get(5)?,
      person_gender:     row.get(6)?,
      planet_name:       row.get(7)?,
      planet_climate:    row.get(8)?,
      planet_terrain:    row.get(9)?,
      planet_population: row.get(10)?,
    })
  }

  pub fn into_entry(self) -> Result<FavoriteEntry> {
    let target = FavoriteTarget::from_columns(self.person_id, self.planet_id)
      .ok_or(Error::CorruptFavorite(self.id))?;

    // With foreign keys on, the joined name is only NULL if the row is
    // dangling.
    let item = match target {
      FavoriteTarget::Person(id) => FavoriteItem::Person(Person {
        id,
        name:   self.person_name.ok_or(Error::CorruptFavorite(self.id))?,
        email:  self.person_email,
        gender: self.person_gender,
      }),
      FavoriteTarget::Planet(id) => FavoriteItem::Planet(Planet {
        id,
        name:       self.planet_name.ok_or(Error::CorruptFavorite(self.id))?,
        climate:    self.planet_climate,
        terrain:    self.planet_terrain,
        population: self.planet_population,
      }),
    };

    Ok(FavoriteEntry {
      favorite: Favorite { id: self.id, user_id: self.user_id, target },
      item,
    })
  }
}
