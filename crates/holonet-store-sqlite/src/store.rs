//! [`SqliteStore`] — the SQLite implementation of [`GalaxyStore`].

use std::path::Path;

use holonet_core::{
  entity::{NewUser, Person, PersonInput, Planet, PlanetInput, User},
  favorite::{Favorite, FavoriteEntry, FavoriteTarget},
  store::GalaxyStore,
};
use rusqlite::OptionalExtension as _;

use crate::{
  Result,
  encode::{
    FAVORITE_ENTRY_SELECT, PERSON_COLUMNS, PLANET_COLUMNS, RawFavoriteEntry,
    USER_COLUMNS, is_unique_violation, person_from_row, planet_from_row,
    user_from_row,
  },
  error::Error,
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Holonet store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    tracing::debug!(path = %path.as_ref().display(), "opening sqlite store");
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Insert a row and return its rowid, or `None` if a UNIQUE constraint
  /// rejected it.
  async fn insert_unique(
    &self,
    sql: &'static str,
    params: Vec<rusqlite::types::Value>,
  ) -> Result<Option<i64>> {
    let id = self
      .conn
      .call(move |conn| {
        match conn.execute(sql, rusqlite::params_from_iter(params)) {
          Ok(_) => Ok(Some(conn.last_insert_rowid())),
          Err(e) if is_unique_violation(&e) => Ok(None),
          Err(e) => Err(e.into()),
        }
      })
      .await?;
    Ok(id)
  }

  /// Run a statement that affects at most one row; `true` if it did.
  async fn execute_one(
    &self,
    sql: &'static str,
    params: Vec<rusqlite::types::Value>,
  ) -> Result<bool> {
    let changed = self
      .conn
      .call(move |conn| Ok(conn.execute(sql, rusqlite::params_from_iter(params))?))
      .await?;
    Ok(changed > 0)
  }
}

fn text(value: Option<String>) -> rusqlite::types::Value {
  value.map_or(rusqlite::types::Value::Null, rusqlite::types::Value::Text)
}

fn integer(value: Option<i64>) -> rusqlite::types::Value {
  value.map_or(rusqlite::types::Value::Null, rusqlite::types::Value::Integer)
}

// ─── GalaxyStore impl ────────────────────────────────────────────────────────

impl GalaxyStore for SqliteStore {
  type Error = Error;

  // ── Users ─────────────────────────────────────────────────────────────────

  async fn add_user(&self, input: NewUser) -> Result<User> {
    let NewUser { email, password_hash, is_active } = input;

    let id = self
      .insert_unique(
        "INSERT INTO users (email, password_hash, is_active) VALUES (?1, ?2, ?3)",
        vec![
          email.clone().into(),
          password_hash.into(),
          i64::from(is_active).into(),
        ],
      )
      .await?
      .ok_or_else(|| holonet_core::Error::DuplicateEmail(email.clone()))?;

    Ok(User { id, email, is_active })
  }

  async fn get_user(&self, id: i64) -> Result<Option<User>> {
    let user = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?1"),
            rusqlite::params![id],
            user_from_row,
          )
          .optional()?)
      })
      .await?;
    Ok(user)
  }

  async fn list_users(&self) -> Result<Vec<User>> {
    let users = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare(&format!("SELECT {USER_COLUMNS} FROM users ORDER BY id"))?;
        let rows = stmt
          .query_map([], user_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(users)
  }

  // ── People ────────────────────────────────────────────────────────────────

  async fn add_person(&self, input: PersonInput) -> Result<Person> {
    let name   = input.name.clone();
    let email  = input.email.clone();
    let gender = input.gender.clone();

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO people (name, email, gender) VALUES (?1, ?2, ?3)",
          rusqlite::params![name, email, gender],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(input.into_person(id))
  }

  async fn get_person(&self, id: i64) -> Result<Option<Person>> {
    let person = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {PERSON_COLUMNS} FROM people WHERE id = ?1"),
            rusqlite::params![id],
            person_from_row,
          )
          .optional()?)
      })
      .await?;
    Ok(person)
  }

  async fn list_people(&self) -> Result<Vec<Person>> {
    let people = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare(&format!("SELECT {PERSON_COLUMNS} FROM people ORDER BY id"))?;
        let rows = stmt
          .query_map([], person_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(people)
  }

  async fn replace_person(&self, id: i64, input: PersonInput) -> Result<Option<Person>> {
    let updated = self
      .execute_one(
        "UPDATE people SET name = ?1, email = ?2, gender = ?3 WHERE id = ?4",
        vec![
          input.name.clone().into(),
          text(input.email.clone()),
          text(input.gender.clone()),
          id.into(),
        ],
      )
      .await?;

    Ok(updated.then(|| input.into_person(id)))
  }

  async fn delete_person(&self, id: i64) -> Result<bool> {
    self
      .execute_one("DELETE FROM people WHERE id = ?1", vec![id.into()])
      .await
  }

  // ── Planets ───────────────────────────────────────────────────────────────

  async fn add_planet(&self, input: PlanetInput) -> Result<Planet> {
    let name       = input.name.clone();
    let climate    = input.climate.clone();
    let terrain    = input.terrain.clone();
    let population = input.population;

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO planets (name, climate, terrain, population)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![name, climate, terrain, population],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(input.into_planet(id))
  }

  async fn get_planet(&self, id: i64) -> Result<Option<Planet>> {
    let planet = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {PLANET_COLUMNS} FROM planets WHERE id = ?1"),
            rusqlite::params![id],
            planet_from_row,
          )
          .optional()?)
      })
      .await?;
    Ok(planet)
  }

  async fn list_planets(&self) -> Result<Vec<Planet>> {
    let planets = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare(&format!("SELECT {PLANET_COLUMNS} FROM planets ORDER BY id"))?;
        let rows = stmt
          .query_map([], planet_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(planets)
  }

  async fn replace_planet(&self, id: i64, input: PlanetInput) -> Result<Option<Planet>> {
    let updated = self
      .execute_one(
        "UPDATE planets
         SET name = ?1, climate = ?2, terrain = ?3, population = ?4
         WHERE id = ?5",
        vec![
          input.name.clone().into(),
          text(input.climate.clone()),
          text(input.terrain.clone()),
          integer(input.population),
          id.into(),
        ],
      )
      .await?;

    Ok(updated.then(|| input.into_planet(id)))
  }

  async fn delete_planet(&self, id: i64) -> Result<bool> {
    self
      .execute_one("DELETE FROM planets WHERE id = ?1", vec![id.into()])
      .await
  }

  // ── Favorites ─────────────────────────────────────────────────────────────

  async fn add_favorite(&self, user_id: i64, target: FavoriteTarget) -> Result<Favorite> {
    let id = self
      .insert_unique(
        "INSERT INTO favorites (user_id, person_id, planet_id) VALUES (?1, ?2, ?3)",
        vec![
          user_id.into(),
          integer(target.person_id()),
          integer(target.planet_id()),
        ],
      )
      .await?
      .ok_or(holonet_core::Error::DuplicateFavorite { user_id, target })?;

    Ok(Favorite { id, user_id, target })
  }

  async fn remove_favorite(&self, user_id: i64, target: FavoriteTarget) -> Result<bool> {
    // `IS` compares NULL to NULL as equal, so one statement covers both
    // target kinds.
    self
      .execute_one(
        "DELETE FROM favorites
         WHERE user_id = ?1 AND person_id IS ?2 AND planet_id IS ?3",
        vec![
          user_id.into(),
          integer(target.person_id()),
          integer(target.planet_id()),
        ],
      )
      .await
  }

  async fn list_favorites(&self, user_id: i64) -> Result<Vec<FavoriteEntry>> {
    let raws: Vec<RawFavoriteEntry> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "{FAVORITE_ENTRY_SELECT} WHERE f.user_id = ?1 ORDER BY f.id"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![user_id], RawFavoriteEntry::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawFavoriteEntry::into_entry).collect()
  }
}
