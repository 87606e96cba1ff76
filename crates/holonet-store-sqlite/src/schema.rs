//! SQL schema for the Holonet SQLite store.
//!
//! Executed once at connection startup. Foreign keys are switched on here;
//! SQLite ignores `ON DELETE CASCADE` without it.

/// Full schema DDL; idempotent thanks to `CREATE ... IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS users (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    email         TEXT    NOT NULL UNIQUE,
    password_hash TEXT    NOT NULL,
    is_active     INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS people (
    id     INTEGER PRIMARY KEY AUTOINCREMENT,
    name   TEXT NOT NULL,
    email  TEXT,
    gender TEXT
);

CREATE TABLE IF NOT EXISTS planets (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    name       TEXT NOT NULL,
    climate    TEXT,
    terrain    TEXT,
    population INTEGER
);

-- Exactly one of person_id / planet_id is set.
CREATE TABLE IF NOT EXISTS favorites (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id   INTEGER NOT NULL REFERENCES users(id)   ON DELETE CASCADE,
    person_id INTEGER          REFERENCES people(id)  ON DELETE CASCADE,
    planet_id INTEGER          REFERENCES planets(id) ON DELETE CASCADE,
    CHECK ((person_id IS NULL) <> (planet_id IS NULL))
);

CREATE UNIQUE INDEX IF NOT EXISTS favorites_user_person_idx
    ON favorites(user_id, person_id) WHERE person_id IS NOT NULL;
CREATE UNIQUE INDEX IF NOT EXISTS favorites_user_planet_idx
    ON favorites(user_id, planet_id) WHERE planet_id IS NOT NULL;
CREATE INDEX IF NOT EXISTS favorites_person_idx ON favorites(person_id);
CREATE INDEX IF NOT EXISTS favorites_planet_idx ON favorites(planet_id);

PRAGMA user_version = 1;
";
