//! `DATABASE_URL` resolution.
//!
//! Accepted forms:
//!
//! | Value | Backend |
//! |-------|---------|
//! | unset | SQLite file `holonet.db` in the system temp directory |
//! | `sqlite::memory:` | in-memory SQLite |
//! | `sqlite://<path>`, `sqlite:<path>`, `<path>` | SQLite file |
//! | `postgres://…`, `postgresql://…` | PostgreSQL (normalised to `postgresql://`) |

use std::path::{Path, PathBuf};

/// Where the store lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseTarget {
  SqliteFile(PathBuf),
  SqliteMemory,
  /// A PostgreSQL URL, always with the `postgresql://` scheme.
  Postgres(String),
}

pub const DEFAULT_DB_FILE: &str = "holonet.db";

/// Rewrite the legacy `postgres://` scheme to `postgresql://`.
pub fn normalize_url(url: &str) -> String {
  match url.strip_prefix("postgres://") {
    Some(rest) => format!("postgresql://{rest}"),
    None => url.to_string(),
  }
}

/// Resolve an optional `DATABASE_URL` into a [`DatabaseTarget`].
pub fn resolve(url: Option<&str>) -> DatabaseTarget {
  let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) else {
    return DatabaseTarget::SqliteFile(std::env::temp_dir().join(DEFAULT_DB_FILE));
  };

  let url = normalize_url(url);
  if url.starts_with("postgresql://") {
    return DatabaseTarget::Postgres(url);
  }

  let path = url
    .strip_prefix("sqlite://")
    .or_else(|| url.strip_prefix("sqlite:"))
    .unwrap_or(&url);
  // Drop connection-string options such as `?mode=rwc`.
  let path = path.split_once('?').map_or(path, |(p, _)| p);

  if path == ":memory:" {
    DatabaseTarget::SqliteMemory
  } else {
    DatabaseTarget::SqliteFile(expand_tilde(Path::new(path)))
  }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unset_falls_back_to_temp_file() {
    let expected = DatabaseTarget::SqliteFile(std::env::temp_dir().join(DEFAULT_DB_FILE));
    assert_eq!(resolve(None), expected);
    assert_eq!(resolve(Some("  ")), expected);
  }

  #[test]
  fn legacy_postgres_scheme_is_normalized() {
    assert_eq!(
      resolve(Some("postgres://u:p@db:5432/holonet")),
      DatabaseTarget::Postgres("postgresql://u:p@db:5432/holonet".into())
    );
    assert_eq!(
      normalize_url("postgresql://db/holonet"),
      "postgresql://db/holonet"
    );
  }

  #[test]
  fn sqlite_forms() {
    assert_eq!(
      resolve(Some("sqlite:///tmp/test.db")),
      DatabaseTarget::SqliteFile("/tmp/test.db".into())
    );
    assert_eq!(
      resolve(Some("sqlite:data/app.db?mode=rwc")),
      DatabaseTarget::SqliteFile("data/app.db".into())
    );
    assert_eq!(
      resolve(Some("plain.db")),
      DatabaseTarget::SqliteFile("plain.db".into())
    );
    assert_eq!(resolve(Some("sqlite::memory:")), DatabaseTarget::SqliteMemory);
  }
}
