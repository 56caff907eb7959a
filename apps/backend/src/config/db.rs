use std::env;

use crate::error::AppError;

/// Where the books table lives.
#[derive(Debug, Clone, PartialEq)]
pub enum DbProfile {
    /// Production Postgres database (`PROD_DB`)
    Prod,
    /// Test Postgres database (`TEST_DB`) - enforces the `_test` suffix
    Test,
    /// SQLite file; `None` falls back to `SQLITE_DB_PATH` or `./books.db`
    SqliteFile { file: Option<String> },
    /// Private in-memory SQLite database, gone when the pool closes
    InMemory,
}

impl DbProfile {
    /// Select a profile from `DB_KIND` (`postgres` | `sqlite` | `memory`).
    /// Unset means `postgres`.
    pub fn from_env() -> Result<Self, AppError> {
        let kind = env::var("DB_KIND").unwrap_or_else(|_| "postgres".to_string());
        match kind.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(DbProfile::Prod),
            "sqlite" => Ok(DbProfile::SqliteFile { file: None }),
            "memory" => Ok(DbProfile::InMemory),
            other => Err(AppError::config(format!(
                "DB_KIND must be one of postgres, sqlite, memory; got '{other}'"
            ))),
        }
    }

    pub fn is_sqlite(&self) -> bool {
        matches!(self, DbProfile::SqliteFile { .. } | DbProfile::InMemory)
    }
}

/// Builds a database URL from environment variables for the given profile
pub fn db_url(profile: &DbProfile) -> Result<String, AppError> {
    match profile {
        DbProfile::Prod | DbProfile::Test => {
            let host = host();
            let port = port();
            let db_name = db_name(profile)?;
            let (username, password) = credentials()?;
            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
        DbProfile::SqliteFile { file } => {
            let path = match file {
                Some(path) => path.clone(),
                None => env::var("SQLITE_DB_PATH").unwrap_or_else(|_| "./books.db".to_string()),
            };
            // mode=rwc creates the file on first boot
            Ok(format!("sqlite://{path}?mode=rwc"))
        }
        DbProfile::InMemory => Ok("sqlite::memory:".to_string()),
    }
}

/// Get database host from environment (defaults to localhost)
fn host() -> String {
    env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string())
}

/// Get database port from environment (defaults to 5432)
fn port() -> String {
    env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string())
}

fn db_name(profile: &DbProfile) -> Result<String, AppError> {
    match profile {
        DbProfile::Test => {
            let db_name = must_var("TEST_DB")?;
            if !db_name.ends_with("_test") {
                return Err(AppError::config(format!(
                    "Test profile requires database name to end with '_test', but got: '{db_name}'"
                )));
            }
            Ok(db_name)
        }
        _ => must_var("PROD_DB"),
    }
}

fn credentials() -> Result<(String, String), AppError> {
    let username = must_var("APP_DB_USER")?;
    let password = must_var("APP_DB_PASSWORD")?;
    Ok((username, password))
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
