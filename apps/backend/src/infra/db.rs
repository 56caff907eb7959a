use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbProfile};
use crate::error::AppError;

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);
const POSTGRES_MAX_CONNECTIONS: u32 = 10;
const IN_MEMORY_LIFETIME: Duration = Duration::from_secs(24 * 60 * 60);

/// Sanitize database URL by masking the password.
pub fn sanitize_db_url(url: &str) -> String {
    let Some((auth_part, host_part)) = url.split_once('@') else {
        return url.to_string();
    };
    match auth_part.rfind(':') {
        Some(colon_pos) if !auth_part[colon_pos + 1..].starts_with("//") => {
            format!("{}:***@{}", &auth_part[..colon_pos], host_part)
        }
        _ => url.to_string(),
    }
}

fn connect_options(profile: &DbProfile, url: String) -> ConnectOptions {
    let mut opt = ConnectOptions::new(url);
    opt.acquire_timeout(ACQUIRE_TIMEOUT).sqlx_logging(false);

    match profile {
        DbProfile::Prod | DbProfile::Test => {
            opt.max_connections(POSTGRES_MAX_CONNECTIONS);
        }
        // One writer; concurrent requests queue on the pool instead of SQLITE_BUSY.
        DbProfile::SqliteFile { .. } => {
            opt.min_connections(1).max_connections(1);
        }
        // Every connection to sqlite::memory: is a separate database, so the
        // single connection must never be recycled.
        DbProfile::InMemory => {
            opt.min_connections(1)
                .max_connections(1)
                .idle_timeout(IN_MEMORY_LIFETIME)
                .max_lifetime(IN_MEMORY_LIFETIME);
        }
    }

    opt
}

/// Open the connection pool for a profile. Does not touch the schema.
pub async fn connect_db(profile: &DbProfile) -> Result<DatabaseConnection, AppError> {
    let url = db_url(profile)?;
    let sanitized = sanitize_db_url(&url);

    let conn = Database::connect(connect_options(profile, url))
        .await
        .map_err(|e| AppError::config(format!("failed to connect to {sanitized}: {e}")))?;

    info!(db = %sanitized, "database connected");
    Ok(conn)
}
