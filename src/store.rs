//! Connection pool setup. One `AnyPool` serves both SQLite and PostgreSQL.

use crate::config::{Backend, Settings};
use crate::error::{AppError, ConfigError};
use sqlx::any::AnyPoolOptions;
use sqlx::postgres::PgConnectOptions;
use sqlx::{AnyPool, ConnectOptions};
use std::str::FromStr;

/// Open the pool described by `settings`. For PostgreSQL the target database is created first if missing.
pub async fn connect(settings: &Settings) -> Result<AnyPool, AppError> {
    sqlx::any::install_default_drivers();
    let backend = settings.backend()?;
    if backend == Backend::Postgres {
        ensure_database_exists(&settings.database_url).await?;
    }
    let pool = AnyPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect(&settings.database_url)
        .await?;
    tracing::info!(?backend, max_connections = settings.max_connections, "database pool ready");
    Ok(pool)
}

/// Private in-memory SQLite database. The pool holds a single connection that never expires, since
/// every new connection to `sqlite::memory:` would see an empty database.
pub async fn connect_in_memory() -> Result<AnyPool, AppError> {
    sqlx::any::install_default_drivers();
    let pool = AnyPoolOptions::new()
        .min_connections(1)
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;
    Ok(pool)
}

/// Connect to the server's `postgres` maintenance database and create the database named in the URL if absent.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin, db_name) = maintenance_target(database_url)?;
    let db_name = match db_name {
        Some(name) if name != "postgres" => name,
        _ => return Ok(()),
    };
    let mut conn: sqlx::PgConnection = admin.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Options for the `postgres` maintenance database on the same server, and the database the URL names (if any).
fn maintenance_target(url: &str) -> Result<(PgConnectOptions, Option<String>), ConfigError> {
    let opts = PgConnectOptions::from_str(url).map_err(|e| ConfigError::InvalidDatabaseUrl(e.to_string()))?;
    let db_name = opts
        .get_database()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);
    Ok((opts.database("postgres"), db_name))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maintenance_target_swaps_database() {
        let (admin, name) = maintenance_target("postgres://u:p@localhost:5432/holocron?sslmode=disable").unwrap();
        assert_eq!(name.as_deref(), Some("holocron"));
        assert_eq!(admin.get_database(), Some("postgres"));
        assert_eq!(admin.get_host(), "localhost");
        assert_eq!(admin.get_port(), 5432);
    }

    #[test]
    fn url_without_database_path_names_no_database() {
        let (admin, name) = maintenance_target("postgres://u:p@db.example.com:5432").unwrap();
        assert_eq!(name, None);
        assert_eq!(admin.get_host(), "db.example.com");
        assert_eq!(admin.get_database(), Some("postgres"));
    }

    #[test]
    fn slash_in_query_string_is_not_the_database() {
        let (admin, name) = maintenance_target("postgres://u:p@db/holocron?sslrootcert=/etc/ssl/ca.pem").unwrap();
        assert_eq!(name.as_deref(), Some("holocron"));
        assert_eq!(admin.get_host(), "db");
        assert_eq!(admin.get_database(), Some("postgres"));
    }

    #[test]
    fn malformed_url_is_a_config_error() {
        let err = maintenance_target("postgres://u:p@db:notaport/holocron").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDatabaseUrl(_)));
    }

    #[test]
    fn quotes_identifiers() {
        assert_eq!(quote_ident("star\"wars"), "\"star\"\"wars\"");
    }

    #[tokio::test]
    async fn in_memory_pool_answers() {
        let pool = connect_in_memory().await.unwrap();
        let one: (i64,) = sqlx::query_as("SELECT 1").fetch_one(&pool).await.unwrap();
        assert_eq!(one.0, 1);
    }
}
