//! Runtime settings read from the environment (optionally seeded from a `.env` file by the binary).

use crate::error::ConfigError;

/// Used when `DATABASE_URL` is unset.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/test.db";
pub const DEFAULT_PORT: u16 = 3000;

/// Which SQL dialect the pool talks to. DDL differs per backend; queries do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Sqlite,
    Postgres,
}

impl Backend {
    pub fn from_url(url: &str) -> Result<Self, ConfigError> {
        let scheme = url.split(':').next().unwrap_or("");
        match scheme {
            "sqlite" => Ok(Backend::Sqlite),
            "postgres" | "postgresql" => Ok(Backend::Postgres),
            other => Err(ConfigError::UnsupportedDatabase(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    /// Insert the demo people/planets into empty tables at startup.
    pub seed_demo_data: bool,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = normalize_database_url(
            lookup("DATABASE_URL")
                .filter(|s| !s.trim().is_empty())
                .as_deref()
                .unwrap_or(DEFAULT_DATABASE_URL),
        );
        Backend::from_url(&database_url)?;

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = match lookup("PORT") {
            Some(v) => v
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidVar { name: "PORT", value: v })?,
            None => DEFAULT_PORT,
        };
        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(v) => v
                .trim()
                .parse()
                .ok()
                .filter(|n: &u32| *n > 0)
                .ok_or(ConfigError::InvalidVar { name: "DB_MAX_CONNECTIONS", value: v })?,
            None => 5,
        };
        let seed_demo_data = match lookup("SEED_DEMO_DATA") {
            Some(v) => parse_flag(&v).ok_or(ConfigError::InvalidVar { name: "SEED_DEMO_DATA", value: v })?,
            None => false,
        };

        Ok(Settings {
            database_url,
            host,
            port,
            max_connections,
            seed_demo_data,
        })
    }

    pub fn backend(&self) -> Result<Backend, ConfigError> {
        Backend::from_url(&self.database_url)
    }
}

/// SQLite file URLs get `mode=rwc` so the file is created on first start.
fn normalize_database_url(url: &str) -> String {
    let url = url.trim();
    if !url.starts_with("sqlite:") || url.contains(":memory:") || url.contains("mode=") {
        return url.to_string();
    }
    if url.contains('?') {
        format!("{}&mode=rwc", url)
    } else {
        format!("{}?mode=rwc", url)
    }
}

fn parse_flag(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
