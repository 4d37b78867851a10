//! Schema creation and seed data. DDL is idempotent (`IF NOT EXISTS`) and runs at every startup.
//! Only primary-key syntax differs between backends.

use crate::config::Backend;
use crate::error::AppError;
use crate::models::{NewPerson, NewPlanet};
use sqlx::AnyPool;

fn id_column(backend: Backend) -> &'static str {
    match backend {
        Backend::Sqlite => "id INTEGER PRIMARY KEY AUTOINCREMENT",
        Backend::Postgres => "id BIGSERIAL PRIMARY KEY",
    }
}

fn table_ddl(backend: Backend) -> Vec<String> {
    let id = id_column(backend);
    vec![
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                {id},
                email TEXT NOT NULL UNIQUE,
                password TEXT NOT NULL,
                is_active BOOLEAN NOT NULL DEFAULT TRUE
            )
            "#
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS people (
                {id},
                name TEXT NOT NULL UNIQUE,
                height BIGINT,
                gender TEXT
            )
            "#
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS planets (
                {id},
                name TEXT NOT NULL UNIQUE,
                terrain TEXT,
                population BIGINT
            )
            "#
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS favorites (
                {id},
                user_id BIGINT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                planet_id BIGINT REFERENCES planets(id) ON DELETE CASCADE,
                people_id BIGINT REFERENCES people(id) ON DELETE CASCADE,
                CONSTRAINT favorites_one_target CHECK ((planet_id IS NULL) <> (people_id IS NULL))
            )
            "#
        ),
        "CREATE INDEX IF NOT EXISTS favorites_user_id_idx ON favorites (user_id)".to_string(),
    ]
}

/// Create the catalog tables if they don't exist yet.
pub async fn apply_migrations(pool: &AnyPool, backend: Backend) -> Result<(), AppError> {
    for ddl in table_ddl(backend) {
        tracing::debug!(sql = %ddl, "ddl");
        sqlx::query(&ddl).execute(pool).await?;
    }
    tracing::info!(?backend, "schema up to date");
    Ok(())
}

pub const DEMO_PEOPLE: &[NewPerson] = &[
    NewPerson { name: "Luke Skywalker", height: Some(172), gender: Some("male") },
    NewPerson { name: "Leia Organa", height: Some(150), gender: Some("female") },
    NewPerson { name: "C-3PO", height: Some(167), gender: Some("n/a") },
    NewPerson { name: "Darth Vader", height: Some(202), gender: Some("male") },
];

pub const DEMO_PLANETS: &[NewPlanet] = &[
    NewPlanet { name: "Tatooine", terrain: Some("desert"), population: Some(200_000) },
    NewPlanet { name: "Alderaan", terrain: Some("grasslands, mountains"), population: Some(2_000_000_000) },
    NewPlanet { name: "Hoth", terrain: Some("tundra, ice caves, mountain ranges"), population: None },
];

/// Fill empty `people` and `planets` tables with the demo catalog. Tables that already hold rows are left alone.
pub async fn seed_demo_catalog(pool: &AnyPool) -> Result<(), AppError> {
    let (people,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM people").fetch_one(pool).await?;
    if people == 0 {
        let mut tx = pool.begin().await?;
        for p in DEMO_PEOPLE {
            sqlx::query("INSERT INTO people (name, height, gender) VALUES ($1, $2, $3)")
                .bind(p.name)
                .bind(p.height)
                .bind(p.gender)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        tracing::info!(count = DEMO_PEOPLE.len(), "seeded people");
    }

    let (planets,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM planets").fetch_one(pool).await?;
    if planets == 0 {
        let mut tx = pool.begin().await?;
        for p in DEMO_PLANETS {
            sqlx::query("INSERT INTO planets (name, terrain, population) VALUES ($1, $2, $3)")
                .bind(p.name)
                .bind(p.terrain)
                .bind(p.population)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        tracing::info!(count = DEMO_PLANETS.len(), "seeded planets");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::connect_in_memory;

    async fn migrated() -> AnyPool {
        let pool = connect_in_memory().await.unwrap();
        apply_migrations(&pool, Backend::Sqlite).await.unwrap();
        pool
    }

    #[test]
    fn postgres_ddl_uses_bigserial() {
        let ddl = table_ddl(Backend::Postgres);
        assert!(ddl.iter().take(4).all(|s| s.contains("BIGSERIAL PRIMARY KEY")));
        assert!(table_ddl(Backend::Sqlite)[0].contains("AUTOINCREMENT"));
    }

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let pool = migrated().await;
        apply_migrations(&pool, Backend::Sqlite).await.unwrap();
    }

    #[tokio::test]
    async fn seeding_only_fills_empty_tables() {
        let pool = migrated().await;
        seed_demo_catalog(&pool).await.unwrap();
        seed_demo_catalog(&pool).await.unwrap();
        let (people,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM people").fetch_one(&pool).await.unwrap();
        let (planets,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM planets").fetch_one(&pool).await.unwrap();
        assert_eq!(people as usize, DEMO_PEOPLE.len());
        assert_eq!(planets as usize, DEMO_PLANETS.len());
    }

    #[tokio::test]
    async fn favorite_needs_exactly_one_target() {
        let pool = migrated().await;
        seed_demo_catalog(&pool).await.unwrap();
        sqlx::query("INSERT INTO users (id, email, password) VALUES (1, 'a@b.c', 'x')")
            .execute(&pool)
            .await
            .unwrap();

        let neither = sqlx::query("INSERT INTO favorites (user_id) VALUES (1)").execute(&pool).await;
        assert!(neither.is_err());
        let both = sqlx::query("INSERT INTO favorites (user_id, planet_id, people_id) VALUES (1, 1, 1)")
            .execute(&pool)
            .await;
        assert!(both.is_err());
        let one = sqlx::query("INSERT INTO favorites (user_id, planet_id) VALUES (1, 1)")
            .execute(&pool)
            .await;
        assert!(one.is_ok());
    }
}
