//! Read queries over people, planets and users.

use crate::error::AppError;
use crate::models::{NewUser, Person, Planet, UserSummary};
use sqlx::AnyPool;

pub struct PeopleService;

impl PeopleService {
    pub async fn list(pool: &AnyPool) -> Result<Vec<Person>, AppError> {
        let sql = "SELECT id, name, height, gender FROM people ORDER BY id";
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as(sql).fetch_all(pool).await?)
    }

    pub async fn get(pool: &AnyPool, id: i64) -> Result<Option<Person>, AppError> {
        let sql = "SELECT id, name, height, gender FROM people WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as(sql).bind(id).fetch_optional(pool).await?)
    }

    pub async fn exists(pool: &AnyPool, id: i64) -> Result<bool, AppError> {
        exists_in(pool, "SELECT id FROM people WHERE id = $1", id).await
    }
}

pub struct PlanetService;

impl PlanetService {
    pub async fn list(pool: &AnyPool) -> Result<Vec<Planet>, AppError> {
        let sql = "SELECT id, name, terrain, population FROM planets ORDER BY id";
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as(sql).fetch_all(pool).await?)
    }

    pub async fn get(pool: &AnyPool, id: i64) -> Result<Option<Planet>, AppError> {
        let sql = "SELECT id, name, terrain, population FROM planets WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as(sql).bind(id).fetch_optional(pool).await?)
    }

    pub async fn exists(pool: &AnyPool, id: i64) -> Result<bool, AppError> {
        exists_in(pool, "SELECT id FROM planets WHERE id = $1", id).await
    }
}

pub struct UserService;

impl UserService {
    pub async fn list(pool: &AnyPool) -> Result<Vec<UserSummary>, AppError> {
        let sql = "SELECT id, email FROM users ORDER BY id";
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as(sql).fetch_all(pool).await?)
    }

    /// Insert `user` unless a row with its id (or email) already exists. Returns true when a row was written.
    pub async fn ensure_user(pool: &AnyPool, user: &NewUser) -> Result<bool, AppError> {
        let sql = "INSERT INTO users (id, email, password, is_active) VALUES ($1, $2, $3, $4) ON CONFLICT DO NOTHING";
        tracing::debug!(sql = %sql, id = user.id, "query");
        let result = sqlx::query(sql)
            .bind(user.id)
            .bind(&user.email)
            .bind(&user.password)
            .bind(user.is_active)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Make sure the user that favorites are recorded for exists.
    pub async fn ensure_default_user(pool: &AnyPool, id: i64) -> Result<(), AppError> {
        let user = NewUser {
            id,
            email: format!("user{}@holocron.local", id),
            password: "changeme".into(),
            is_active: true,
        };
        if Self::ensure_user(pool, &user).await? {
            tracing::info!(user_id = id, email = %user.email, "created default user");
        }
        Ok(())
    }
}

async fn exists_in(pool: &AnyPool, sql: &str, id: i64) -> Result<bool, AppError> {
    tracing::debug!(sql = %sql, id, "query");
    let row: Option<(i64,)> = sqlx::query_as(sql).bind(id).fetch_optional(pool).await?;
    Ok(row.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Backend;
    use crate::migration::{apply_migrations, seed_demo_catalog};
    use crate::store::connect_in_memory;

    async fn seeded() -> AnyPool {
        let pool = connect_in_memory().await.unwrap();
        apply_migrations(&pool, Backend::Sqlite).await.unwrap();
        seed_demo_catalog(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn people_are_listed_in_id_order() {
        let pool = seeded().await;
        let people = PeopleService::list(&pool).await.unwrap();
        assert_eq!(people.len(), 4);
        assert_eq!(people[0].name, "Luke Skywalker");
        assert_eq!(people[0].height, Some(172));
        assert!(people.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[tokio::test]
    async fn get_missing_returns_none() {
        let pool = seeded().await;
        assert!(PeopleService::get(&pool, 999).await.unwrap().is_none());
        assert!(PlanetService::get(&pool, 999).await.unwrap().is_none());
        assert!(!PlanetService::exists(&pool, 999).await.unwrap());
        assert!(PeopleService::exists(&pool, 1).await.unwrap());
    }

    #[tokio::test]
    async fn planet_with_unknown_population() {
        let pool = seeded().await;
        let hoth = PlanetService::get(&pool, 3).await.unwrap().unwrap();
        assert_eq!(hoth.name, "Hoth");
        assert_eq!(hoth.population, None);
    }

    #[tokio::test]
    async fn default_user_is_created_once() {
        let pool = seeded().await;
        UserService::ensure_default_user(&pool, 1).await.unwrap();
        UserService::ensure_default_user(&pool, 1).await.unwrap();
        let users = UserService::list(&pool).await.unwrap();
        assert_eq!(users, vec![UserSummary { id: 1, email: "user1@holocron.local".into() }]);
    }
}
