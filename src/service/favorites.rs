//! Favorites of a user: list with target names, add, remove.

use crate::error::AppError;
use crate::models::{FavoriteEntry, FavoriteRow, FavoriteTarget};
use crate::service::catalog::{PeopleService, PlanetService};
use sqlx::AnyPool;

pub struct FavoriteService;

impl FavoriteService {
    /// Favorites of `user_id` in insertion order. Rows whose target is gone are skipped.
    pub async fn list_for_user(pool: &AnyPool, user_id: i64) -> Result<Vec<FavoriteEntry>, AppError> {
        let sql = r#"
            SELECT f.id, f.planet_id, f.people_id, pl.name AS planet_name, pe.name AS person_name
            FROM favorites f
            LEFT JOIN planets pl ON pl.id = f.planet_id
            LEFT JOIN people pe ON pe.id = f.people_id
            WHERE f.user_id = $1
            ORDER BY f.id
        "#;
        tracing::debug!(sql = %sql, user_id, "query");
        let rows: Vec<FavoriteRow> = sqlx::query_as(sql).bind(user_id).fetch_all(pool).await?;
        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            let id = row.id;
            match row.into_entry() {
                Some(entry) => out.push(entry),
                None => tracing::warn!(favorite_id = id, "favorite without a resolvable target"),
            }
        }
        Ok(out)
    }

    /// Record a favorite. The target row must exist; duplicates are allowed.
    pub async fn add(pool: &AnyPool, user_id: i64, target: FavoriteTarget) -> Result<(), AppError> {
        let found = match target {
            FavoriteTarget::Planet(id) => PlanetService::exists(pool, id).await?,
            FavoriteTarget::Person(id) => PeopleService::exists(pool, id).await?,
        };
        if !found {
            return Err(not_found_target(target));
        }
        let (planet_id, people_id) = target.columns();
        let sql = "INSERT INTO favorites (user_id, planet_id, people_id) VALUES ($1, $2, $3)";
        tracing::debug!(sql = %sql, user_id, ?target, "query");
        sqlx::query(sql)
            .bind(user_id)
            .bind(planet_id)
            .bind(people_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Remove the oldest favorite of `user_id` pointing at `target`.
    pub async fn remove(pool: &AnyPool, user_id: i64, target: FavoriteTarget) -> Result<(), AppError> {
        let sql = match target {
            FavoriteTarget::Planet(_) => {
                "DELETE FROM favorites WHERE id = (SELECT id FROM favorites WHERE user_id = $1 AND planet_id = $2 ORDER BY id LIMIT 1)"
            }
            FavoriteTarget::Person(_) => {
                "DELETE FROM favorites WHERE id = (SELECT id FROM favorites WHERE user_id = $1 AND people_id = $2 ORDER BY id LIMIT 1)"
            }
        };
        let target_id = match target {
            FavoriteTarget::Planet(id) | FavoriteTarget::Person(id) => id,
        };
        tracing::debug!(sql = %sql, user_id, ?target, "query");
        let result = sqlx::query(sql).bind(user_id).bind(target_id).execute(pool).await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Favorite not found".into()));
        }
        Ok(())
    }
}

fn not_found_target(target: FavoriteTarget) -> AppError {
    match target {
        FavoriteTarget::Planet(_) => AppError::NotFound("Planet not found".into()),
        FavoriteTarget::Person(_) => AppError::NotFound("Person not found".into()),
    }
}
