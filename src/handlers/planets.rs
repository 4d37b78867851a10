//! Planet handlers.

use crate::error::{AppError, ErrorBody};
use crate::handlers::parse_id;
use crate::models::Planet;
use crate::response::ok_json;
use crate::service::PlanetService;
use crate::state::AppState;
use axum::extract::{Path, State};

/// GET /planets. An empty catalog answers 404, unlike /people.
#[utoipa::path(
    get,
    path = "/planets",
    tag = "planets",
    responses(
        (status = 200, description = "All planets", body = [Planet]),
        (status = 404, description = "Catalog has no planets", body = ErrorBody)
    )
)]
pub async fn list_planets(State(state): State<AppState>) -> Result<impl axum::response::IntoResponse, AppError> {
    let planets = PlanetService::list(&state.pool).await?;
    if planets.is_empty() {
        return Err(AppError::NotFound("No planets found".into()));
    }
    Ok(ok_json(planets))
}

/// GET /planets/:id
#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = "planets",
    params(("id" = i64, Path, description = "Planet id")),
    responses(
        (status = 200, description = "The planet", body = Planet),
        (status = 404, description = "No such planet", body = ErrorBody)
    )
)]
pub async fn get_planet(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let planet = PlanetService::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Planet not found".into()))?;
    Ok(ok_json(planet))
}
