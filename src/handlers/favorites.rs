//! Add and remove favorites of the current user.

use crate::error::{AppError, ErrorBody};
use crate::extractors::CurrentUser;
use crate::handlers::parse_id;
use crate::models::FavoriteTarget;
use crate::response::{created_message, message, Message};
use crate::service::FavoriteService;
use crate::state::AppState;
use axum::extract::{Path, State};

/// POST /favorite/planet/:id
#[utoipa::path(
    post,
    path = "/favorite/planet/{id}",
    tag = "favorites",
    params(("id" = i64, Path, description = "Planet id")),
    responses(
        (status = 201, description = "Favorite recorded", body = Message),
        (status = 404, description = "No such planet", body = ErrorBody)
    )
)]
pub async fn add_favorite_planet(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id)?;
    FavoriteService::add(&state.pool, user_id, FavoriteTarget::Planet(id)).await?;
    Ok(created_message("Favorite planet added"))
}

/// POST /favorite/people/:id
#[utoipa::path(
    post,
    path = "/favorite/people/{id}",
    tag = "favorites",
    params(("id" = i64, Path, description = "Person id")),
    responses(
        (status = 201, description = "Favorite recorded", body = Message),
        (status = 404, description = "No such person", body = ErrorBody)
    )
)]
pub async fn add_favorite_person(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id)?;
    FavoriteService::add(&state.pool, user_id, FavoriteTarget::Person(id)).await?;
    Ok(created_message("Favorite person added"))
}

/// DELETE /favorite/planet/:id
#[utoipa::path(
    delete,
    path = "/favorite/planet/{id}",
    tag = "favorites",
    params(("id" = i64, Path, description = "Planet id")),
    responses(
        (status = 200, description = "Favorite removed", body = Message),
        (status = 404, description = "Planet is not a favorite", body = ErrorBody)
    )
)]
pub async fn delete_favorite_planet(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id)?;
    FavoriteService::remove(&state.pool, user_id, FavoriteTarget::Planet(id)).await?;
    Ok(message("Favorite planet deleted"))
}

/// DELETE /favorite/people/:id
#[utoipa::path(
    delete,
    path = "/favorite/people/{id}",
    tag = "favorites",
    params(("id" = i64, Path, description = "Person id")),
    responses(
        (status = 200, description = "Favorite removed", body = Message),
        (status = 404, description = "Person is not a favorite", body = ErrorBody)
    )
)]
pub async fn delete_favorite_person(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id)?;
    FavoriteService::remove(&state.pool, user_id, FavoriteTarget::Person(id)).await?;
    Ok(message("Favorite person deleted"))
}
