//! User handlers.

use crate::error::AppError;
use crate::extractors::CurrentUser;
use crate::models::{FavoriteEntry, UserSummary};
use crate::response::ok_json;
use crate::service::{FavoriteService, UserService};
use crate::state::AppState;
use axum::extract::State;

/// GET /users
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses((status = 200, description = "All users (id and email only)", body = [UserSummary]))
)]
pub async fn list_users(State(state): State<AppState>) -> Result<impl axum::response::IntoResponse, AppError> {
    let users = UserService::list(&state.pool).await?;
    Ok(ok_json(users))
}

/// GET /users/favorites — favorites of the current user.
#[utoipa::path(
    get,
    path = "/users/favorites",
    tag = "users",
    responses((status = 200, description = "Favorites of the current user", body = [FavoriteEntry]))
)]
pub async fn list_user_favorites(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let favorites = FavoriteService::list_for_user(&state.pool, user_id).await?;
    Ok(ok_json(favorites))
}
