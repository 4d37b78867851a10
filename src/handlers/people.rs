//! People handlers.

use crate::error::{AppError, ErrorBody};
use crate::handlers::parse_id;
use crate::models::Person;
use crate::response::ok_json;
use crate::service::PeopleService;
use crate::state::AppState;
use axum::extract::{Path, State};

/// GET /people
#[utoipa::path(
    get,
    path = "/people",
    tag = "people",
    responses((status = 200, description = "All people", body = [Person]))
)]
pub async fn list_people(State(state): State<AppState>) -> Result<impl axum::response::IntoResponse, AppError> {
    let people = PeopleService::list(&state.pool).await?;
    Ok(ok_json(people))
}

/// GET /people/:id
#[utoipa::path(
    get,
    path = "/people/{id}",
    tag = "people",
    params(("id" = i64, Path, description = "Person id")),
    responses(
        (status = 200, description = "The person", body = Person),
        (status = 404, description = "No such person", body = ErrorBody)
    )
)]
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let person = PeopleService::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Person not found".into()))?;
    Ok(ok_json(person))
}
