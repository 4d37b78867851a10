//! HTTP handlers for the catalog, users and favorites.

pub mod favorites;
pub mod people;
pub mod planets;
pub mod users;
pub use favorites::*;
pub use people::*;
pub use planets::*;
pub use users::*;

use crate::error::AppError;

/// Parse an `:id` path segment. Non-integers become a JSON 400 rather than axum's plain-text rejection.
pub(crate) fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id '{}'", id_str)))
}

/// Any path no route matches.
pub async fn route_not_found() -> AppError {
    AppError::NotFound("Not found".into())
}
