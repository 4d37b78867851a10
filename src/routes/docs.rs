//! Sitemap and OpenAPI document.

use crate::error::{ErrorBody, ErrorDetail};
use crate::handlers;
use crate::models::{FavoriteEntry, FavoriteKind, Person, Planet, UserSummary};
use crate::response::Message;
use crate::routes::api::API_ENDPOINTS;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Holocron API", description = "Star Wars people, planets and a user's favorites"),
    paths(
        handlers::people::list_people,
        handlers::people::get_person,
        handlers::planets::list_planets,
        handlers::planets::get_planet,
        handlers::users::list_users,
        handlers::users::list_user_favorites,
        handlers::favorites::add_favorite_planet,
        handlers::favorites::add_favorite_person,
        handlers::favorites::delete_favorite_planet,
        handlers::favorites::delete_favorite_person,
    ),
    components(schemas(
        Person,
        Planet,
        UserSummary,
        FavoriteEntry,
        FavoriteKind,
        Message,
        ErrorBody,
        ErrorDetail
    ))
)]
pub struct ApiDoc;

#[derive(Debug, Serialize)]
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Sitemap {
    pub endpoints: Vec<Endpoint>,
}

/// GET /
async fn sitemap() -> Json<Sitemap> {
    Json(Sitemap {
        endpoints: API_ENDPOINTS
            .iter()
            .map(|&(method, path)| Endpoint { method, path })
            .collect(),
    })
}

/// GET /openapi.json
async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn docs_routes() -> Router {
    Router::new()
        .route("/", get(sitemap))
        .route("/openapi.json", get(openapi))
}
