//! Catalog and favorites routes.

use crate::handlers::{
    add_favorite_person, add_favorite_planet, delete_favorite_person, delete_favorite_planet, get_person, get_planet,
    list_people, list_planets, list_user_favorites, list_users,
};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

/// Method and path of every API route, as listed by the sitemap.
pub const API_ENDPOINTS: &[(&str, &str)] = &[
    ("GET", "/people"),
    ("GET", "/people/:id"),
    ("GET", "/planets"),
    ("GET", "/planets/:id"),
    ("GET", "/users"),
    ("GET", "/users/favorites"),
    ("POST", "/favorite/planet/:id"),
    ("DELETE", "/favorite/planet/:id"),
    ("POST", "/favorite/people/:id"),
    ("DELETE", "/favorite/people/:id"),
];

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/people", get(list_people))
        .route("/people/:id", get(get_person))
        .route("/planets", get(list_planets))
        .route("/planets/:id", get(get_planet))
        .route("/users", get(list_users))
        .route("/users/favorites", get(list_user_favorites))
        .route(
            "/favorite/planet/:id",
            post(add_favorite_planet).delete(delete_favorite_planet),
        )
        .route(
            "/favorite/people/:id",
            post(add_favorite_person).delete(delete_favorite_person),
        )
        .with_state(state)
}
