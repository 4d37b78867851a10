//! Router assembly.

pub mod api;
pub mod common;
pub mod docs;

pub use api::{api_routes, API_ENDPOINTS};
pub use common::common_routes_with_ready;
pub use docs::{docs_routes, ApiDoc};

use crate::handlers::route_not_found;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

/// The full service: API, common and docs routes with tracing and permissive CORS.
/// Unmatched paths answer a JSON 404. Trailing slashes are trimmed before routing, so `/people/` is `/people`.
pub fn app(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(docs_routes())
        .merge(common_routes_with_ready(state.clone()))
        .merge(api_routes(state))
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());
    NormalizePathLayer::trim_trailing_slash().layer(router)
}
