//! Holocron API: Star Wars people, planets and a user's favorites over SQLite or PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{Backend, Settings};
pub use error::{AppError, ConfigError};
pub use migration::{apply_migrations, seed_demo_catalog};
pub use routes::{api_routes, app, common_routes_with_ready, docs_routes, ApiDoc};
pub use service::{FavoriteService, PeopleService, PlanetService, UserService};
pub use state::{AppState, CURRENT_USER_ID};
pub use store::{connect, connect_in_memory, ensure_database_exists};
