//! Query services, one per resource. Each call is a single statement against the pool.

pub mod catalog;
pub mod favorites;
pub use catalog::{PeopleService, PlanetService, UserService};
pub use favorites::FavoriteService;
