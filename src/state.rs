//! Shared application state for all routes.

use crate::config::Backend;
use sqlx::AnyPool;

/// Every favorites request acts on behalf of this user; there is no login.
pub const CURRENT_USER_ID: i64 = 1;

#[derive(Clone)]
pub struct AppState {
    pub pool: AnyPool,
    pub backend: Backend,
    pub current_user_id: i64,
}

impl AppState {
    pub fn new(pool: AnyPool, backend: Backend) -> Self {
        Self {
            pool,
            backend,
            current_user_id: CURRENT_USER_ID,
        }
    }
}
