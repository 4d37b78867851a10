//! Resolve the user a request acts for.

use crate::state::AppState;
use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};

/// Id of the acting user. Always the state's fixed user; requests carry no identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrentUser(pub i64);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(_parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        Ok(CurrentUser(state.current_user_id))
    }
}
