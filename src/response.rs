//! Response body helpers. Resources are returned bare (no envelope); mutations answer with a `{"msg": ...}` body.

use axum::{http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct Message {
    pub msg: String,
}

pub fn ok_json<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn message(msg: impl Into<String>) -> (StatusCode, Json<Message>) {
    (StatusCode::OK, Json(Message { msg: msg.into() }))
}

pub fn created_message(msg: impl Into<String>) -> (StatusCode, Json<Message>) {
    (StatusCode::CREATED, Json(Message { msg: msg.into() }))
}
