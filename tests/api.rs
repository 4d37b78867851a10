use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use holocron_api::{
    app, apply_migrations, connect_in_memory, seed_demo_catalog, AppState, Backend, UserService, CURRENT_USER_ID,
};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn state(seed: bool) -> AppState {
    let pool = connect_in_memory().await.unwrap();
    apply_migrations(&pool, Backend::Sqlite).await.unwrap();
    UserService::ensure_default_user(&pool, CURRENT_USER_ID).await.unwrap();
    if seed {
        seed_demo_catalog(&pool).await.unwrap();
    }
    AppState::new(pool, Backend::Sqlite)
}

async fn call(state: &AppState, method: Method, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri).body(Body::empty()).unwrap();
    let response = app(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn lists_people() {
    let state = state(true).await;
    let (status, body) = call(&state, Method::GET, "/people").await;
    assert_eq!(status, StatusCode::OK);
    let people = body.as_array().unwrap();
    assert_eq!(people.len(), 4);
    assert_eq!(
        people[0],
        json!({ "id": 1, "name": "Luke Skywalker", "height": 172, "gender": "male" })
    );
}

#[tokio::test]
async fn empty_people_is_an_empty_list() {
    let state = state(false).await;
    let (status, body) = call(&state, Method::GET, "/people").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn missing_person_is_404() {
    let state = state(true).await;
    let (status, body) = call(&state, Method::GET, "/people/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");
    assert_eq!(body["error"]["message"], "Person not found");
}

#[tokio::test]
async fn non_integer_id_is_400() {
    let state = state(true).await;
    let (status, body) = call(&state, Method::GET, "/people/luke").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "bad_request");

    let (status, body) = call(&state, Method::POST, "/favorite/planet/1.5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "bad_request");
}

#[tokio::test]
async fn unknown_route_is_json_404() {
    let state = state(false).await;
    let (status, body) = call(&state, Method::GET, "/starships").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn gets_planet_and_tolerates_trailing_slash() {
    let state = state(true).await;
    let (status, body) = call(&state, Method::GET, "/planets/1/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "id": 1, "name": "Tatooine", "terrain": "desert", "population": 200000 })
    );
    let (status, _) = call(&state, Method::GET, "/planets/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_planets_is_404() {
    let state = state(false).await;
    let (status, body) = call(&state, Method::GET, "/planets").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "No planets found");
}

#[tokio::test]
async fn users_hide_passwords() {
    let state = state(true).await;
    let (status, body) = call(&state, Method::GET, "/users").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{ "id": 1, "email": "user1@holocron.local" }]));
}

#[tokio::test]
async fn favorite_planet_roundtrip() {
    let state = state(true).await;
    let (status, body) = call(&state, Method::POST, "/favorite/planet/2").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "msg": "Favorite planet added" }));

    let (status, body) = call(&state, Method::GET, "/users/favorites").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{ "type": "planet", "name": "Alderaan" }]));

    let (status, body) = call(&state, Method::DELETE, "/favorite/planet/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "msg": "Favorite planet deleted" }));

    let (_, body) = call(&state, Method::GET, "/users/favorites").await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn favorite_people_roundtrip() {
    let state = state(true).await;
    let (status, body) = call(&state, Method::POST, "/favorite/people/2").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "msg": "Favorite person added" }));
    call(&state, Method::POST, "/favorite/planet/3").await;

    let (_, body) = call(&state, Method::GET, "/users/favorites").await;
    assert_eq!(
        body,
        json!([
            { "type": "character", "name": "Leia Organa" },
            { "type": "planet", "name": "Hoth" }
        ])
    );

    let (status, body) = call(&state, Method::DELETE, "/favorite/people/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "msg": "Favorite person deleted" }));
    let (_, body) = call(&state, Method::GET, "/users/favorites").await;
    assert_eq!(body, json!([{ "type": "planet", "name": "Hoth" }]));
}

#[tokio::test]
async fn favorite_of_missing_target_is_404() {
    let state = state(true).await;
    let (status, _) = call(&state, Method::POST, "/favorite/people/404").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = call(&state, Method::POST, "/favorite/planet/404").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_unknown_favorite_is_404() {
    let state = state(true).await;
    let (status, body) = call(&state, Method::DELETE, "/favorite/planet/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Favorite not found");
}

#[tokio::test]
async fn sitemap_lists_api_routes() {
    let state = state(false).await;
    let (status, body) = call(&state, Method::GET, "/").await;
    assert_eq!(status, StatusCode::OK);
    let endpoints = body["endpoints"].as_array().unwrap();
    assert_eq!(endpoints.len(), 10);
    assert!(endpoints.contains(&json!({ "method": "DELETE", "path": "/favorite/people/:id" })));
}

#[tokio::test]
async fn openapi_and_common_routes() {
    let state = state(false).await;
    let (status, body) = call(&state, Method::GET, "/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/users/favorites"]["get"].is_object());

    let (status, body) = call(&state, Method::GET, "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok", "backend": "sqlite", "database": "ok" }));

    let (status, body) = call(&state, Method::GET, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn ready_degrades_when_pool_is_closed() {
    let state = state(false).await;
    state.pool.close().await;
    let (status, body) = call(&state, Method::GET, "/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({ "status": "degraded", "backend": "sqlite", "database": "unavailable" }));
}
