//! Server binary: reads settings, prepares the database, serves the API.

use axum::{extract::Request, ServiceExt};
use holocron_api::{apply_migrations, app, connect, seed_demo_catalog, AppState, Settings, UserService, CURRENT_USER_ID};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("holocron_api=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let backend = settings.backend()?;
    let pool = connect(&settings).await?;
    apply_migrations(&pool, backend).await?;
    UserService::ensure_default_user(&pool, CURRENT_USER_ID).await?;
    if settings.seed_demo_data {
        seed_demo_catalog(&pool).await?;
    }

    let state = AppState::new(pool, backend);
    let listener = TcpListener::bind((settings.host.as_str(), settings.port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app(state))).await?;
    Ok(())
}
