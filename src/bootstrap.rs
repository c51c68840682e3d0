use anyhow::{Context, Result};
use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{app_state::AppState, config::AppConfig};

pub fn init_tracing() {
    tracing_subscriber::fmt::init();
}

pub fn init_env() {
    dotenvy::dotenv().ok();
}

/// Builds the shared state, attaches the HTTP middleware stack, and serves
/// the app until the process is stopped.
pub async fn bootstrap(service_name: &str, app: Router<AppState>, config: &AppConfig) -> Result<()> {
    let state = AppState::init(config).await?;
    let app = app
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("{service_name} running at http://{addr}/");
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
