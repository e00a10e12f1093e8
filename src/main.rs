use std::sync::Arc;

use anyhow::Context;
use dreamie_chat::{config::AppConfig, routes, state::AppState};
use tower_http::cors::CorsLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env()?;

    // Missing credential is not fatal: every chat request answers 500 instead.
    let state = AppState::from_config(&config.provider).context("provider client init failed")?;
    if state.is_configured() {
        tracing::info!(model = %config.provider.model, "generative provider configured");
    } else {
        tracing::error!("GOOGLE_API_KEY environment variable not set; chat is disabled");
    }

    let app = routes::create_site_router(&config.static_dir)
        .with_state(Arc::new(state))
        .layer(CorsLayer::very_permissive());

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("failed to bind port {}", config.port))?;

    tracing::info!(port = config.port, static_dir = %config.static_dir, "dreamie chat listening");
    axum::serve(listener, app).await?;
    Ok(())
}
