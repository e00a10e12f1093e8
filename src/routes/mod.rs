// src/routes/mod.rs
pub mod chat;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use chat::{chat_handler, method_not_allowed};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub const CHAT_PATH: &str = "/api/chat";

/// API routes only; used directly by tests.
pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route(CHAT_PATH, post(chat_handler).fallback(method_not_allowed))
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
}

/// API routes plus the static marketing site.
pub fn create_site_router(static_dir: &str) -> Router<SharedState> {
    create_router().fallback_service(ServeDir::new(static_dir))
}
