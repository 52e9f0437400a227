use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    routing::{get, put},
    Router,
};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod handlers;
pub mod keygen;
pub mod server;
pub mod shortener;
pub mod store;

use config::AppConfig;
use store::LinkStore;

// ── Shared application state ───────────────────────────────────────────────

pub struct AppState {
    pub config: AppConfig,
    /// Every short key -> destination mapping created since startup.
    pub store: LinkStore,
}

impl AppState {
    /// State with an empty store.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            store: LinkStore::new(),
        }
    }
}

/// Largest accepted request body. Bigger bodies get 413 before decoding.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

// ── Router ─────────────────────────────────────────────────────────────────

/// Assemble the HTTP surface.
///
/// Any method other than PUT on `/shortURL` gets axum's stock 405 with an
/// empty body, and a body over [`MAX_BODY_BYTES`] gets 413.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Liveness probe; five-letter keys can never shadow it
        .route("/health", get(|| async { StatusCode::OK }))
        .route("/shortURL", put(handlers::shorten::shorten))
        // Short-key redirect; static routes above take priority
        .route("/:short_key", get(handlers::redirect::redirect))
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
}
