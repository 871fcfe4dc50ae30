//! Feed Badge Server
//!
//! Renders SVG status badges for Bluesky feed generators. Each request
//! creates a fresh session with the configured account, looks up the
//! requested feed generator and draws one of its metrics as a badge.

pub mod badge;
pub mod bsky;
pub mod config;
pub mod error;
pub mod handlers;
pub mod result_ext;
pub mod state;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router.
///
/// `/api` mirrors `/` so existing badge URLs keep working.
pub fn build_router(state: AppState) -> Router {
    let badge_routes = Router::new()
        .route("/", get(handlers::feed_badge))
        .route("/api", get(handlers::feed_badge))
        .with_state(state);

    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(badge_routes)
        .layer(TraceLayer::new_for_http())
}
