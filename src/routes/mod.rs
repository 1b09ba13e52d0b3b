//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the whole app: `/api/*` is forwarded to the
//! backend, `/healthz` answers liveness probes, and every other path is a
//! static file from the built bundle. Unknown paths get `index.html` so
//! client-side routes deep-link.

pub mod proxy;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{any, get};
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(state.config.index_html()));

    Router::new()
        .route("/healthz", get(healthz))
        .route("/api", any(proxy::forward))
        .route("/api/", any(proxy::forward))
        .route("/api/{*path}", any(proxy::forward))
        .layer(DefaultBodyLimit::max(proxy::MAX_BODY_BYTES))
        .fallback_service(static_files)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
