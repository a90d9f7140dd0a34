use std::path::Path;

use axum::{
    middleware,
    response::Redirect,
    routing::{get, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use super::export;
use super::health;
use super::middleware::{logging_middleware, metrics_middleware, security_headers_middleware};
use super::state::AppState;

/// JSON API consumed by the UI
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/defaults", get(export::get_defaults))
        .route("/export", post(export::create_export))
}

/// Create the full router: health probes, API and the static UI under `/ui`
pub fn create_router_with_state(state: AppState, ui_dir: impl AsRef<Path>) -> Router {
    let ui_dir = ui_dir.as_ref();
    let ui = ServeDir::new(ui_dir).fallback(ServeFile::new(ui_dir.join("index.html")));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        .nest("/api", create_api_router())
        .nest_service("/ui", ui)
        .route("/", get(|| async { Redirect::permanent("/ui/") }))
        .with_state(state)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
}
