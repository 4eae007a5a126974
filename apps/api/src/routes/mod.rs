pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::scans::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/scan", post(handlers::handle_scan))
        .route("/api/scans", get(handlers::handle_list_scans))
        .route("/api/scan/:id", get(handlers::handle_get_scan))
        .route("/api/ai-suggestions", post(handlers::handle_ai_suggestions))
        .layer(upload_limit)
        .with_state(state)
}
