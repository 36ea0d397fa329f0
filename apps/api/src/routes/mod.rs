pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::extraction::handlers as extraction;
use crate::state::AppState;
use crate::suggestions::handlers as suggestions;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/resumes/parse",
            post(extraction::handle_parse_resume).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route(
            "/api/v1/suggestions",
            post(suggestions::handle_generate_suggestions),
        )
        .with_state(state)
}
