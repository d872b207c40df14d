pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Keyword API
        .route("/api/v1/keywords/research", post(handlers::handle_research))
        .route("/api/v1/keywords/batch", post(handlers::handle_batch))
        .route(
            "/api/v1/keywords/suggestions",
            get(handlers::handle_suggestions),
        )
        .route("/api/v1/keywords/questions", get(handlers::handle_questions))
        .route(
            "/api/v1/keywords/difficulty",
            get(handlers::handle_difficulty),
        )
        .with_state(state)
}
