pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ats::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/ats-scores",
            get(handlers::handle_list_scores).post(handlers::handle_create_score),
        )
        .route(
            "/api/v1/ats-scores/:id",
            get(handlers::handle_get_score).delete(handlers::handle_delete_score),
        )
        .route(
            "/api/v1/ats-scores/:id/keyword-matches",
            get(handlers::handle_keyword_matches),
        )
        .route(
            "/api/v1/ats-scores/:id/optimization-suggestions",
            get(handlers::handle_optimization_suggestions),
        )
        .route(
            "/api/v1/ats-scores/:id/apply-suggestion",
            post(handlers::handle_apply_suggestion),
        )
        .with_state(state)
}
