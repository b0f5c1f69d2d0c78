pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Matching API
        .route("/api/v1/match", post(handlers::handle_match))
        .route("/api/v1/match/upload", post(handlers::handle_match_upload))
        .route("/api/v1/followup", post(handlers::handle_followup))
        .with_state(state)
}
