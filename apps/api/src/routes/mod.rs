pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::screening::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Screening API
        .route(
            "/api/v1/resumes",
            post(handlers::handle_upload).get(handlers::handle_list_resumes),
        )
        .route(
            "/api/v1/resumes/:id",
            get(handlers::handle_screening_result),
        )
        // Analytics API
        .route("/api/v1/analytics", get(handlers::handle_analytics))
        .with_state(state)
}
