pub mod health;

use axum::{routing::get, routing::post, Router};

use crate::planner::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Trip Planner API
        .route("/api/v1/trips/plan", post(handlers::handle_plan_trip))
        .route("/api/v1/trips/export", post(handlers::handle_export_trip))
        .with_state(state)
}
