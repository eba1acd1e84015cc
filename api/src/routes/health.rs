//! Health snapshot endpoint.
//!
//! Serves the latest monitoring sample recorded by the agent.

use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use shared::query::{HealthResponse, QueryService};

/// Creates the health routes.
pub fn health_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(get_health))
        .with_state(state)
}

/// Handler for GET /api/health.
///
/// Returns `{"status": "ok", "data": {...}}` when a snapshot exists, or
/// `{"status": "no-data", "data": {}}` otherwise. Never fails.
async fn get_health(State(state): State<AppState>) -> Json<HealthResponse> {
    let response = state
        .query(QueryService::get_health)
        .await
        .unwrap_or_else(|_| HealthResponse::no_data());

    Json(response)
}
