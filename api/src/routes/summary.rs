//! Dashboard summary endpoint.

use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use shared::query::{QueryService, SummaryResponse};

/// Creates the summary routes.
pub fn summary_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/summary", get(get_summary))
        .with_state(state)
}

/// Handler for GET /api/summary.
///
/// Health availability plus the five most recent alert and healing events.
async fn get_summary(State(state): State<AppState>) -> Json<SummaryResponse> {
    let response = state
        .query(QueryService::get_summary)
        .await
        .unwrap_or_else(|_| SummaryResponse::empty());

    Json(response)
}
