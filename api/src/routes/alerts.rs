//! Alert events endpoint.
//!
//! Serves the most recent alert transitions (ALERT / RECOVERED / RECOVERY_FAILED).

use crate::routes::params::{invalid_query, ApiError, LimitParams};
use crate::state::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use shared::query::{AlertsResponse, DEFAULT_LIMIT};

/// Creates the alert routes.
pub fn alerts_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/alerts", get(get_alerts))
        .with_state(state)
}

/// Handler for GET /api/alerts.
///
/// Accepts an optional `limit` (default 20). `count` in the response echoes
/// the requested limit; `returned` is the number of events found.
async fn get_alerts(
    State(state): State<AppState>,
    params: Result<Query<LimitParams>, QueryRejection>,
) -> Result<Json<AlertsResponse>, (StatusCode, Json<ApiError>)> {
    let Query(params) = params.map_err(|rejection| invalid_query(&rejection))?;
    let limit = params.limit;

    let response = state
        .query(move |service| service.get_alerts(limit))
        .await
        .unwrap_or_else(|_| AlertsResponse::empty(limit.unwrap_or(DEFAULT_LIMIT)));

    Ok(Json(response))
}
