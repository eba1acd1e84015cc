//! Self-healing events endpoint.
//!
//! Serves the most recent self-healing log lines.

use crate::routes::params::{invalid_query, ApiError, LimitParams};
use crate::state::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use shared::query::{HealingResponse, DEFAULT_LIMIT};

/// Creates the self-healing routes.
pub fn healing_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/healing", get(get_healing))
        .with_state(state)
}

/// Handler for GET /api/healing.
///
/// Same `limit`/`count` semantics as the alerts endpoint.
async fn get_healing(
    State(state): State<AppState>,
    params: Result<Query<LimitParams>, QueryRejection>,
) -> Result<Json<HealingResponse>, (StatusCode, Json<ApiError>)> {
    let Query(params) = params.map_err(|rejection| invalid_query(&rejection))?;
    let limit = params.limit;

    let response = state
        .query(move |service| service.get_healing(limit))
        .await
        .unwrap_or_else(|_| HealingResponse::empty(limit.unwrap_or(DEFAULT_LIMIT)));

    Ok(Json(response))
}
