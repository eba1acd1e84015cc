//! Query-string parameters and error bodies shared by the routes.

use axum::{extract::rejection::QueryRejection, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

/// Query parameters for the bounded list endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct LimitParams {
    /// Maximum number of most recent entries to return (default 20).
    pub limit: Option<i64>,
}

/// Error response for malformed requests.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    /// Error type.
    pub error: String,
    /// Detailed error message.
    pub message: String,
}

/// Maps a query-string rejection to a 400 response.
pub fn invalid_query(rejection: &QueryRejection) -> (StatusCode, Json<ApiError>) {
    tracing::debug!(error = %rejection, "Rejected query parameters");
    (
        StatusCode::BAD_REQUEST,
        Json(ApiError {
            error: "invalid_query".to_string(),
            message: rejection.body_text(),
        }),
    )
}
