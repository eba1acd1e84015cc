//! Integration tests for the health endpoint.
//!
//! Tests cover:
//! - Missing, empty, and malformed health logs
//! - Last-line-only semantics

use axum::http::StatusCode;
use serde_json::json;

use super::common::{get, test_app};

#[tokio::test]
async fn test_health_missing_log() {
    let (app, _logs) = test_app();

    let (status, response) = get(app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response, json!({"status": "no-data", "data": {}}));
}

#[tokio::test]
async fn test_health_uses_last_line_only() {
    let (app, logs) = test_app();
    logs.append_health(&[r#"{"cpu": 80}"#, "garbage", r#"{"cpu": 10}"#]);

    let (status, response) = get(app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response, json!({"status": "ok", "data": {"cpu": 10}}));
}

#[tokio::test]
async fn test_health_malformed_last_line() {
    let (app, logs) = test_app();
    logs.append_health(&[r#"{"cpu": 10}"#, "not-json"]);

    let (status, response) = get(app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["status"], "no-data");
    assert_eq!(response["data"], json!({}));
}

#[tokio::test]
async fn test_health_reflects_new_snapshots() {
    let (app, logs) = test_app();
    logs.append_health(&[r#"{"cpu": 10}"#]);

    let (_, first) = get(app.clone(), "/api/health").await;
    assert_eq!(first["data"]["cpu"], 10);

    logs.append_health(&[r#"{"cpu": 42}"#]);

    let (_, second) = get(app, "/api/health").await;
    assert_eq!(second["data"]["cpu"], 42);
}

#[tokio::test]
async fn test_health_nested_agent_schema() {
    let (app, logs) = test_app();
    logs.append_health(&[
        r#"{"hostname": "web-1", "cpu": {"usage_percent": 12.5, "load_avg": {"1m": 0.4, "5m": 0.3, "15m": 0.2}}, "services": {"nginx": "active"}}"#,
    ]);

    let (status, response) = get(app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["data"]["hostname"], "web-1");
    assert_eq!(response["data"]["cpu"]["load_avg"]["5m"], 0.3);
    assert_eq!(response["data"]["services"]["nginx"], "active");
}
