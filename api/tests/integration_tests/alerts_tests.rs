//! Integration tests for the alerts endpoint.
//!
//! Tests cover:
//! - Field mapping and malformed line skipping
//! - Tail window and limit handling
//! - `count` echoing the requested limit

use axum::http::StatusCode;
use serde_json::json;

use super::common::{get, test_app};

#[tokio::test]
async fn test_alerts_missing_log() {
    let (app, _logs) = test_app();

    let (status, response) = get(app, "/api/alerts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["count"], 20);
    assert_eq!(response["alerts"], json!([]));
}

#[tokio::test]
async fn test_alerts_field_mapping() {
    let (app, logs) = test_app();
    logs.append_alerts(&[
        "cpu_high|ALERT|host1|95|90|2024-01-01T00:00:00",
        "bad|line",
        "cpu_high|RECOVERED|host1|40|90|2024-01-01T00:05:00|extra",
    ]);

    let (status, response) = get(app, "/api/alerts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        response["alerts"],
        json!([
            {
                "alert": "cpu_high",
                "state": "ALERT",
                "host": "host1",
                "value": "95",
                "threshold": "90",
                "timestamp": "2024-01-01T00:00:00"
            },
            {
                "alert": "cpu_high",
                "state": "RECOVERED",
                "host": "host1",
                "value": "40",
                "threshold": "90",
                "timestamp": "2024-01-01T00:05:00"
            }
        ])
    );
    assert_eq!(response["returned"], 2);
}

#[tokio::test]
async fn test_alerts_tail_window() {
    let (app, logs) = test_app();
    logs.append_numbered_alerts(100);

    let (status, response) = get(app, "/api/alerts?limit=20").await;
    assert_eq!(status, StatusCode::OK);

    let alerts = response["alerts"].as_array().unwrap();
    assert_eq!(alerts.len(), 20);
    assert_eq!(alerts[0]["alert"], "alert_81");
    assert_eq!(alerts[19]["alert"], "alert_100");
}

#[tokio::test]
async fn test_alerts_default_limit_equals_twenty() {
    let (app, logs) = test_app();
    logs.append_numbered_alerts(30);

    let (_, default) = get(app.clone(), "/api/alerts").await;
    let (_, explicit) = get(app, "/api/alerts?limit=20").await;
    assert_eq!(default, explicit);
}

#[tokio::test]
async fn test_alerts_count_is_requested_limit() {
    let (app, logs) = test_app();
    logs.append_numbered_alerts(3);

    let (_, response) = get(app, "/api/alerts?limit=50").await;
    assert_eq!(response["count"], 50);
    assert_eq!(response["returned"], 3);
    assert_eq!(response["alerts"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_alerts_zero_limit() {
    let (app, logs) = test_app();
    logs.append_numbered_alerts(10);

    let (status, response) = get(app, "/api/alerts?limit=0").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["count"], 0);
    assert_eq!(response["alerts"], json!([]));
}

#[tokio::test]
async fn test_alerts_negative_limit() {
    let (app, logs) = test_app();
    logs.append_numbered_alerts(10);

    let (status, response) = get(app, "/api/alerts?limit=-5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["count"], -5);
    assert_eq!(response["alerts"], json!([]));
}

#[tokio::test]
async fn test_alerts_invalid_limit() {
    let (app, _logs) = test_app();

    let (status, response) = get(app, "/api/alerts?limit=twenty").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "invalid_query");
    assert!(response["message"].is_string());
}
