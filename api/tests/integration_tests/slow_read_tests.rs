//! Integration tests for requests whose log reads stall or fail.

use crate::common::get;
use api::{create_router, AppState};
use axum::http::StatusCode;
use axum::Router;
use shared::models::{AlertEvent, HealingEvent, HealthSnapshot};
use shared::query::QueryService;
use shared::storage::{LogReadError, LogStore};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

const READ_DELAY: Duration = Duration::from_secs(1);

/// Store whose healing reads block the calling thread for [`READ_DELAY`].
struct SlowHealingStore;

impl LogStore for SlowHealingStore {
    fn try_read_latest_health(&self) -> Result<HealthSnapshot, LogReadError> {
        Ok(HealthSnapshot::empty())
    }

    fn try_read_alerts(&self, _limit: usize) -> Result<Vec<AlertEvent>, LogReadError> {
        Ok(Vec::new())
    }

    fn try_read_healing(&self, _limit: usize) -> Result<Vec<HealingEvent>, LogReadError> {
        thread::sleep(READ_DELAY);
        Ok(vec![HealingEvent::from_line("restarted nginx")])
    }
}

/// Store that panics on every read.
struct PanickingStore;

impl LogStore for PanickingStore {
    fn try_read_latest_health(&self) -> Result<HealthSnapshot, LogReadError> {
        panic!("health read panicked")
    }

    fn try_read_alerts(&self, _limit: usize) -> Result<Vec<AlertEvent>, LogReadError> {
        panic!("alert read panicked")
    }

    fn try_read_healing(&self, _limit: usize) -> Result<Vec<HealingEvent>, LogReadError> {
        panic!("healing read panicked")
    }
}

fn app_over(store: impl LogStore + 'static) -> Router {
    create_router(AppState::new(QueryService::new(Arc::new(store))))
}

#[tokio::test]
async fn test_timeout_fires_while_read_is_stalled() {
    let app = app_over(SlowHealingStore);
    let started = Instant::now();

    let result = tokio::time::timeout(Duration::from_millis(100), get(app, "/api/healing")).await;

    assert!(result.is_err());
    assert!(started.elapsed() < READ_DELAY);
}

#[tokio::test]
async fn test_stalled_read_does_not_block_other_requests() {
    let app = app_over(SlowHealingStore);

    let stalled = tokio::spawn(get(app.clone(), "/api/healing"));

    let (status, health) = tokio::time::timeout(READ_DELAY / 2, get(app, "/api/health"))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "no-data");

    let (status, healing) = stalled.await.unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(healing["returned"], 1);
    assert_eq!(healing["events"][0], "restarted nginx");
}

#[tokio::test]
async fn test_panicking_read_degrades_to_empty_responses() {
    let app = app_over(PanickingStore);

    let (status, health) = get(app.clone(), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "no-data");
    assert_eq!(health["data"], serde_json::json!({}));

    let (status, alerts) = get(app.clone(), "/api/alerts?limit=7").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(alerts["count"], 7);
    assert_eq!(alerts["alerts"], serde_json::json!([]));

    let (_, healing) = get(app.clone(), "/api/healing").await;
    assert_eq!(healing["count"], 20);
    assert_eq!(healing["events"], serde_json::json!([]));

    let (_, summary) = get(app, "/api/summary").await;
    assert_eq!(summary["health_available"], false);
    assert_eq!(summary["recent_alerts"], serde_json::json!([]));
}
