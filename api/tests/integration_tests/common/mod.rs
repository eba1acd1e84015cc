//! Common test utilities and helpers for integration tests.
//!
//! This module provides shared functionality used across all integration tests,
//! including test app setup, log fixtures, and HTTP request helpers.

use api::{create_router, AppState};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use shared::config::LogSources;
use std::fs::OpenOptions;
use std::io::Write;
use tempfile::TempDir;

/// Temporary directory holding the three agent logs.
pub struct LogFixture {
    dir: TempDir,
}

impl LogFixture {
    /// Creates an empty fixture directory (no log files yet).
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Log locations inside the fixture directory.
    pub fn sources(&self) -> LogSources {
        LogSources::in_dir(self.dir.path())
    }

    /// Appends lines to the health snapshot log.
    pub fn append_health(&self, lines: &[&str]) {
        self.append(&self.sources().health, lines);
    }

    /// Appends lines to the alert log.
    pub fn append_alerts(&self, lines: &[&str]) {
        self.append(&self.sources().alerts, lines);
    }

    /// Appends lines to the healing log.
    pub fn append_healing(&self, lines: &[&str]) {
        self.append(&self.sources().healing, lines);
    }

    /// Appends `count` numbered alert lines (`alert_1` .. `alert_{count}`).
    pub fn append_numbered_alerts(&self, count: usize) {
        let lines: Vec<String> = (1..=count)
            .map(|i| format!("alert_{i}|ALERT|host1|{i}|90|2024-01-01T00:00:00"))
            .collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        self.append_alerts(&refs);
    }

    /// Appends `count` numbered healing lines (`event 1` .. `event {count}`).
    pub fn append_numbered_healing(&self, count: usize) {
        let lines: Vec<String> = (1..=count).map(|i| format!("event {i}")).collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        self.append_healing(&refs);
    }

    fn append(&self, path: &std::path::Path, lines: &[&str]) {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
    }
}

/// Creates a test router over a fresh, empty log fixture.
///
/// # Returns
///
/// A tuple containing the configured router and the fixture, which must be
/// kept alive for the duration of the test.
pub fn test_app() -> (Router, LogFixture) {
    let fixture = LogFixture::new();
    let router = create_router(AppState::from_sources(fixture.sources()));
    (router, fixture)
}

/// Helper to make a GET request.
///
/// # Arguments
///
/// * `app` - The Axum router to send the request to
/// * `uri` - The URI path to GET from
///
/// # Returns
///
/// A tuple containing the response status code and parsed JSON response body.
pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = tower::ServiceExt::oneshot(
        app,
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap();

    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

    (status, json)
}
