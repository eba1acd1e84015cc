//! Status queries over the agent logs.
//!
//! This module provides the `QueryService` that backs both the HTTP API and
//! the CLI, along with the response types it produces.
//!
//! # Example
//!
//! ```
//! use shared::config::LogSources;
//! use shared::query::QueryService;
//!
//! let service = QueryService::from_sources(LogSources::in_dir("/nonexistent"));
//! let healing = service.get_healing(Some(10));
//!
//! assert_eq!(healing.count, 10);
//! assert!(healing.events.is_empty());
//! ```

mod response;
mod service;

pub use response::{AlertsResponse, HealingResponse, HealthResponse, HealthStatus, SummaryResponse};
pub use service::{QueryService, DEFAULT_LIMIT, SUMMARY_WINDOW};
