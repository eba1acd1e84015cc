//! LOCC Shared Library
//!
//! This crate contains the log models, log readers, and the query service
//! used by the LOCC status API and CLI.
//!
//! # Modules
//!
//! - [`models`] - Health snapshot, alert, and healing record types
//! - [`config`] - Log source locations
//! - [`storage`] - Log store trait and the file-backed reader
//! - [`degrade`] - Attempt-and-degrade combinator for source reads
//! - [`query`] - Health, alerts, healing, and summary queries
//!
//! # Example
//!
//! ```
//! use shared::models::AlertEvent;
//!
//! let event = AlertEvent::parse_line("cpu_high|ALERT|host1|95|90|2024-01-01T00:00:00").unwrap();
//!
//! assert_eq!(event.host, "host1");
//! assert_eq!(event.threshold, "90");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod degrade;
pub mod models;
pub mod query;
pub mod storage;

/// Re-export common dependencies for convenience.
pub use serde;
pub use serde_json;
