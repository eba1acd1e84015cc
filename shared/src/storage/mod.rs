//! Log store traits and implementations.
//!
//! This module provides the readers for the agent's append-only logs.
//! The `LogStore` trait defines the interface, allowing the file-backed
//! implementation to be swapped out in tests.

pub mod log_store;
pub mod tail;

pub use log_store::{FileLogStore, LogReadError, LogStore};
