//! API route definitions.
//!
//! This module organizes all HTTP routes for the LOCC status API.

mod alerts;
mod healing;
mod health;
mod params;
mod summary;

pub use alerts::alerts_routes;
pub use healing::healing_routes;
pub use health::health_routes;
pub use params::ApiError;
pub use summary::summary_routes;
