//! Data Transfer Objects for the HTTP API.
//!
//! The prettify response body is [`PrettySchedule`] itself; its serialization
//! already is the wire format.

use serde::{Deserialize, Serialize};

pub use crate::services::PrettySchedule;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Crate version serving the request
    pub version: String,
}
