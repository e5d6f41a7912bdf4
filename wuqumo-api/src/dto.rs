//! DTOs for API responses.
//!
//! Mapping entries serialize straight from
//! [`TranscodeEntry`](wuqumo_core::TranscodeEntry); only the health
//! endpoint needs its own shape.

use serde::Serialize;

/// Response for the health check.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "ok" when the server answers.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Seconds since the server answered its first health check.
    pub uptime_seconds: u64,
    /// Entries in the current snapshot (0 before the first load).
    pub entries: usize,
}
