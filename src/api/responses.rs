//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::StopwatchSnapshot;

/// API response structure for signal endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub stopwatch: StopwatchSnapshot,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: String, message: String, stopwatch: StopwatchSnapshot) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            stopwatch,
        }
    }

    /// Create a response with the status derived from the running state
    pub fn for_snapshot(message: String, stopwatch: StopwatchSnapshot) -> Self {
        let status = if stopwatch.running { "running" } else { "stopped" };
        Self::new(status.to_string(), message, stopwatch)
    }
}

/// Full status response with host metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub stopwatch: StopwatchSnapshot,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_signal: Option<String>,
    pub last_signal_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: "1.0.0".to_string(),
        }
    }
}
