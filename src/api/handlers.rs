//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use tracing::{error, info};

use crate::state::AppState;
use super::responses::{ApiResponse, StatusResponse, HealthResponse};

/// Handle POST /toggle - Deliver the primary start/stop signal
pub async fn toggle_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    match state.primary_signal() {
        Ok(snapshot) => {
            info!("Toggle endpoint called - stopwatch now {}",
                  if snapshot.running { "running" } else { "stopped" });

            let message = if snapshot.running {
                "Stopwatch started".to_string()
            } else {
                "Stopwatch stopped".to_string()
            };
            Ok(Json(ApiResponse::for_snapshot(message, snapshot)))
        }
        Err(e) => {
            error!("Failed to handle primary signal: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /reset - Deliver the reset signal
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    match state.reset_signal() {
        Ok(snapshot) => {
            info!("Reset endpoint called - stopwatch back to {}", snapshot.display);
            Ok(Json(ApiResponse::for_snapshot(
                "Stopwatch reset".to_string(),
                snapshot,
            )))
        }
        Err(e) => {
            error!("Failed to handle reset signal: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /display - Return the current "HH:MM:SS" reading as plain text
pub async fn display_handler(State(state): State<Arc<AppState>>) -> Result<String, StatusCode> {
    match state.snapshot() {
        Ok(snapshot) => Ok(snapshot.display),
        Err(e) => {
            error!("Failed to read stopwatch state: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /status - Return the full stopwatch status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let snapshot = match state.snapshot() {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to read stopwatch state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_signal, last_signal_time) = state.get_last_signal();

    Ok(Json(StatusResponse {
        stopwatch: snapshot,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_signal,
        last_signal_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
