//! Chronograph - a state-managed HTTP server hosting a stopwatch
//!
//! This is the main entry point for the chronograph application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use chronograph::{
    config::Config,
    state::AppState,
    api::create_router,
    tasks::{tick_delivery_task, display_refresh_task},
    utils::{shutdown_signal, control_signal_task},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("chronograph={},tower_http=info", config.log_level()))
        .init();

    info!("Starting chronograph server v1.0.0");
    info!("Configuration: host={}, port={}", config.host, config.port);

    // Create application state
    let state = Arc::new(AppState::new(config.port, config.host.clone()));

    // Start the tick delivery background task
    let tick_state = Arc::clone(&state);
    tokio::spawn(async move {
        tick_delivery_task(tick_state).await;
    });

    // Start the display refresh background task
    let display_state = Arc::clone(&state);
    tokio::spawn(async move {
        display_refresh_task(display_state).await;
    });

    // Start the Unix control signal forwarder
    let signal_state = Arc::clone(&state);
    tokio::spawn(async move {
        control_signal_task(signal_state).await;
    });

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /toggle  - Start or stop the stopwatch");
    info!("  POST /reset   - Reset the stopwatch to 00:00:00");
    info!("  GET  /display - Current HH:MM:SS reading");
    info!("  GET  /status  - Full stopwatch status");
    info!("  GET  /health  - Health check");
    info!("Signals: SIGUSR1 toggles, SIGUSR2 resets");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
