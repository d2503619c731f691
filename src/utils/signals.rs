//! Signal handling for graceful shutdown and stopwatch control

use std::sync::Arc;
use signal_hook_tokio::Signals;
use futures::stream::StreamExt;
use tracing::{debug, error, info};

use crate::state::AppState;

/// Wait for shutdown signals (SIGTERM, SIGINT)
pub async fn shutdown_signal() {
    let mut signals = Signals::new(&[
        signal_hook::consts::SIGTERM,
        signal_hook::consts::SIGINT,
    ]).expect("Failed to create signal handler");

    while let Some(signal) = signals.next().await {
        info!("Received signal: {}", signal);
        break;
    }
}

/// Forward Unix control signals to the stopwatch
///
/// SIGUSR1 delivers the primary start/stop signal and SIGUSR2 the reset
/// signal, so the stopwatch can be driven from a shell or a window manager
/// keybinding without going through HTTP.
pub async fn control_signal_task(state: Arc<AppState>) {
    info!("Starting control signal task (SIGUSR1 toggles, SIGUSR2 resets)");

    let mut signals = match Signals::new(&[
        signal_hook::consts::SIGUSR1,
        signal_hook::consts::SIGUSR2,
    ]) {
        Ok(signals) => signals,
        Err(e) => {
            error!("Failed to create control signal handler: {}", e);
            return;
        }
    };

    while let Some(signal) = signals.next().await {
        match signal {
            signal_hook::consts::SIGUSR1 => {
                info!("SIGUSR1 received, delivering primary signal");
                if let Err(e) = state.primary_signal() {
                    error!("Failed to handle primary signal: {}", e);
                }
            }
            signal_hook::consts::SIGUSR2 => {
                info!("SIGUSR2 received, delivering reset signal");
                if let Err(e) = state.reset_signal() {
                    error!("Failed to handle reset signal: {}", e);
                }
            }
            other => {
                debug!("Ignoring unexpected signal: {}", other);
            }
        }
    }
}
