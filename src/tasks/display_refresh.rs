//! Display refresh background task

use std::sync::Arc;
use tracing::{debug, info};

use crate::state::AppState;

/// Background task that mirrors every stopwatch reading to the log
///
/// This is the presentation side of the stopwatch: it only observes
/// published snapshots and renders them as `[label] HH:MM:SS` lines, the
/// same way a UI would refresh its time label and button caption. It never
/// mutates the stopwatch.
pub async fn display_refresh_task(state: Arc<AppState>) {
    info!("Starting display refresh task");

    let mut snapshot_rx = state.subscribe_snapshots();

    // Show the initial reading before any signal arrives
    let initial = snapshot_rx.borrow().clone();
    info!("[{}] {}", initial.button_label, initial.display);

    while snapshot_rx.changed().await.is_ok() {
        let snapshot = snapshot_rx.borrow().clone();
        info!("[{}] {}", snapshot.button_label, snapshot.display);
    }

    debug!("Snapshot channel closed, display refresh task exiting");
}
