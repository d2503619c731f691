//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{info, warn};

use super::{Stopwatch, StopwatchSnapshot};

/// Main application state that hosts the stopwatch and its signal plumbing
///
/// All mutation funnels through the stopwatch mutex, so signal handling is
/// serialized no matter which surface (HTTP, Unix signal, tick task) the
/// signal arrived on.
#[derive(Debug)]
pub struct AppState {
    /// The elapsed time tracker
    pub stopwatch: Arc<Mutex<Stopwatch>>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last signal tracking
    pub last_signal: Arc<Mutex<Option<String>>>,
    pub last_signal_time: Arc<Mutex<Option<DateTime<Utc>>>>,
    /// Channel notifying the tick task of run-state changes
    pub running_tx: watch::Sender<bool>,
    /// Channel publishing snapshots to display observers
    pub snapshot_tx: watch::Sender<StopwatchSnapshot>,
    /// Keep receivers alive to prevent channel closure
    pub _running_rx: watch::Receiver<bool>,
    pub _snapshot_rx: watch::Receiver<StopwatchSnapshot>,
}

impl AppState {
    /// Create a new AppState with a stopped stopwatch at 00:00:00
    pub fn new(port: u16, host: String) -> Self {
        let stopwatch = Stopwatch::new();
        let (running_tx, running_rx) = watch::channel(stopwatch.is_running());
        let (snapshot_tx, snapshot_rx) = watch::channel(stopwatch.snapshot());

        Self {
            stopwatch: Arc::new(Mutex::new(stopwatch)),
            start_time: Instant::now(),
            port,
            host,
            last_signal: Arc::new(Mutex::new(None)),
            last_signal_time: Arc::new(Mutex::new(None)),
            running_tx,
            snapshot_tx,
            _running_rx: running_rx,
            _snapshot_rx: snapshot_rx,
        }
    }

    /// Apply a signal to the stopwatch and publish the resulting snapshot
    pub fn update_stopwatch<F>(&self, signal: &str, updater: F) -> Result<StopwatchSnapshot, String>
    where
        F: FnOnce(&mut Stopwatch),
    {
        // Lock the stopwatch and apply the update
        let mut stopwatch = self.stopwatch.lock()
            .map_err(|e| format!("Failed to lock stopwatch: {}", e))?;

        updater(&mut *stopwatch);
        let snapshot = stopwatch.snapshot();
        drop(stopwatch); // Release the lock early

        // Update last signal tracking
        if let Ok(mut last_signal) = self.last_signal.lock() {
            *last_signal = Some(signal.to_string());
        }
        if let Ok(mut last_time) = self.last_signal_time.lock() {
            *last_time = Some(Utc::now());
        }

        // Notify the tick task (this starts or halts tick delivery)
        if let Err(e) = self.running_tx.send(snapshot.running) {
            warn!("Failed to send run-state notification: {}", e);
        }

        // Refresh display observers
        if let Err(e) = self.snapshot_tx.send(snapshot.clone()) {
            warn!("Failed to send snapshot update: {}", e);
        }

        Ok(snapshot)
    }

    /// Deliver the primary signal: start when stopped, stop when running
    pub fn primary_signal(&self) -> Result<StopwatchSnapshot, String> {
        let snapshot = self.update_stopwatch("toggle", |stopwatch| {
            stopwatch.toggle();
        })?;

        info!(
            "Primary signal handled, stopwatch {} at {}",
            if snapshot.running { "running" } else { "stopped" },
            snapshot.display,
        );
        Ok(snapshot)
    }

    /// Deliver the reset signal: halt ticking and zero the counter
    pub fn reset_signal(&self) -> Result<StopwatchSnapshot, String> {
        let snapshot = self.update_stopwatch("reset", |stopwatch| {
            stopwatch.reset();
        })?;

        info!("Reset signal handled, stopwatch back to {}", snapshot.display);
        Ok(snapshot)
    }

    /// Deliver one tick to the stopwatch and publish the new reading
    ///
    /// Ticks are not tracked as a last signal; only user-facing signals are.
    pub fn deliver_tick(&self) -> Result<StopwatchSnapshot, String> {
        let mut stopwatch = self.stopwatch.lock()
            .map_err(|e| format!("Failed to lock stopwatch: {}", e))?;

        stopwatch.on_tick();
        let snapshot = stopwatch.snapshot();
        drop(stopwatch);

        if let Err(e) = self.snapshot_tx.send(snapshot.clone()) {
            warn!("Failed to send snapshot update: {}", e);
        }

        Ok(snapshot)
    }

    /// Get a snapshot of the current stopwatch state
    pub fn snapshot(&self) -> Result<StopwatchSnapshot, String> {
        self.stopwatch.lock()
            .map(|stopwatch| stopwatch.snapshot())
            .map_err(|e| format!("Failed to lock stopwatch: {}", e))
    }

    /// Subscribe to run-state changes (used by the tick delivery task)
    pub fn subscribe_running(&self) -> watch::Receiver<bool> {
        self.running_tx.subscribe()
    }

    /// Subscribe to snapshot updates (used by display observers)
    pub fn subscribe_snapshots(&self) -> watch::Receiver<StopwatchSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last signal information
    pub fn get_last_signal(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_signal = self.last_signal.lock().ok().and_then(|s| s.clone());
        let last_signal_time = self.last_signal_time.lock().ok().and_then(|t| *t);
        (last_signal, last_signal_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_signal_toggles_and_records_signal() {
        let state = AppState::new(0, "127.0.0.1".to_string());

        let snapshot = state.primary_signal().unwrap();
        assert!(snapshot.running);
        assert_eq!(snapshot.button_label, "STOP");

        let snapshot = state.primary_signal().unwrap();
        assert!(!snapshot.running);
        assert_eq!(snapshot.button_label, "START");

        let (signal, time) = state.get_last_signal();
        assert_eq!(signal.as_deref(), Some("toggle"));
        assert!(time.is_some());
    }

    #[test]
    fn reset_signal_zeroes_from_any_state() {
        let state = AppState::new(0, "127.0.0.1".to_string());
        state.primary_signal().unwrap();
        state.deliver_tick().unwrap();
        state.deliver_tick().unwrap();

        let snapshot = state.reset_signal().unwrap();
        assert!(!snapshot.running);
        assert_eq!(snapshot.elapsed_millis, 0);
        assert_eq!(snapshot.display, "00:00:00");
    }

    #[test]
    fn ticks_update_published_snapshot() {
        let state = AppState::new(0, "127.0.0.1".to_string());
        let rx = state.subscribe_snapshots();

        state.primary_signal().unwrap();
        state.deliver_tick().unwrap();

        assert_eq!(rx.borrow().display, "00:00:01");
        assert_eq!(state.snapshot().unwrap().elapsed_millis, 1000);
    }
}
