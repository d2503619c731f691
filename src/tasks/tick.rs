//! Tick delivery background task

use std::{sync::Arc, time::Duration};
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::state::{AppState, TICK_INTERVAL_MS};

/// Background task that delivers one tick per second while the stopwatch runs
///
/// The task parks until the stopwatch is started, then schedules a repeating
/// interval and races it against run-state changes. Stop and reset both flip
/// the running flag, which halts tick delivery here; a later start gets a
/// fresh interval, so the first tick always lands one full second after the
/// start signal.
pub async fn tick_delivery_task(state: Arc<AppState>) {
    info!("Starting tick delivery task");

    let mut running_rx = state.subscribe_running();
    let period = Duration::from_millis(TICK_INTERVAL_MS);

    loop {
        // Park until the stopwatch is started
        while !*running_rx.borrow() {
            if running_rx.changed().await.is_err() {
                debug!("Run-state channel closed, tick delivery task exiting");
                return;
            }
        }

        debug!("Stopwatch running, scheduling ticks every {}ms", TICK_INTERVAL_MS);

        let mut interval = time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                // Tick due - advance the counter and publish the new reading
                _ = interval.tick() => {
                    match state.deliver_tick() {
                        Ok(snapshot) => {
                            debug!("Tick delivered, elapsed={}ms display={}",
                                   snapshot.elapsed_millis, snapshot.display);
                        }
                        Err(e) => {
                            error!("Failed to deliver tick: {}", e);
                        }
                    }
                }

                // Run-state change - halt delivery if the stopwatch stopped
                changed = running_rx.changed() => {
                    if changed.is_err() {
                        debug!("Run-state channel closed, tick delivery task exiting");
                        return;
                    }
                    if !*running_rx.borrow() {
                        debug!("Stopwatch stopped, halting tick delivery");
                        break;
                    }
                }
            }
        }
    }
}
