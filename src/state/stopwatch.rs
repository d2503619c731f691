//! Stopwatch state structure and management

use serde::{Deserialize, Serialize};

/// Milliseconds added per tick; ticks arrive once per second while running
pub const TICK_INTERVAL_MS: u64 = 1000;

/// Elapsed time tracker for the stopwatch
///
/// Owns the millisecond counter and the running flag. The host delivers
/// ticks, primary (start/stop) signals and reset signals; everything else
/// is derived from these two fields on demand.
#[derive(Debug, Clone)]
pub struct Stopwatch {
    elapsed_millis: u64,
    running: bool,
}

/// Point-in-time view of the stopwatch, published after every mutation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopwatchSnapshot {
    pub running: bool,
    pub elapsed_millis: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub display: String,
    pub button_label: String,
}

impl Stopwatch {
    /// Create a stopped stopwatch at 00:00:00
    pub fn new() -> Self {
        Self {
            elapsed_millis: 0,
            running: false,
        }
    }

    /// Begin accumulating time. No effect if already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        true
    }

    /// Stop accumulating time. No effect if already stopped.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        true
    }

    /// Halt and zero the counter. Safe to call in any state.
    pub fn reset(&mut self) {
        self.running = false;
        self.elapsed_millis = 0;
    }

    /// Handle the primary signal: start when stopped, stop when running.
    /// Returns the new running state.
    pub fn toggle(&mut self) -> bool {
        if self.running {
            self.stop();
        } else {
            self.start();
        }
        self.running
    }

    /// Advance the counter by one tick interval.
    /// Ticks that arrive while stopped are ignored.
    pub fn on_tick(&mut self) {
        if self.running {
            self.elapsed_millis += TICK_INTERVAL_MS;
        }
    }

    /// Check if the stopwatch is currently accumulating time
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Total accumulated running time in milliseconds since the last reset
    pub fn elapsed_millis(&self) -> u64 {
        self.elapsed_millis
    }

    /// Whole hours component; unbounded, never wraps
    pub fn hours(&self) -> u64 {
        self.elapsed_millis / 3_600_000
    }

    /// Minutes component, 0..=59
    pub fn minutes(&self) -> u64 {
        (self.elapsed_millis / 60_000) % 60
    }

    /// Seconds component, 0..=59
    pub fn seconds(&self) -> u64 {
        (self.elapsed_millis / 1000) % 60
    }

    /// Format the current reading as zero-padded "HH:MM:SS".
    /// Hours widen past two digits rather than wrapping.
    pub fn display(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hours(), self.minutes(), self.seconds())
    }

    /// Caption for the primary control, derived from the running state
    pub fn button_label(&self) -> &'static str {
        if self.running {
            "STOP"
        } else {
            "START"
        }
    }

    /// Take a snapshot of the current state for publication
    pub fn snapshot(&self) -> StopwatchSnapshot {
        StopwatchSnapshot {
            running: self.running,
            elapsed_millis: self.elapsed_millis,
            hours: self.hours(),
            minutes: self.minutes(),
            seconds: self.seconds(),
            display: self.display(),
            button_label: self.button_label().to_string(),
        }
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}
