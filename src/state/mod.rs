//! State management module
//!
//! This module contains the elapsed time tracker and the shared application
//! state that hosts it.

pub mod stopwatch;
pub mod app_state;

// Re-export main types
pub use stopwatch::{Stopwatch, StopwatchSnapshot, TICK_INTERVAL_MS};
pub use app_state::AppState;
