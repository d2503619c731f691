//! Background tasks module
//!
//! This module contains background tasks that run alongside the HTTP server.

pub mod tick;
pub mod display_refresh;

// Re-export main functions
pub use tick::tick_delivery_task;
pub use display_refresh::display_refresh_task;
