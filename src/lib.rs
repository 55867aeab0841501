pub mod api;
pub mod config;
pub mod controller;
pub mod core;
pub mod error;
pub mod form;

use std::sync::atomic::{AtomicBool, Ordering};

pub use controller::{LoadState, TaskListController};
pub use error::{Result, TaskError};

/// Whether debug logging is active, shared between the logger filter and the config.
static DEBUG_LOGGING: AtomicBool = AtomicBool::new(false);

pub fn set_debug_logging(enabled: bool) {
    DEBUG_LOGGING.store(enabled, Ordering::Relaxed);
}

pub fn debug_logging() -> bool {
    DEBUG_LOGGING.load(Ordering::Relaxed)
}
