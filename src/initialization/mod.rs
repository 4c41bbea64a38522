//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources of a run:
//! - HTTP clients (probe client and release-feed client)
//! - Logger
//! - Worker pool semaphore
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

use std::sync::Arc;

use tokio::sync::Semaphore;

// Re-export public API
pub use client::{init_client, init_release_client};
pub use logger::init_logger_with;

/// Initializes a semaphore for controlling concurrency.
///
/// Each in-flight probe holds one permit, so `count` is the worker pool size.
pub fn init_semaphore(count: usize) -> Arc<Semaphore> {
    Arc::new(Semaphore::new(count))
}
