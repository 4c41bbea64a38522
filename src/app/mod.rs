//! Scan-time helpers used by the orchestration.
//!
//! This module provides progress logging, shutdown of the background logger
//! and the end-of-scan statistics report.

pub mod logging;
pub mod shutdown;
pub mod statistics;

// Re-export public API
pub use logging::log_progress;
pub use shutdown::shutdown_gracefully;
pub use statistics::print_error_statistics;
