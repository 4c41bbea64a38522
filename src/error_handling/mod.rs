//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error types surfaced to the operator (configuration, initialization, update)
//! - Transport failure categories and their counters
//! - Categorization of `reqwest` errors
//!
//! Per-probe failures never travel as errors: the prober records them here and
//! reports the probe as unreachable.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, update_error_stats};
pub use stats::ProcessingStats;
pub use types::{ConfigError, ErrorType, InfoType, InitializationError, UpdateError};
