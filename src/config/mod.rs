//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, pool size, file names, etc.)
//! - The validated rate limit type
//! - CLI option types and the library `Config`

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use cli::Cli;
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, Pacing, RateLimit};
