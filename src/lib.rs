//! coffprobing library: concurrent HTTP/HTTPS subdomain probing
//!
//! Every host in the input list is probed twice, once over `http://` and once
//! over `https://`, on a fixed-size worker pool. Results are consumed in
//! completion order at a configurable rate, optionally filtered by status code
//! and grouped by outcome.
//!
//! # Example
//!
//! ```no_run
//! use coffprobing::{run_scan, Config};
//! use coffprobing::output::{print_results, save_results};
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let config = Config {
//!     file: std::path::PathBuf::from("subdomains.txt"),
//!     rate_limit: 20,
//!     ..Default::default()
//! };
//!
//! let report = run_scan(config).await?;
//! save_results(&report.groups, std::path::Path::new(".")).await?;
//! print_results(&report.groups, Duration::from_secs_f64(report.elapsed_seconds));
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod aggregate;
mod app;
pub mod config;
pub mod dispatch;
pub mod error_handling;
pub mod initialization;
pub mod input;
pub mod output;
pub mod probe;
pub mod rate_limit;
mod run;
pub mod update;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, Pacing, RateLimit};
pub use probe::{ProbeOutcome, ProbeResult};
pub use run::{run_scan, ScanReport};
