//! Scan orchestration.
//!
//! [`run_scan`] validates the configuration, loads the hosts, builds the probe
//! client and then drives dispatcher, limiter and aggregator to completion.

mod consume;

use std::sync::Arc;

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;

use crate::aggregate::ResultGroup;
use crate::app::print_error_statistics;
use crate::config::Config;
use crate::error_handling::{InitializationError, ProcessingStats};
use crate::initialization::init_client;
use crate::input::load_hosts;
use crate::probe::HttpProber;
use crate::rate_limit::RateLimiter;

pub(crate) use consume::consume;

/// Outcome of a completed scan.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    /// URLs grouped by outcome, after filtering
    pub groups: ResultGroup,
    /// Time from first dispatch to last consumed result
    pub elapsed_seconds: f64,
    /// Hosts read from the input file
    pub hosts: usize,
    /// Probe targets submitted (two per host)
    pub targets: usize,
    /// Results consumed, filtered or not
    pub received: usize,
    /// Results that passed the filter
    pub kept: usize,
}

/// Runs a scan with the provided configuration.
///
/// No file is read and no request is sent before the configuration has been
/// validated. Transport failures never fail the scan; they are reported as
/// unreachable outcomes.
///
/// # Errors
///
/// Returns an error if:
/// - the configuration is invalid (non-positive rate limit, bad filter code)
/// - the input file cannot be read
/// - the HTTP client cannot be built
///
/// # Example
///
/// ```no_run
/// use coffprobing::{run_scan, Config};
/// use std::path::PathBuf;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config {
///     file: PathBuf::from("subdomains.txt"),
///     filter_code: Some(200),
///     ..Default::default()
/// };
/// let report = run_scan(config).await?;
/// println!("{} of {} targets kept", report.kept, report.targets);
/// # Ok(())
/// # }
/// ```
pub async fn run_scan(config: Config) -> Result<ScanReport> {
    let rate = config.validate().context("Invalid configuration")?;

    let hosts = load_hosts(&config.file)
        .await
        .context("Failed to load hosts")?;
    info!("Loaded {} hosts from {}", hosts.len(), config.file.display());

    let client = init_client(config.probe_timeout)
        .map_err(InitializationError::from)
        .context("Failed to initialize HTTP client")?;

    let prober = Arc::new(HttpProber::new(client, Arc::new(ProcessingStats::new())));
    let limiter = RateLimiter::new(config.pacing, rate, config.burst);

    let report = consume(
        &hosts,
        Arc::clone(&prober),
        config.max_concurrency,
        config.filter_code,
        limiter,
        Arc::clone(prober.stats()),
    )
    .await;

    print_error_statistics(prober.stats());
    info!(
        "Scan finished: {} targets, {} received, {} kept in {:.2}s",
        report.targets, report.received, report.kept, report.elapsed_seconds
    );
    Ok(report)
}
