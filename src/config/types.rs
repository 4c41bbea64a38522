//! Configuration types.
//!
//! This module defines the enums and structs used for command-line argument
//! parsing and library configuration, and the validation that runs before any
//! probe is dispatched.

use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_BURST, DEFAULT_RATE_LIMIT, MAX_FILTER_CODE, MIN_FILTER_CODE, PROBE_TIMEOUT,
    WORKER_POOL_SIZE,
};
use crate::error_handling::ConfigError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Strategy used to hold result consumption to the configured rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Pacing {
    /// Sleep `1 / rate_limit` seconds after every consumed result.
    Fixed,
    /// Refill tokens at `rate_limit` per second up to `burst`; one token per result.
    TokenBucket,
}

/// A results-per-second ceiling that is known to be positive.
///
/// The only way to build one is [`RateLimit::new`], so holding a `RateLimit`
/// means the division in [`RateLimit::interval`] is well defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit(u32);

impl RateLimit {
    /// Validates a raw rate limit as supplied by the operator.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NonPositiveRateLimit` for zero or negative values.
    pub fn new(value: i64) -> Result<Self, ConfigError> {
        if value <= 0 {
            return Err(ConfigError::NonPositiveRateLimit(value));
        }
        let value = u32::try_from(value).map_err(|_| ConfigError::RateLimitTooLarge(value))?;
        Ok(Self(value))
    }

    /// Results per second.
    pub fn per_second(self) -> u32 {
        self.0
    }

    /// Pause between two consumed results.
    pub fn interval(self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.0))
    }
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by [`crate::run_scan`]. It can be
/// constructed programmatically; the CLI builds one from its parsed flags.
///
/// # Examples
///
/// ```no_run
/// use coffprobing::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: PathBuf::from("subdomains.txt"),
///     filter_code: Some(200),
///     rate_limit: 20,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// File to read hosts from (one per line)
    pub file: PathBuf,

    /// Only keep results with this status code
    pub filter_code: Option<u16>,

    /// Results consumed per second (must be positive)
    pub rate_limit: i64,

    /// How the rate limit is enforced
    pub pacing: Pacing,

    /// Token-bucket capacity, only used with `Pacing::TokenBucket`
    pub burst: u32,

    /// Probes in flight at once
    pub max_concurrency: usize,

    /// Timeout for a single probe
    pub probe_timeout: Duration,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("subdomains.txt"),
            filter_code: None,
            rate_limit: DEFAULT_RATE_LIMIT,
            pacing: Pacing::Fixed,
            burst: DEFAULT_BURST,
            max_concurrency: WORKER_POOL_SIZE,
            probe_timeout: PROBE_TIMEOUT,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Checks every setting that would otherwise fail mid-scan.
    ///
    /// Returns the validated rate limit so callers cannot forget to use it.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for a non-positive rate limit, a filter code
    /// outside `100..=999`, a zero burst or a zero concurrency.
    pub fn validate(&self) -> Result<RateLimit, ConfigError> {
        let rate_limit = RateLimit::new(self.rate_limit)?;

        if let Some(code) = self.filter_code {
            if !(MIN_FILTER_CODE..=MAX_FILTER_CODE).contains(&code) {
                return Err(ConfigError::InvalidFilterCode(code));
            }
        }

        if self.pacing == Pacing::TokenBucket && self.burst == 0 {
            return Err(ConfigError::InvalidBurst);
        }

        if self.max_concurrency == 0 {
            return Err(ConfigError::InvalidConcurrency);
        }

        Ok(rate_limit)
    }
}
