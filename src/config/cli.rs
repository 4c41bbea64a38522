//! Command-line options.
//!
//! The binary parses these with `clap` and converts them into a library
//! [`Config`]; flags that only affect the front end (banner, output files,
//! maintenance commands) stay here.

use std::path::PathBuf;

use clap::Parser;

use crate::config::constants::{DEFAULT_BURST, DEFAULT_RATE_LIMIT, PROBE_TIMEOUT, WORKER_POOL_SIZE};
use crate::config::types::{Config, LogFormat, LogLevel, Pacing};

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Probe every host in subdomains.txt at the default 10 results/sec
/// coffprobing -m subdomains.txt
///
/// # Only keep 200 responses, consume 25 results per second
/// coffprobing -m subdomains.txt -f 200 -r 25
///
/// # Replace the running binary with the latest release
/// coffprobing --update
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "coffprobing",
    version,
    about = "Probes subdomains over HTTP and HTTPS and groups them by status code."
)]
pub struct Cli {
    /// Path to file containing subdomains (one per line)
    #[arg(short = 'm', long, value_parser, required_unless_present = "update")]
    pub mass_target: Option<PathBuf>,

    /// Only keep results with this HTTP status code
    #[arg(short = 'f', long)]
    pub filter_code: Option<u16>,

    /// Results consumed per second (must be greater than zero)
    #[arg(short = 'r', long, default_value_t = DEFAULT_RATE_LIMIT, allow_negative_numbers = true)]
    pub rate_limit: i64,

    /// Pacing strategy: fixed|token-bucket
    #[arg(long, value_enum, default_value_t = Pacing::Fixed)]
    pub pacing: Pacing,

    /// Token-bucket capacity (only with --pacing token-bucket)
    #[arg(long, default_value_t = DEFAULT_BURST)]
    pub burst: u32,

    /// Directory the result files are written to
    #[arg(short = 'o', long, value_parser, default_value = ".")]
    pub output_dir: PathBuf,

    /// Also write a JSON summary of the grouped results to this path
    #[arg(long, value_parser)]
    pub json: Option<PathBuf>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Query the release feed and report whether a newer version exists
    #[arg(long)]
    pub check_version: bool,

    /// Update the tool to the latest release and exit
    #[arg(short = 'u', long)]
    pub update: bool,

    /// Do not print the banner
    #[arg(long)]
    pub no_banner: bool,
}

impl Cli {
    /// Builds the library configuration for a scan.
    pub fn to_config(&self) -> Config {
        Config {
            file: self.mass_target.clone().unwrap_or_default(),
            filter_code: self.filter_code,
            rate_limit: self.rate_limit,
            pacing: self.pacing,
            burst: self.burst,
            max_concurrency: WORKER_POOL_SIZE,
            probe_timeout: PROBE_TIMEOUT,
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
        }
    }
}
