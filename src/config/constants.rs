//! Configuration constants.
//!
//! This module defines the fixed operational parameters of a scan: worker pool
//! size, per-probe timeout, defaults for the CLI, output file names and the
//! release feed used by the maintenance commands.

use std::time::Duration;

/// Number of probes allowed in flight at once.
///
/// Fixed and independent of the rate limit, which only paces consumption.
pub const WORKER_POOL_SIZE: usize = 10;

/// Per-probe timeout covering connect, TLS, redirects and response headers.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Maximum number of redirect hops the prober follows before giving up.
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Default results-per-second consumption rate.
pub const DEFAULT_RATE_LIMIT: i64 = 10;

/// Default token-bucket capacity when `--pacing token-bucket` is used.
pub const DEFAULT_BURST: u32 = 10;

/// Seconds between progress log lines while a scan is running.
pub const LOGGING_INTERVAL: u64 = 5;

/// Scheme prefixes applied to every host, in dispatch order.
pub const SCHEMES: [&str; 2] = ["http://", "https://"];

// Result files
pub const OK_RESULTS_FILE: &str = "200er-results.txt";
pub const AUTH_RESULTS_FILE: &str = "401and403-results.txt";

// HTTP status codes with dedicated result files
pub const HTTP_STATUS_OK: u16 = 200;
pub const HTTP_STATUS_UNAUTHORIZED: u16 = 401;
pub const HTTP_STATUS_FORBIDDEN: u16 = 403;

/// Lowest and highest values accepted for `--filter-code`.
pub const MIN_FILTER_CODE: u16 = 100;
pub const MAX_FILTER_CODE: u16 = 999;

/// Release feed queried by `--check-version` and `--update`.
pub const RELEASE_API_URL: &str =
    "https://api.github.com/repos/G0urmetD/Coffprobing/releases/latest";

/// Timeout for release feed requests.
pub const RELEASE_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Timeout for downloading a release binary.
pub const RELEASE_DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(60);

/// Version compiled into this binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
