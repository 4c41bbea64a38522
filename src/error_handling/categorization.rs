//! Error categorization.
//!
//! Maps `reqwest` failures onto the `ErrorType` counters. Only transport-level
//! failures reach this point: the prober never calls `error_for_status`, so a
//! 4xx/5xx response is a status code, not an error.

use super::stats::ProcessingStats;
use super::types::ErrorType;

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// Timeouts are checked before connect errors because a connect that times
/// out reports both.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if error.is_builder() {
        ErrorType::HttpRequestBuilderError
    } else if error.is_redirect() {
        ErrorType::HttpRequestRedirectError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_request() {
        ErrorType::HttpRequestRequestError
    } else {
        ErrorType::HttpRequestOtherError
    }
}

/// Records a transport failure in the processing statistics.
pub fn update_error_stats(stats: &ProcessingStats, error: &reqwest::Error) -> ErrorType {
    let error_type = categorize_reqwest_error(error);
    stats.increment_error(error_type);
    error_type
}
