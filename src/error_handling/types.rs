//! Error type definitions.
//!
//! This module defines the configuration, initialization and update errors
//! surfaced to the operator, plus the categories used to count per-probe
//! transport failures.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Errors detected before any probe is dispatched.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The rate limit was zero or negative.
    #[error("rate limit must be greater than zero (got {0})")]
    NonPositiveRateLimit(i64),

    /// The rate limit does not fit the limiter's counter.
    #[error("rate limit {0} is too large")]
    RateLimitTooLarge(i64),

    /// The filter code is not a possible HTTP status.
    #[error("filter code must be between 100 and 999 (got {0})")]
    InvalidFilterCode(u16),

    /// Token-bucket pacing was requested with no capacity.
    #[error("burst must be greater than zero for token-bucket pacing")]
    InvalidBurst,

    /// The worker pool would have no workers.
    #[error("concurrency must be greater than zero")]
    InvalidConcurrency,

    /// The hosts file is missing or unreadable.
    #[error("cannot read input file {}: {source}", .path.display())]
    InputFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors raised by the release check and self-update commands.
#[derive(Error, Debug)]
pub enum UpdateError {
    /// The release feed or download could not be reached.
    #[error("request failed: {0}")]
    Request(#[from] ReqwestError),

    /// The release feed or download answered with a non-success status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The release carries no binary for this platform.
    #[error("release has no asset named {0}")]
    MissingAsset(String),

    /// The downloaded binary has no content.
    #[error("downloaded binary is empty")]
    EmptyDownload,

    /// The downloaded binary does not match the advertised size.
    #[error("downloaded {actual} bytes, release advertises {expected}")]
    SizeMismatch { expected: u64, actual: u64 },

    /// Staging, backing up or swapping the binary failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The release feed returned malformed JSON.
    #[error("malformed release metadata: {0}")]
    Json(#[from] serde_json::Error),
}

/// Transport failures that turn a probe into an unreachable outcome.
///
/// The outcome itself is never sub-classified; these categories only feed the
/// end-of-scan statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    HttpRequestBuilderError,
    HttpRequestRedirectError,
    HttpRequestTimeoutError,
    HttpRequestConnectError,
    HttpRequestRequestError,
    HttpRequestOtherError,
    ProbeTaskPanicked,
}

/// Notable events on probes that did produce a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    HttpRedirect,  // final URL differs from the probed one
    HttpsRedirect, // http:// target ended on https://
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::ProbeTaskPanicked => "Probe task panicked",
        }
    }
}

impl InfoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::HttpRedirect => "HTTP redirect",
            InfoType::HttpsRedirect => "HTTP to HTTPS redirect",
        }
    }
}
