//! Probing primitives.
//!
//! A probe is one HTTP GET against one URL. Its outcome is either the final
//! status code or [`ProbeOutcome::Unreachable`]; probing never fails.

mod http;

use std::fmt;
use std::future::Future;

use serde::{Serialize, Serializer};

use crate::config::SCHEMES;

pub use http::HttpProber;

/// Result of probing a single URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeOutcome {
    /// A response arrived; this is its status after redirects.
    Status(u16),
    /// No response: DNS, connect, TLS, timeout or redirect-limit failure.
    Unreachable,
}

impl ProbeOutcome {
    /// Returns the status code, if a response arrived.
    pub fn status(&self) -> Option<u16> {
        match self {
            ProbeOutcome::Status(code) => Some(*code),
            ProbeOutcome::Unreachable => None,
        }
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeOutcome::Status(code) => write!(f, "{code}"),
            ProbeOutcome::Unreachable => f.write_str("Unreachable"),
        }
    }
}

impl Serialize for ProbeOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A completed probe: the URL that was probed and what came back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub url: String,
    pub outcome: ProbeOutcome,
}

impl ProbeResult {
    pub fn new(url: impl Into<String>, outcome: ProbeOutcome) -> Self {
        ProbeResult {
            url: url.into(),
            outcome,
        }
    }
}

/// Builds the probe targets for one host, http first.
pub fn targets_for(host: &str) -> [String; 2] {
    SCHEMES.map(|scheme| format!("{scheme}{host}"))
}

/// Something that can resolve a URL to a [`ProbeOutcome`].
///
/// Implementations must not fail: every error is folded into
/// `ProbeOutcome::Unreachable`.
pub trait Prober {
    fn probe(&self, url: &str) -> impl Future<Output = ProbeOutcome> + Send;
}
