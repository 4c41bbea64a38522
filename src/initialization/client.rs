//! HTTP client initialization.
//!
//! This module provides the client used for probing and the one used for the
//! release feed. Both are built once and shared.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{redirect, ClientBuilder};

use crate::config::{MAX_REDIRECT_HOPS, VERSION};

/// Initializes the probe client.
///
/// Creates a `reqwest::Client` configured with:
/// - A whole-request timeout (connect, TLS, redirects and headers)
/// - Redirect following, up to `MAX_REDIRECT_HOPS` hops
///
/// No headers are added beyond reqwest's defaults (it sends no User-Agent).
///
/// Certificates are verified; a host with an invalid certificate is reported
/// as unreachable over https.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(timeout: Duration) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(timeout)
        .redirect(redirect::Policy::limited(MAX_REDIRECT_HOPS))
        .build()?;
    Ok(Arc::new(client))
}

/// Initializes a client for the release feed.
///
/// The feed rejects requests without a User-Agent, so one is always sent.
pub fn init_release_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(timeout)
        .user_agent(format!("coffprobing/{VERSION}"))
        .build()
}
